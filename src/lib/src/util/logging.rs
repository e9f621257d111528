use env_logger::Env;
use std::io::Write;

/// Initializes `env_logger` with a compact one-line format. Defaults to `info`
/// and respects `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    match env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let formatted_target = format_target(record.target());
            let file_name = record
                .file()
                .and_then(|file| file.rsplit('/').next())
                .unwrap_or("unknown");
            let line_number = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{}] {} - {}/{}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                formatted_target,
                file_name,
                line_number,
                record.args()
            )
        })
        .try_init()
    {
        Ok(_) => (),
        Err(_) => {
            // Already initialized, happens in tests
        }
    }
}

// "libdevlog::api::client::commits" -> "api/client"
fn format_target(target: &str) -> String {
    let target = target.strip_prefix("libdevlog::").unwrap_or(target);
    target
        .rsplit_once("::")
        .map(|(path, _)| path.replace("::", "/"))
        .unwrap_or_else(|| target.to_string())
}
