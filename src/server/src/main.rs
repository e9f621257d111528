use libdevlog::api;
use libdevlog::config::DevLogConfig;
use libdevlog::util;
use libdevlog::LogFetcher;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod params;
pub mod routes;
pub mod templates;

extern crate dotenv;
extern crate log;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::path::PathBuf;

use crate::app_data::DevLogAppData;
use crate::templates::Templates;

#[derive(Parser)]
#[command(name = "devlog-server")]
#[command(version, about = "Serves the commit history of a GitHub repository as a paginated dev log")]
struct Cli {
    /// Host to bind to, defaults to $HOST or 0.0.0.0
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, defaults to $PORT or 8080
    #[arg(short, long)]
    port: Option<u16>,

    /// TOML config with `owner`, `repo`, `auth_token` and `api_url`, defaults to ./devlog.toml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of tera templates providing index.html
    #[arg(short, long)]
    templates: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    util::logging::init_logging();

    let cli = Cli::parse();
    let host = cli.host.unwrap_or_else(api::endpoint::host);
    let port: u16 = match cli.port {
        Some(port) => port,
        None => api::endpoint::port().parse::<u16>()?,
    };

    let config_path = cli.config.or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(DevLogConfig::find_in_dir)
    });
    let config = DevLogConfig::load(config_path.as_deref())?;
    if !config.has_auth_token() {
        log::warn!("No auth token configured, upstream requests will be unauthenticated and heavily rate limited");
    }
    log::info!("Serving dev log for {}/{} from {}", config.owner, config.repo, config.api_url);

    let fetcher = LogFetcher::new(config)?;
    let templates = match &cli.templates {
        Some(dir) => Templates::from_dir(dir)?,
        None => Templates::builtin()?,
    };
    let data = DevLogAppData::new(fetcher, templates);

    log::info!("Running 📜 server on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::config)
            .default_service(web::route().to(controllers::not_found::index))
            .wrap(Logger::default())
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
