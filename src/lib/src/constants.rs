//! Constants used throughout the dev log library and server
//!

/// Version of the library, used in the User-Agent sent upstream
pub const DEVLOG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = "devlog";

// Server
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";

// Upstream API
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Pagination
pub const DEFAULT_PAGE_NUM: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const PAGE_PARAM: &str = "p";

// Dev log entries
pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown";
pub const DEFAULT_AUTHOR_URL: &str = "#";
pub const DEFAULT_AUTHOR_AVATAR_URL: &str =
    "https://i2.wp.com/assets-cdn.github.com/images/gravatars/gravatar-user-420.png?ssl=1";
pub const SHORT_REV_LEN: usize = 8;
pub const MAX_MESSAGE_LEN: usize = 64;
pub const MESSAGE_ELLIPSIS: &str = "...";

// Environment
pub const ENV_OWNER: &str = "DEVLOG_OWNER";
pub const ENV_REPO: &str = "DEVLOG_REPO";
pub const ENV_AUTH_TOKEN: &str = "DEVLOG_AUTH_TOKEN";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_API_URL: &str = "DEVLOG_API_URL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
