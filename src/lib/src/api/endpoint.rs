use std::env;

use url::Url;

use crate::config::DevLogConfig;
use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, ENV_HOST, ENV_PORT, PAGE_PARAM};
use crate::error::DevLogError;

/// Host the server binds to, from `HOST` or the default.
pub fn host() -> String {
    env::var(ENV_HOST).unwrap_or_else(|_| String::from(DEFAULT_HOST))
}

/// Port the server binds to, from `PORT` or the default.
pub fn port() -> String {
    env::var(ENV_PORT).unwrap_or_else(|_| String::from(DEFAULT_PORT))
}

/// `{api_url}/repos/{owner}/{repo}/commits`
pub fn commits_url(config: &DevLogConfig) -> Result<Url, DevLogError> {
    let mut url = Url::parse(&config.api_url)?;
    url.path_segments_mut()
        .map_err(|_| {
            DevLogError::invalid_config(format!("cannot use {} as a base url", config.api_url))
        })?
        .pop_if_empty()
        .extend(["repos", config.owner.as_str(), config.repo.as_str(), "commits"]);
    Ok(url)
}

/// Absolute link to a page of the dev log served from `host`.
pub fn page_url(host: impl AsRef<str>, page: usize) -> String {
    format!("http://{}/?{}={}", host.as_ref(), PAGE_PARAM, page)
}
