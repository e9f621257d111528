//! Errors for the dev log library
//!
//! Enumeration for all errors that can occur while loading configuration and
//! fetching commits from the upstream API.
//!

use derive_more::{Display, Error};
use std::fmt;
use std::io;
use std::path::Path;

pub const OWNER_NOT_SET: &str =
    "repository owner not configured, set it with the DEVLOG_OWNER env var or `owner` in the config file";

pub const REPO_NOT_SET: &str =
    "repository name not configured, set it with the DEVLOG_REPO env var or `repo` in the config file";

/// String wrapper so plain messages can live inside `DevLogError` variants.
#[derive(Display, Clone, PartialEq, Eq)]
pub struct StringError(String);

impl StringError {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringError {
    fn from(s: &str) -> Self {
        StringError(s.to_owned())
    }
}

impl From<String> for StringError {
    fn from(s: String) -> Self {
        StringError(s)
    }
}

impl fmt::Debug for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StringError {}

#[derive(Debug, Display, Error)]
pub enum DevLogError {
    // Config
    InvalidConfig(StringError),
    ConfigNotFound(StringError),

    // Upstream API
    UpstreamStatus(Box<StringError>),

    // External Library Errors
    IO(io::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),

    // Fallback
    Basic(StringError),
}

impl DevLogError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        DevLogError::Basic(StringError::from(s.as_ref()))
    }

    pub fn invalid_config(s: impl AsRef<str>) -> Self {
        DevLogError::InvalidConfig(StringError::from(s.as_ref()))
    }

    pub fn owner_not_set() -> Self {
        DevLogError::invalid_config(OWNER_NOT_SET)
    }

    pub fn repo_not_set() -> Self {
        DevLogError::invalid_config(REPO_NOT_SET)
    }

    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        DevLogError::ConfigNotFound(StringError::from(format!(
            "config file not found: {}",
            path.as_ref().display()
        )))
    }

    pub fn upstream_status(
        status: impl fmt::Display,
        url: impl AsRef<str>,
        body: impl AsRef<str>,
    ) -> Self {
        DevLogError::UpstreamStatus(Box::new(StringError::from(format!(
            "upstream returned {} for {}: {}",
            status,
            url.as_ref(),
            body.as_ref()
        ))))
    }

    /// True for failures of the outbound commit-listing call.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DevLogError::HTTP(_) | DevLogError::UpstreamStatus(_) | DevLogError::JSON(_)
        )
    }
}

impl From<io::Error> for DevLogError {
    fn from(error: io::Error) -> Self {
        DevLogError::IO(error)
    }
}

impl From<toml::de::Error> for DevLogError {
    fn from(error: toml::de::Error) -> Self {
        DevLogError::TomlDe(error)
    }
}

impl From<url::ParseError> for DevLogError {
    fn from(error: url::ParseError) -> Self {
        DevLogError::URL(error)
    }
}

impl From<serde_json::Error> for DevLogError {
    fn from(error: serde_json::Error) -> Self {
        DevLogError::JSON(error)
    }
}

impl From<reqwest::Error> for DevLogError {
    fn from(error: reqwest::Error) -> Self {
        DevLogError::HTTP(error)
    }
}
