use crate::constants::{
    DEFAULT_API_URL, ENV_API_URL, ENV_AUTH_TOKEN, ENV_GITHUB_TOKEN, ENV_OWNER, ENV_REPO,
};
use crate::error::DevLogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEVLOG_CONFIG_FILENAME: &str = "devlog.toml";

fn default_api_url() -> String {
    String::from(DEFAULT_API_URL)
}

/// Which repository to read the dev log from, and how to reach the API serving it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DevLogConfig {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for DevLogConfig {
    fn default() -> Self {
        DevLogConfig {
            owner: String::new(),
            repo: String::new(),
            auth_token: None,
            api_url: default_api_url(),
        }
    }
}

// Keep the token out of logs
impl fmt::Debug for DevLogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevLogConfig")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl DevLogConfig {
    pub fn new(owner: impl AsRef<str>, repo: impl AsRef<str>) -> DevLogConfig {
        DevLogConfig {
            owner: String::from(owner.as_ref()),
            repo: String::from(repo.as_ref()),
            ..DevLogConfig::default()
        }
    }

    pub fn with_auth_token(mut self, token: impl AsRef<str>) -> DevLogConfig {
        self.auth_token = Some(String::from(token.as_ref()));
        self
    }

    pub fn with_api_url(mut self, api_url: impl AsRef<str>) -> DevLogConfig {
        self.api_url = String::from(api_url.as_ref());
        self
    }

    /// Reads a TOML config file without validating it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<DevLogConfig, DevLogError> {
        let path = path.as_ref();
        log::debug!("looking for config file in...{:?}", path);
        if !path.exists() {
            return Err(DevLogError::config_not_found(path));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// `devlog.toml` inside `dir`, if there is one.
    pub fn find_in_dir(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let path = dir.as_ref().join(DEVLOG_CONFIG_FILENAME);
        if path.is_file() {
            log::debug!("found config file {:?}", path);
            Some(path)
        } else {
            None
        }
    }

    /// Loads the config file if one is given, applies environment overrides and validates the result.
    pub fn load(path: Option<&Path>) -> Result<DevLogConfig, DevLogError> {
        let mut config = match path {
            Some(path) => DevLogConfig::from_path(path)?,
            None => DevLogConfig::default(),
        };
        config.apply_vars(|key| std::env::var(key).ok());
        config.validate()
    }

    /// Overrides fields with any non-empty values returned by `lookup`.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        if let Some(owner) = lookup(ENV_OWNER) {
            self.owner = owner;
        }
        if let Some(repo) = lookup(ENV_REPO) {
            self.repo = repo;
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN).or_else(|| lookup(ENV_GITHUB_TOKEN)) {
            self.auth_token = Some(token);
        }
        if let Some(api_url) = lookup(ENV_API_URL) {
            self.api_url = api_url;
        }
    }

    pub fn validate(mut self) -> Result<DevLogConfig, DevLogError> {
        self.owner = self.owner.trim().to_string();
        self.repo = self.repo.trim().to_string();
        if self.owner.is_empty() {
            return Err(DevLogError::owner_not_set());
        }
        if self.repo.is_empty() {
            return Err(DevLogError::repo_not_set());
        }

        let api_url = Url::parse(self.api_url.trim())?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(DevLogError::invalid_config(format!(
                "api_url must be an http(s) url, got {}",
                self.api_url
            )));
        }
        self.api_url = api_url.as_str().trim_end_matches('/').to_string();

        if self.auth_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.auth_token = None;
        }
        Ok(self)
    }

    pub fn has_auth_token(&self) -> bool {
        self.auth_token.is_some()
    }
}
