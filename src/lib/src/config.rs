//! Configuration for the dev log: which repository to read and how to reach the API
//!

pub mod devlog_config;

pub use crate::config::devlog_config::DevLogConfig;
pub use crate::config::devlog_config::DEVLOG_CONFIG_FILENAME;
