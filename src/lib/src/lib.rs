//! 📜 libdevlog
//!
//! Fetch the commit history of a repository from the GitHub API and shape it into
//! paginated dev log pages ready to render.
//!
//! # Examples
//!
//! ```no_run
//! use libdevlog::config::DevLogConfig;
//! use libdevlog::error::DevLogError;
//! use libdevlog::LogFetcher;
//!
//! async fn print_first_page() -> Result<(), DevLogError> {
//!     let config = DevLogConfig::new("Oxen-AI", "Oxen").with_auth_token("TOKEN");
//!     let fetcher = LogFetcher::new(config)?;
//!     let page = fetcher.fetch_page(1, "localhost:8080").await?;
//!     for entry in page.entries {
//!         println!("{} {} {}", entry.rev, entry.author_name, entry.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod log_fetcher;
pub mod model;
pub mod opts;
pub mod util;
pub mod view;

pub use crate::log_fetcher::LogFetcher;
