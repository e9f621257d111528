//! Response bodies and status messages shared by the library and the server
//!

pub mod commit;
pub mod health;
pub mod http;
pub mod status_message;

pub use crate::view::commit::PaginatedCommits;
pub use crate::view::health::HealthResponse;
pub use crate::view::status_message::{StatusMessage, StatusMessageDescription};
