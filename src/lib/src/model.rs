//! Data types for commits read from the upstream API and the dev log built from them
//!

pub mod devlog_entry;
pub mod page_links;
pub mod repo_commit;

pub use crate::model::devlog_entry::{DevLogEntry, DevLogPage};
pub use crate::model::page_links::PageLinks;
pub use crate::model::repo_commit::{AccountProfile, CommitDetails, GitSignature, RepoCommit};
