use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTHOR_AVATAR_URL, DEFAULT_AUTHOR_URL, UNKNOWN_AUTHOR_NAME};
use crate::model::RepoCommit;
use crate::util;

/// One row of the dev log table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DevLogEntry {
    pub author_name: String,
    pub author_url: String,
    pub author_avatar_url: String,
    pub rev: String,
    pub rev_link: String,
    pub message: String,
}

/// Everything the index template needs to render one page of the dev log.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DevLogPage {
    pub entries: Vec<DevLogEntry>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

impl DevLogEntry {
    pub fn from_commit(commit: &RepoCommit) -> DevLogEntry {
        let author_name = match commit.author_name() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_AUTHOR_NAME,
        };

        DevLogEntry {
            author_name: String::from(author_name),
            author_url: String::from(commit.author_url().unwrap_or(DEFAULT_AUTHOR_URL)),
            author_avatar_url: String::from(
                commit
                    .author_avatar_url()
                    .unwrap_or(DEFAULT_AUTHOR_AVATAR_URL),
            ),
            rev: util::str::short_rev(&commit.sha),
            rev_link: commit.html_url.to_owned(),
            message: util::str::truncate_message(&commit.commit.message),
        }
    }
}
