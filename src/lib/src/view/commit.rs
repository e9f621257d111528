use serde::{Deserialize, Serialize};

use crate::model::{PageLinks, RepoCommit};

/// One page of upstream commits and the page numbers around it.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PaginatedCommits {
    pub commits: Vec<RepoCommit>,
    pub links: PageLinks,
}
