use serde::{Deserialize, Serialize};

/// A commit as listed by `GET /repos/{owner}/{repo}/commits`.
///
/// Only the fields the dev log renders are modelled, everything else in the
/// payload is ignored during deserialization.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RepoCommit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetails,
    /// The hosting service account linked to the commit author, `null` when
    /// the author email does not match any account.
    #[serde(default)]
    pub author: Option<AccountProfile>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommitDetails {
    #[serde(default)]
    pub author: Option<GitSignature>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountProfile {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl RepoCommit {
    pub fn author_name(&self) -> Option<&str> {
        self.commit
            .author
            .as_ref()
            .and_then(|author| author.name.as_deref())
    }

    pub fn author_url(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|profile| profile.html_url.as_deref())
    }

    pub fn author_avatar_url(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|profile| profile.avatar_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DevLogError;
    use crate::model::RepoCommit;

    #[test]
    fn test_deserialize_commit_with_profile() -> Result<(), DevLogError> {
        let body = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "node_id": "MDY6Q29tbWl0NmRjYjA5YjViNTc4NzVmMzM0ZjYxYWViZWQ2OTVlMmU0MTkzZGI1ZQ==",
            "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "commit": {
                "author": {"name": "Monalisa Octocat", "email": "support@github.com", "date": "2011-04-14T16:00:49Z"},
                "message": "Fix all the bugs",
                "comment_count": 0
            },
            "author": {
                "login": "octocat",
                "avatar_url": "https://github.com/images/error/octocat_happy.gif",
                "html_url": "https://github.com/octocat"
            },
            "parents": []
        }"#;

        let commit: RepoCommit = serde_json::from_str(body)?;
        assert_eq!(commit.author_name(), Some("Monalisa Octocat"));
        assert_eq!(commit.author_url(), Some("https://github.com/octocat"));
        assert_eq!(
            commit.author_avatar_url(),
            Some("https://github.com/images/error/octocat_happy.gif")
        );
        assert_eq!(commit.commit.message, "Fix all the bugs");
        Ok(())
    }

    #[test]
    fn test_deserialize_commit_without_profile() -> Result<(), DevLogError> {
        let body = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b5",
            "commit": {"author": {"name": "", "email": "x@y.z"}, "message": "m"},
            "author": null
        }"#;

        let commit: RepoCommit = serde_json::from_str(body)?;
        assert_eq!(commit.author_name(), Some(""));
        assert!(commit.author.is_none());
        assert_eq!(commit.author_url(), None);
        Ok(())
    }
}
