use reqwest::header::LINK;
use reqwest::Client;

use crate::api::{client, endpoint};
use crate::config::DevLogConfig;
use crate::error::DevLogError;
use crate::model::RepoCommit;
use crate::opts::PaginateOpts;
use crate::util;
use crate::view::PaginatedCommits;

/// List one page of commits for the configured repository, newest first.
pub async fn list_commits(
    client: &Client,
    config: &DevLogConfig,
    page_opts: &PaginateOpts,
) -> Result<PaginatedCommits, DevLogError> {
    let mut url = endpoint::commits_url(config)?;
    url.query_pairs_mut()
        .append_pair("page", &page_opts.page_num.to_string())
        .append_pair("per_page", &page_opts.page_size.to_string());
    log::debug!("api::client::commits::list_commits {}", url);

    let res = client.get(url.clone()).send().await?;
    let links = res
        .headers()
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .map(util::paginate::parse_link_header)
        .unwrap_or_default();

    let body = client::parse_json_body(url.as_str(), res).await?;
    let commits: Vec<RepoCommit> = match serde_json::from_str(&body) {
        Ok(commits) => commits,
        Err(err) => {
            log::error!(
                "list_commits() Could not deserialize response [{}]\n{}",
                err,
                body
            );
            return Err(DevLogError::JSON(err));
        }
    };
    log::debug!(
        "api::client::commits::list_commits got {} commits, links {:?}",
        commits.len(),
        links
    );

    Ok(PaginatedCommits { commits, links })
}
