//! # LogFetcher
//!
//! Fetches one page of commits for the configured repository and shapes it into a
//! [`DevLogPage`] with absolute links to the neighbouring pages.
//!

use reqwest::Client;

use crate::api;
use crate::config::DevLogConfig;
use crate::error::DevLogError;
use crate::model::{DevLogEntry, DevLogPage};
use crate::opts::PaginateOpts;

#[derive(Debug, Clone)]
pub struct LogFetcher {
    client: Client,
    config: DevLogConfig,
}

impl LogFetcher {
    /// Builds the HTTP client for `config`. Call once at startup and share the fetcher.
    pub fn new(config: DevLogConfig) -> Result<LogFetcher, DevLogError> {
        let client = api::client::new_for_config(&config)?;
        Ok(LogFetcher::with_client(client, config))
    }

    pub fn with_client(client: Client, config: DevLogConfig) -> LogFetcher {
        LogFetcher { client, config }
    }

    /// Fetch page `page_num` of the dev log. `host` is used as is to build the
    /// next/previous page urls. Upstream failures are returned without a partial page.
    pub async fn fetch_page(
        &self,
        page_num: usize,
        host: impl AsRef<str>,
    ) -> Result<DevLogPage, DevLogError> {
        let host = host.as_ref();
        let page_opts = PaginateOpts::for_page(page_num);
        let paginated =
            api::client::commits::list_commits(&self.client, &self.config, &page_opts).await?;

        let entries = paginated
            .commits
            .iter()
            .map(DevLogEntry::from_commit)
            .collect::<Vec<DevLogEntry>>();

        let page = DevLogPage {
            entries,
            next_page_url: paginated
                .links
                .next()
                .map(|page| api::endpoint::page_url(host, page)),
            prev_page_url: paginated
                .links
                .prev()
                .map(|page| api::endpoint::page_url(host, page)),
        };
        log::debug!(
            "fetch_page {} for {}/{} got {} entries next: {:?} prev: {:?}",
            page_num,
            self.config.owner,
            self.config.repo,
            page.entries.len(),
            page.next_page_url,
            page.prev_page_url
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use crate::constants::{DEFAULT_AUTHOR_AVATAR_URL, DEFAULT_AUTHOR_URL, UNKNOWN_AUTHOR_NAME};
    use crate::error::DevLogError;
    use crate::test;
    use crate::LogFetcher;

    async fn mock_commits(
        server: &mut mockito::ServerGuard,
        page: usize,
        link: &str,
        body: String,
    ) -> mockito::Mock {
        server
            .mock("GET", "/repos/ox/devlog/commits")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), page.to_string()),
                Matcher::UrlEncoded("per_page".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("link", link)
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_fetch_page_builds_entries_and_links() -> Result<(), DevLogError> {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let link = test::link_header(&server.url(), Some(3), Some(1));
        let mock = mock_commits(&mut server, 2, &link, test::commits_body(20)).await;

        let fetcher = LogFetcher::new(test::test_config(&server.url()))?;
        let page = fetcher.fetch_page(2, "example.com").await?;

        mock.assert_async().await;
        assert_eq!(page.entries.len(), 20);
        assert_eq!(page.next_page_url.as_deref(), Some("http://example.com/?p=3"));
        assert_eq!(page.prev_page_url.as_deref(), Some("http://example.com/?p=1"));

        // order is preserved from the response
        for (i, entry) in page.entries.iter().enumerate() {
            assert_eq!(entry.rev, test::sha_for(i)[..8]);
            assert_eq!(entry.author_name, format!("Author {i}"));
            assert_eq!(entry.author_url, format!("https://github.com/author-{i}"));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_first_page_has_no_prev() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let link = test::link_header(&server.url(), Some(2), None);
        let _mock = mock_commits(&mut server, 1, &link, test::commits_body(1)).await;

        let fetcher = LogFetcher::new(test::test_config(&server.url()))?;
        let page = fetcher.fetch_page(1, "localhost:8080").await?;

        assert_eq!(page.next_page_url.as_deref(), Some("http://localhost:8080/?p=2"));
        assert_eq!(page.prev_page_url, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_last_page_has_no_next() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let link = test::link_header(&server.url(), None, Some(4));
        let _mock = mock_commits(&mut server, 5, &link, test::commits_body(2)).await;

        let fetcher = LogFetcher::new(test::test_config(&server.url()))?;
        let page = fetcher.fetch_page(5, "example.com").await?;

        assert_eq!(page.next_page_url, None);
        assert_eq!(page.prev_page_url.as_deref(), Some("http://example.com/?p=4"));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_page_applies_fallbacks() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let long_message = "m".repeat(80);
        let body = json!([
            test::commit_json(&test::sha_for(7), "", &long_message, None),
        ])
        .to_string();
        let _mock = mock_commits(&mut server, 1, "", body).await;

        let fetcher = LogFetcher::new(test::test_config(&server.url()))?;
        let page = fetcher.fetch_page(1, "example.com").await?;

        let entry = &page.entries[0];
        assert_eq!(entry.author_name, UNKNOWN_AUTHOR_NAME);
        assert_eq!(entry.author_url, DEFAULT_AUTHOR_URL);
        assert_eq!(entry.author_avatar_url, DEFAULT_AUTHOR_AVATAR_URL);
        assert_eq!(entry.message, format!("{}...", "m".repeat(64)));
        assert_eq!(entry.rev, "00000007");
        assert_eq!(page.next_page_url, None);
        assert_eq!(page.prev_page_url, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_page_upstream_failure() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/ox/devlog/commits")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let fetcher = LogFetcher::new(test::test_config(&server.url()))?;
        let result = fetcher.fetch_page(1, "example.com").await;

        match result {
            Err(err) => assert!(err.is_upstream()),
            Ok(page) => panic!("expected an error, got {:?}", page),
        }
        Ok(())
    }
}
