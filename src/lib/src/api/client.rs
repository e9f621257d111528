//! # API Client - For talking to the repository hosting API
//!

use crate::config::DevLogConfig;
use crate::constants::{
    DEFAULT_TIMEOUT_SECS, DEVLOG_VERSION, GITHUB_ACCEPT, GITHUB_API_VERSION,
    GITHUB_API_VERSION_HEADER, USER_AGENT,
};
use crate::error::DevLogError;
use reqwest::{header, Client, ClientBuilder};
use std::time;

pub mod commits;

/// Builds the client shared by every request. Construct it once at startup.
pub fn new_for_config(config: &DevLogConfig) -> Result<Client, DevLogError> {
    match builder_for_config(config)?
        .timeout(time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(DevLogError::HTTP(reqwest_err)),
    }
}

pub fn builder_for_config(config: &DevLogConfig) -> Result<ClientBuilder, DevLogError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        header::HeaderName::from_static(GITHUB_API_VERSION_HEADER),
        header::HeaderValue::from_static(GITHUB_API_VERSION),
    );

    if let Some(auth_token) = &config.auth_token {
        log::debug!("Setting bearer token for host: {}", config.api_url);
        headers.insert(header::AUTHORIZATION, bearer_header(auth_token)?);
    } else {
        log::trace!("No auth token found for host: {}", config.api_url);
    }

    Ok(builder().default_headers(headers))
}

fn bearer_header(bearer_token: &str) -> Result<header::HeaderValue, DevLogError> {
    let auth_header = format!("Bearer {bearer_token}");
    let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
        Ok(header) => header,
        Err(err) => {
            log::debug!("api::client invalid header value: {}", err);
            return Err(DevLogError::invalid_config(
                "Error setting request auth. Please check your auth token.",
            ));
        }
    };
    auth_value.set_sensitive(true);
    Ok(auth_value)
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(build_user_agent())
}

fn build_user_agent() -> String {
    format!("{USER_AGENT}/{DEVLOG_VERSION}")
}

/// Reads the body, turning any non-2xx status into `DevLogError::UpstreamStatus`
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, DevLogError> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        log::debug!("api::client::parse_json_body {} {} {}", status, url, body);
        Err(DevLogError::upstream_status(status, url, body))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client;
    use crate::config::DevLogConfig;
    use crate::error::DevLogError;

    #[test]
    fn test_user_agent_has_version() {
        let user_agent = client::build_user_agent();
        assert!(user_agent.starts_with("devlog/"));
        assert!(user_agent.len() > "devlog/".len());
    }

    #[test]
    fn test_client_rejects_token_with_newline() {
        let config = DevLogConfig::new("o", "r").with_auth_token("bad\ntoken");
        let result = client::new_for_config(&config);
        assert!(matches!(result, Err(DevLogError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_client_sends_default_headers() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", "Bearer abc")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", mockito::Matcher::Regex(r"^devlog/".to_string()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = DevLogConfig::new("o", "r").with_auth_token("abc");
        let client = client::new_for_config(&config)?;
        let url = format!("{}/ping", server.url());
        let res = client.get(&url).send().await?;
        let body = client::parse_json_body(&url, res).await?;

        assert_eq!(body, "[]");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_client_without_token_sends_no_auth() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client::new_for_config(&DevLogConfig::new("o", "r"))?;
        client.get(format!("{}/ping", server.url())).send().await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_parse_json_body_error_status() -> Result<(), DevLogError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;

        let client = client::new_for_config(&DevLogConfig::new("o", "r"))?;
        let url = format!("{}/ping", server.url());
        let res = client.get(&url).send().await?;
        let result = client::parse_json_body(&url, res).await;

        match result {
            Err(DevLogError::UpstreamStatus(msg)) => {
                assert!(msg.to_string().contains("Bad credentials"));
            }
            other => panic!("expected UpstreamStatus, got {:?}", other),
        }
        Ok(())
    }
}
