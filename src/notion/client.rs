//! Notion API client.
//!
//! [`NotionApi`] is the seam between the tool layer and the network. The
//! production implementation, [`HttpNotionClient`], speaks the Notion REST
//! API over `reqwest`; tests substitute in-memory fakes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::NotionError;
use super::request::NotionRequest;
use crate::core::config::NotionConfig;

/// Header carrying the pinned API version.
const NOTION_VERSION_HEADER: &str = "notion-version";

/// Async access to the Notion API.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Send one request and return the decoded JSON response.
    async fn send(&self, request: NotionRequest) -> Result<Value, NotionError>;
}

/// Error object returned by Notion for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// `reqwest`-backed Notion client.
#[derive(Clone)]
pub struct HttpNotionClient {
    http: reqwest::Client,
    base_url: String,
    root: Url,
}

impl std::fmt::Debug for HttpNotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNotionClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpNotionClient {
    /// Build a client from the Notion configuration.
    ///
    /// Returns `Ok(None)` when no API token is configured.
    pub fn from_config(config: &NotionConfig) -> Result<Option<Self>, NotionError> {
        let Some(token) = config.api_token.as_deref() else {
            return Ok(None);
        };

        Self::new(
            token,
            &config.base_url,
            &config.api_version,
            Duration::from_secs(config.timeout_secs),
        )
        .map(Some)
    }

    /// Build a client with explicit settings.
    pub fn new(
        token: &str,
        base_url: &str,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, NotionError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| NotionError::Build("API token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            HeaderName::from_static(NOTION_VERSION_HEADER),
            HeaderValue::from_str(api_version)
                .map_err(|_| NotionError::Build(format!("invalid API version '{}'", api_version)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| NotionError::Build(e.to_string()))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let root = Url::parse(&base_url)
            .map_err(|e| NotionError::Build(format!("invalid base URL '{}': {}", base_url, e)))?;
        if root.cannot_be_a_base() {
            return Err(NotionError::Build(format!("invalid base URL '{}'", base_url)));
        }

        Ok(Self {
            http,
            base_url,
            root,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of `request`, with every path segment percent-encoded.
    pub fn url_for(&self, request: &NotionRequest) -> Url {
        let mut url = self.root.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(request.path_segments());
        }
        url
    }

    /// Turn a non-success response into a [`NotionError::Api`].
    async fn error_from_response(response: reqwest::Response) -> NotionError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) if !err.message.is_empty() => {
                NotionError::api(status.as_u16(), err.code, err.message)
            }
            _ => {
                let reason = status.canonical_reason().unwrap_or("Unknown status");
                NotionError::api(
                    status.as_u16(),
                    "http_error",
                    format!("Notion API error {}: {}", status.as_u16(), reason),
                )
            }
        }
    }
}

#[async_trait]
impl NotionApi for HttpNotionClient {
    #[instrument(skip_all, fields(operation = request.operation()))]
    async fn send(&self, request: NotionRequest) -> Result<Value, NotionError> {
        let url = self.url_for(&request);
        debug!("{} {}", request.method(), url);

        let mut builder = self.http.request(request.method(), url);

        let query = request.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = request.body() {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            warn!("Notion API call {} failed: {}", request.operation(), err);
            return Err(err);
        }

        let bytes = response.bytes().await?;
        debug!("Notion API response received: {} bytes", bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|e| NotionError::invalid_response(format!("JSON parse error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::request::Pagination;
    use serde_json::{Map, json};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpNotionClient {
        HttpNotionClient::new(
            "secret_test_token",
            &server.uri(),
            "2022-06-28",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_from_config_without_token() {
        let config = NotionConfig::default();
        assert!(HttpNotionClient::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_from_config_trims_base_url() {
        let config = NotionConfig {
            api_token: Some("secret".to_string()),
            base_url: "https://api.notion.com/".to_string(),
            ..NotionConfig::default()
        };
        let client = HttpNotionClient::from_config(&config).unwrap().unwrap();
        assert_eq!(client.base_url(), "https://api.notion.com");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpNotionClient::new("secret", "not a url", "2022-06-28", Duration::from_secs(5))
            .unwrap_err();
        assert!(matches!(err, NotionError::Build(_)));
    }

    #[test]
    fn test_url_keeps_base_path_and_encodes_ids() {
        let client = HttpNotionClient::new(
            "secret",
            "http://proxy.local/notion/",
            "2022-06-28",
            Duration::from_secs(5),
        )
        .unwrap();
        let url = client.url_for(&NotionRequest::RetrievePage {
            page_id: "a/b?c#d".to_string(),
        });
        assert_eq!(url.as_str(), "http://proxy.local/notion/v1/pages/a%2Fb%3Fc%23d");
    }

    #[tokio::test]
    async fn test_slash_in_id_stays_on_declared_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pages/x%2Fusers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "page" })))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server)
            .send(NotionRequest::RetrievePage {
                page_id: "x/users".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(value["object"], "page");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = HttpNotionClient::new(
            "secret_abc",
            "https://api.notion.com",
            "2022-06-28",
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(!format!("{:?}", client).contains("secret_abc"));
    }

    #[tokio::test]
    async fn test_sends_auth_and_version_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pages/page-1"))
            .and(header("authorization", "Bearer secret_test_token"))
            .and(header("notion-version", "2022-06-28"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "object": "page", "id": "page-1" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = client
            .send(NotionRequest::RetrievePage {
                page_id: "page-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(value["id"], "page-1");
    }

    #[tokio::test]
    async fn test_list_children_passes_pagination_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/blocks/blk/children"))
            .and(query_param("start_cursor", "next"))
            .and(query_param("page_size", "50"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "object": "list", "results": [], "has_more": false })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = client
            .send(NotionRequest::ListBlockChildren {
                block_id: "blk".to_string(),
                page: Pagination::new(Some("next".to_string()), Some(50)),
            })
            .await
            .unwrap();

        assert_eq!(value["object"], "list");
    }

    #[tokio::test]
    async fn test_search_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .and(body_json(json!({ "query": "roadmap", "page_size": 5 })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "object": "list", "results": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut body = Map::new();
        body.insert("query".into(), json!("roadmap"));

        let client = client_for(&server);
        client
            .send(NotionRequest::Search {
                body,
                page: Pagination::new(None, Some(5)),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_api_error_uses_notion_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "object": "error",
                "status": 403,
                "code": "restricted_resource",
                "message": "Insufficient permissions for this endpoint."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send(NotionRequest::ListUsers {
                page: Pagination::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Insufficient permissions for this endpoint.");
        assert_eq!(err.code(), Some("restricted_resource"));
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn test_non_json_error_falls_back_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/blocks/gone"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send(NotionRequest::DeleteBlock {
                block_id: "gone".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_invalid_json_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.send(NotionRequest::RetrieveBotUser).await.unwrap_err();
        assert!(matches!(err, NotionError::InvalidResponse(_)));
    }
}
