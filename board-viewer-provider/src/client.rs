//! reqwest implementation of [`ListingService`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ListingService;
use crate::types::{BoardListingResponse, ListingQuery, PageResult, RoleResponse};

/// Endpoint name used in logs and errors for `GET /boards`.
pub const BOARDS_ENDPOINT: &str = "boards";
/// Endpoint name used in logs and errors for `GET /user/role`.
pub const ROLE_ENDPOINT: &str = "user/role";

/// Connection settings for [`HttpListingClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Service root, e.g. `http://localhost:8080`. A trailing slash is ignored.
    pub base_url: String,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// Extra attempts for transient failures. `0` sends each request exactly once.
    pub max_retries: u32,
    /// Role value that grants privileged affordances.
    pub privileged_role: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            max_retries: 0,
            privileged_role: "ADMIN".to_string(),
        }
    }
}

/// HTTP listing client
pub struct HttpListingClient {
    client: Client,
    options: ClientOptions,
}

impl HttpListingClient {
    pub fn new(options: ClientOptions) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(options.connect_timeout_secs))
            .timeout(Duration::from_secs(options.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// `{base}/boards?type={token}&page={n}&size={n}`
    pub fn listing_url(&self, query: &ListingQuery) -> String {
        let query = query.validated();
        format!(
            "{}/boards?type={}&page={}&size={}",
            self.base_url(),
            urlencoding::encode(&query.board_type),
            query.page,
            query.page_size
        )
    }

    /// `{base}/user/role`
    pub fn role_url(&self) -> String {
        format!("{}/user/role", self.base_url())
    }

    fn base_url(&self) -> &str {
        self.options.base_url.trim_end_matches('/')
    }

    async fn get_text(&self, endpoint: &str, url: &str) -> Result<String> {
        HttpUtils::execute_request_with_retry(
            self.client.get(url),
            endpoint,
            url,
            self.options.max_retries,
        )
        .await
    }
}

#[async_trait]
impl ListingService for HttpListingClient {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<PageResult> {
        let url = self.listing_url(query);
        let body = self.get_text(BOARDS_ENDPOINT, &url).await?;
        let response: BoardListingResponse = HttpUtils::parse_json(&body, BOARDS_ENDPOINT)?;
        Ok(response.into_page_result())
    }

    async fn fetch_privilege(&self) -> Result<bool> {
        let url = self.role_url();
        let body = self.get_text(ROLE_ENDPOINT, &url).await?;
        let response: RoleResponse = HttpUtils::parse_json(&body, ROLE_ENDPOINT)?;
        Ok(response.role.as_deref() == Some(self.options.privileged_role.as_str()))
    }
}
