//! reqwest-backed implementation of the service traits

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use youstream_core::prelude::*;

use crate::protocol::{
    InterestTagsResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UsernameCheckRequest, UsernameCheckResponse, VideosResponse,
};
use crate::services::{AuthService, CatalogService, VideoService};

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
            connect_timeout_secs: 5,
            user_agent: format!("YouStream/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Parse and normalize a base URL so relative joins keep its path
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized).map_err(|e| Error::invalid_base_url(raw, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_base_url(raw, "scheme must be http or https"));
    }
    Ok(url)
}

/// Client for the Auth, Catalog and Video services
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::http(format!("Failed to create HTTP client: {e}")))?;

        info!("API client targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::invalid_base_url(self.base_url.as_str(), e.to_string()))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn get_json<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("GET {} {:?}", url, query);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::http(err.to_string())
}

/// Decode a JSON body regardless of status.
///
/// The backend reports failures as JSON with a non-2xx status (401 on bad
/// credentials, 400 on validation, 500 on upstream errors); those bodies are
/// still meaningful responses. Only an undecodable body is a transport error.
async fn decode<R: DeserializeOwned>(response: Response) -> Result<R> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    match serde_json::from_slice::<R>(&bytes) {
        Ok(value) => {
            if !status.is_success() {
                debug!("Decoded error response body (HTTP {})", status);
            }
            Ok(value)
        }
        Err(e) if status.is_success() => Err(Error::http(format!("invalid response body: {e}"))),
        Err(_) => Err(Error::http(format!("HTTP {status}"))),
    }
}

impl AuthService for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post_json("login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.post_json("register", request).await
    }
}

impl CatalogService for ApiClient {
    async fn interest_tags(&self) -> Result<InterestTagsResponse> {
        self.get_json("entertainment-types", &[]).await
    }

    async fn check_username(&self, username: &str) -> Result<UsernameCheckResponse> {
        let body = UsernameCheckRequest {
            username: username.to_string(),
        };
        self.post_json("check-username", &body).await
    }
}

impl VideoService for ApiClient {
    async fn popular(&self, max_results: u32) -> Result<VideosResponse> {
        self.get_json(
            "api/videos/popular",
            &[("maxResults", max_results.to_string())],
        )
        .await
    }

    async fn search(&self, query: &str, max_results: u32) -> Result<VideosResponse> {
        self.get_json(
            "api/videos/search",
            &[
                ("q", query.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }
}
