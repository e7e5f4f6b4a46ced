use crate::client::jsonapi::{ErrorDocument, RequestDocument};
use crate::config::TfeConfig;
use crate::error::{ApiError, ValidationError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// JSON:API media type used for both requests and responses.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

fn user_agent() -> String {
    format!("tfe-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for one service address and token.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// per-call state, so it can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct TfeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TfeClient {
    /// Build a client from resolved configuration.
    ///
    /// Fails when no token is configured or the address is not a URL.
    pub fn new(config: &TfeConfig) -> Result<Self, ApiError> {
        let token = config
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ApiError::ConfigError(
                    "Missing API token (set TFE_TOKEN or `token` in config)".to_string(),
                )
            })?;
        let base_url = resolve_base_url(&config.address, &config.base_path)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            ApiError::ConfigError("API token contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));

        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent())
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        debug!(base_url = %base_url, "Created API client");
        Ok(Self { http, base_url })
    }

    /// Client for `address` with default base path and timeout.
    pub fn with_token(address: &str, token: &str) -> Result<Self, ApiError> {
        Self::new(&TfeConfig {
            address: address.to_string(),
            token: Some(token.to_string()),
            ..TfeConfig::default()
        })
    }

    /// Resolved API root, e.g. `https://app.terraform.io/api/v2/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL under the API root; each segment is percent-escaped.
    ///
    /// `.` and `..` are rejected: the URL path would resolve them to another
    /// resource instead of escaping them.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(ValidationError::DotSegment.into());
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::ConfigError(format!("Address cannot be a base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.send(Method::GET, url, None).await?;
        decode(response).await
    }

    pub(crate) async fn write<A: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        document: &RequestDocument<A>,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_vec(document).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.send(method, url, Some(body)).await?;
        decode(response).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), ApiError> {
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Response, ApiError> {
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, MEDIA_TYPE).body(body);
        }
        let response = request.send().await?;

        debug!(
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            "Received response"
        );
        check_response(response).await
    }
}

fn resolve_base_url(address: &str, base_path: &str) -> Result<Url, ApiError> {
    let address = address.trim();
    let parsed = Url::parse(address)
        .map_err(|e| ApiError::ConfigError(format!("Invalid address {}: {}", address, e)))?;
    if parsed.cannot_be_a_base() {
        return Err(ApiError::ConfigError(format!(
            "Address cannot be a base URL: {}",
            address
        )));
    }

    let mut path = base_path.trim().trim_matches('/').to_string();
    path.insert(0, '/');
    if path.len() > 1 {
        path.push('/');
    }
    parsed
        .join(&path)
        .map_err(|e| ApiError::ConfigError(format!("Invalid base path {}: {}", base_path, e)))
}

/// Map non-2xx responses onto `ApiError`.
async fn check_response(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        _ => {
            let body = response.bytes().await?;
            let message = serde_json::from_slice::<ErrorDocument>(&body)
                .ok()
                .and_then(|doc| doc.message())
                .unwrap_or_else(|| status.to_string());
            warn!(status = status.as_u16(), %message, "Request rejected by service");
            Err(ApiError::Remote {
                status: status.as_u16(),
                message,
            })
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
