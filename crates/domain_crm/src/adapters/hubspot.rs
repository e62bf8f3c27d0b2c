//! HubSpot CRM Adapter
//!
//! Implements `RemoteClient` over the HubSpot CRM v3 REST API using reqwest.
//!
//! # Behaviour
//!
//! - Every request carries `Authorization: Bearer <token>` and
//!   `Content-Type: application/json`, set once as default headers
//! - No retries and no timeout override; reqwest's defaults apply
//! - 2xx: the body is parsed as JSON (an empty body yields `null`)
//! - non-2xx: `RemoteError::Rejected` with the parsed body, or the raw text
//!   as a JSON string when the body is not JSON
//! - the request never completing: `RemoteError::Transport`

use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::{debug, warn};

use core_kernel::{
    AdapterHealth, CoreError, DomainPort, HealthCheckResult, HealthCheckable, ObjectType,
};

use crate::error::RemoteError;
use crate::ports::RemoteClient;

/// Public HubSpot API host
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

const ADAPTER_ID: &str = "hubspot-crm-adapter";

/// Base URL and bearer token used for every call
///
/// Immutable once built. `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    access_token: String,
}

impl Credentials {
    /// Builds credentials, trimming a trailing `/` from the base URL
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the token is blank or the base
    /// URL is not an http(s) URL.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self, CoreError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let access_token = access_token.into().trim().to_string();

        if access_token.is_empty() {
            return Err(CoreError::configuration("CRM access token must not be empty"));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CoreError::configuration(format!(
                "CRM base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// HubSpot adapter implementing the `RemoteClient` port
///
/// # Example
///
/// ```rust,ignore
/// use domain_crm::adapters::{Credentials, HubSpotClient};
///
/// let client = HubSpotClient::new(Credentials::new(DEFAULT_BASE_URL, token)?)?;
/// let body = client.get("/crm/v3/objects/contacts", &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    credentials: Credentials,
    http: Client,
}

impl HubSpotClient {
    /// Creates a new adapter
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the token cannot be used as a
    /// header value or the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, CoreError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", credentials.access_token()))
            .map_err(|_| CoreError::configuration("CRM access token contains invalid header characters"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CoreError::configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { credentials, http })
    }

    /// Returns the base URL of the CRM API
    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.credentials.base_url(), path.trim_start_matches('/'))
    }

    async fn send(&self, method: Method, path: &str, request: reqwest::RequestBuilder) -> Result<Value, RemoteError> {
        debug!(%method, path, "sending CRM request");

        let response = request.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "CRM request did not complete");
            RemoteError::from(e)
        })?;

        debug!(%method, path, status = response.status().as_u16(), "received CRM response");
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<Value, RemoteError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(&bytes).map_err(|e| {
            RemoteError::serialization(format!("CRM returned a response that is not valid JSON: {}", e))
        });
    }

    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    Err(RemoteError::rejected(status.as_u16(), body))
}

impl DomainPort for HubSpotClient {}

#[async_trait]
impl RemoteClient for HubSpotClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, RemoteError> {
        let request = self.http.get(self.url(path)).query(query);
        self.send(Method::GET, path, request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, RemoteError> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(Method::POST, path, request).await
    }
}

#[async_trait]
impl HealthCheckable for HubSpotClient {
    /// Probes the contacts collection with a single-record page
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let query = [("limit".to_string(), "1".to_string())];
        let result = self.get(&ObjectType::contacts().collection_path(), &query).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(RemoteError::Rejected { status, .. }) => (
                AdapterHealth::Degraded,
                Some(format!("CRM rejected the health probe with status {}", status)),
            ),
            Err(RemoteError::Serialization { message }) => (AdapterHealth::Degraded, Some(message)),
            Err(RemoteError::Transport { message }) => (AdapterHealth::Unhealthy, Some(message)),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}
