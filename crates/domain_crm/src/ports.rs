//! CRM Domain Ports
//!
//! This module defines the port the record operations use to reach the remote
//! CRM. Two implementations exist:
//!
//! - **HubSpot Adapter**: authenticated HTTP calls via reqwest (`adapters::hubspot`)
//! - **Mock Adapter**: scripted replies and request recording, for tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_crm::ports::RemoteClient;
//! use std::sync::Arc;
//!
//! pub struct RecordService {
//!     client: Arc<dyn RemoteClient>,
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;

use core_kernel::{DomainPort, HealthCheckable};

use crate::error::RemoteError;

/// Authenticated access to the remote CRM API
///
/// Paths are absolute on the CRM host (`/crm/v3/objects/contacts`). Both
/// calls return the parsed response body, or `Value::Null` for an empty one.
#[async_trait]
pub trait RemoteClient: DomainPort + HealthCheckable {
    /// Issues a GET with the given query string pairs
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, RemoteError>;

    /// Issues a POST with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Value, RemoteError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! In-memory remote client for tests

    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// A call received by the mock
    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedRequest {
        Get {
            path: String,
            query: Vec<(String, String)>,
        },
        Post {
            path: String,
            body: Value,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Method {
        Get,
        Post,
    }

    /// Remote client returning scripted replies keyed by method and path
    ///
    /// Unscripted calls are answered with a 404 rejection.
    #[derive(Debug, Clone, Default)]
    pub struct MockRemoteClient {
        replies: Arc<RwLock<HashMap<(Method, String), Result<Value, RemoteError>>>>,
        requests: Arc<RwLock<Vec<RecordedRequest>>>,
    }

    impl MockRemoteClient {
        /// Creates a new mock client
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts the reply to `GET path`
        pub async fn on_get(&self, path: impl Into<String>, reply: Result<Value, RemoteError>) {
            self.replies.write().await.insert((Method::Get, path.into()), reply);
        }

        /// Scripts the reply to `POST path`
        pub async fn on_post(&self, path: impl Into<String>, reply: Result<Value, RemoteError>) {
            self.replies.write().await.insert((Method::Post, path.into()), reply);
        }

        /// Every request received so far, in order
        pub async fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().await.clone()
        }

        async fn reply(&self, method: Method, path: &str) -> Result<Value, RemoteError> {
            self.replies
                .read()
                .await
                .get(&(method, path.to_string()))
                .cloned()
                .unwrap_or_else(|| {
                    Err(RemoteError::rejected(
                        404,
                        json!({ "message": format!("no scripted reply for {:?} {}", method, path) }),
                    ))
                })
        }
    }

    impl DomainPort for MockRemoteClient {}

    #[async_trait]
    impl HealthCheckable for MockRemoteClient {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-remote-client".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl RemoteClient for MockRemoteClient {
        async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, RemoteError> {
            self.requests.write().await.push(RecordedRequest::Get {
                path: path.to_string(),
                query: query.to_vec(),
            });
            self.reply(Method::Get, path).await
        }

        async fn post(&self, path: &str, body: &Value) -> Result<Value, RemoteError> {
            self.requests.write().await.push(RecordedRequest::Post {
                path: path.to_string(),
                body: body.clone(),
            });
            self.reply(Method::Post, path).await
        }
    }
}
