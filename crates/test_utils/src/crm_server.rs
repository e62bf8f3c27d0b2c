//! wiremock stand-in for the remote CRM

use std::sync::Arc;

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use core_kernel::ObjectType;
use domain_crm::{Credentials, HubSpotClient, RecordService};

use crate::fixtures::{TEST_OBJECT_TYPE, TEST_TOKEN};

/// A mock CRM server plus helpers to script the objects API
pub struct CrmStub {
    pub server: MockServer,
}

impl CrmStub {
    /// Starts a fresh server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure the HubSpot client with
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answers authenticated `GET /crm/v3/objects/{object_type}`
    pub async fn list(&self, object_type: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/crm/v3/objects/{}", object_type)))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers authenticated `POST /crm/v3/objects/{object_type}`
    pub async fn create(&self, object_type: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/crm/v3/objects/{}", object_type)))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every POST received so far
    pub async fn posted_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.method.as_str() == "POST")
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// A `RecordService` talking to this server with the test token
    pub fn service(&self) -> RecordService {
        let credentials = Credentials::new(self.uri(), TEST_TOKEN).expect("valid test credentials");
        let client = HubSpotClient::new(credentials).expect("valid test client");
        RecordService::new(
            Arc::new(client),
            ObjectType::new(TEST_OBJECT_TYPE).expect("valid test object type"),
        )
    }
}
