//! End-to-end tests for the HubSpot adapter and record operations
//!
//! A wiremock server stands in for the CRM so the real reqwest client, headers
//! and body handling are exercised.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use core_kernel::{AdapterHealth, HealthCheckable, ObjectType};
use domain_crm::{
    Credentials, Failure, HubSpotClient, NewRecord, Record, RecordService, RemoteClient, RemoteError,
};

const TOKEN: &str = "pat-na1-test-token";

fn client_for(server: &MockServer) -> HubSpotClient {
    HubSpotClient::new(Credentials::new(server.uri(), TOKEN).unwrap()).unwrap()
}

fn service_for(server: &MockServer) -> RecordService {
    RecordService::new(
        Arc::new(client_for(server)),
        ObjectType::new("solicitudes").unwrap(),
    )
}

mod remote_client {
    use super::*;

    #[tokio::test]
    async fn test_get_attaches_auth_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crm/v3/objects/contacts"))
            .and(header("authorization", "Bearer pat-na1-test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server).get("/crm/v3/objects/contacts", &[]).await.unwrap();
        assert_eq!(body, json!({ "results": [] }));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/crm/v3/objects/solicitudes"))
            .and(header("authorization", "Bearer pat-na1-test-token"))
            .and(body_json(json!({ "properties": { "name": "Ana" } })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10" })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .post("/crm/v3/objects/solicitudes", &json!({ "properties": { "name": "Ana" } }))
            .await
            .unwrap();
        assert_eq!(body["id"], "10");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let body = client_for(&server).post("/anything", &json!({})).await.unwrap();
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_non_json_success_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let error = client_for(&server).get("/crm/v3/objects/contacts", &[]).await.unwrap_err();
        assert!(matches!(error, RemoteError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid token" })))
            .mount(&server)
            .await;

        let error = client_for(&server).get("/crm/v3/objects/contacts", &[]).await.unwrap_err();
        assert_eq!(error, RemoteError::rejected(401, json!({ "message": "invalid token" })));
    }

    #[tokio::test]
    async fn test_rejection_with_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let error = client_for(&server).get("/crm/v3/objects/contacts", &[]).await.unwrap_err();
        assert_eq!(error, RemoteError::rejected(502, json!("Bad Gateway")));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 1
        let client = HubSpotClient::new(Credentials::new("http://127.0.0.1:1", TOKEN).unwrap()).unwrap();

        let error = client.get("/crm/v3/objects/contacts", &[]).await.unwrap_err();
        assert!(matches!(error, RemoteError::Transport { .. }));
    }
}

mod record_operations {
    use super::*;

    #[tokio::test]
    async fn test_list_records_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crm/v3/objects/solicitudes"))
            .and(query_param("properties", "name,interest_program,source_channel"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "id": "1", "properties": { "name": "Ana" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = service_for(&server).list_records().await.unwrap();
        assert_eq!(records, vec![Record::new("1").with_property("name", "Ana")]);
    }

    #[tokio::test]
    async fn test_create_record_omits_empty_optionals() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/crm/v3/objects/solicitudes"))
            .and(body_json(json!({ "properties": { "name": "Luis" } })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "2" })))
            .expect(1)
            .mount(&server)
            .await;

        let record = NewRecord::new("Luis", Some(String::new()), None);
        service_for(&server).create_record(&record).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_contacts_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crm/v3/objects/contacts"))
            .and(query_param("properties", "firstname,lastname,email,phone"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "id": "11", "properties": { "firstname": "María", "lastname": "Pérez" } },
                    { "id": "12", "properties": { "email": "luis@example.com", "phone": null } }
                ],
                "paging": { "next": { "after": "13" } }
            })))
            .mount(&server)
            .await;

        let contacts = service_for(&server).list_contacts().await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].property("phone"), None);
    }

    #[tokio::test]
    async fn test_invalid_token_is_normalized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid token" })))
            .mount(&server)
            .await;

        let failure = service_for(&server).list_records().await.unwrap_err();
        assert_eq!(failure, Failure::new(401, "{\n  \"message\": \"invalid token\"\n}"));
    }

    #[tokio::test]
    async fn test_unreachable_crm_is_500() {
        let client = HubSpotClient::new(Credentials::new("http://127.0.0.1:1", TOKEN).unwrap()).unwrap();
        let service = RecordService::new(Arc::new(client), ObjectType::new("solicitudes").unwrap());

        let failure = service.list_contacts().await.unwrap_err();
        assert_eq!(failure.status, 500);
        assert!(!failure.message.is_empty());
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_healthy_when_probe_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crm/v3/objects/contacts"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        let result = client_for(&server).health_check().await;
        assert_eq!(result.status, AdapterHealth::Healthy);
        assert_eq!(result.adapter_id, "hubspot-crm-adapter");
    }

    #[tokio::test]
    async fn test_degraded_when_probe_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid token" })))
            .mount(&server)
            .await;

        let result = client_for(&server).health_check().await;
        assert_eq!(result.status, AdapterHealth::Degraded);
        assert!(result.message.unwrap().contains("401"));
    }

    #[tokio::test]
    async fn test_unhealthy_when_unreachable() {
        let client = HubSpotClient::new(Credentials::new("http://127.0.0.1:1", TOKEN).unwrap()).unwrap();
        let result = client.health_check().await;
        assert_eq!(result.status, AdapterHealth::Unhealthy);
    }
}
