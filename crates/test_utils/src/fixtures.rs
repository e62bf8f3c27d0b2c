//! Pre-built Test Fixtures
//!
//! Ready-to-use CRM response bodies. The shapes follow the HubSpot CRM v3
//! objects API so tests read like real traffic.

use serde_json::{json, Value};

/// Object type used throughout the test suite
pub const TEST_OBJECT_TYPE: &str = "solicitudes";

/// Bearer token used throughout the test suite
pub const TEST_TOKEN: &str = "pat-na1-00000000-test";

/// Fixture for CRM response bodies
pub struct CrmFixtures;

impl CrmFixtures {
    /// A single custom object record named Ana
    pub fn ana() -> Value {
        json!({ "id": "1", "properties": { "name": "Ana" } })
    }

    /// A custom object record with every projected property set
    pub fn luis_full() -> Value {
        json!({
            "id": "2",
            "properties": {
                "name": "Luis",
                "interest_program": "Ingeniería de Sistemas",
                "source_channel": "whatsapp",
                "hs_object_id": "2"
            },
            "createdAt": "2024-05-01T12:00:00.000Z",
            "updatedAt": "2024-05-01T12:00:00.000Z",
            "archived": false
        })
    }

    /// A contact with name, email and phone
    pub fn maria_contact() -> Value {
        json!({
            "id": "101",
            "properties": {
                "firstname": "María",
                "lastname": "Pérez",
                "email": "maria@example.com",
                "phone": "+57 300 000 0000"
            }
        })
    }

    /// Body of a list call with the given results
    pub fn list(results: Vec<Value>) -> Value {
        json!({ "results": results })
    }

    /// Body of a successful create call
    pub fn created(id: &str) -> Value {
        json!({ "id": id, "properties": {}, "archived": false })
    }

    /// Body HubSpot returns for a bad or expired token
    pub fn invalid_token() -> Value {
        json!({ "message": "invalid token" })
    }

    /// Body HubSpot returns when the object type does not exist
    pub fn unknown_object_type() -> Value {
        json!({
            "status": "error",
            "message": "Unable to infer object type from: solicitudes",
            "category": "OBJECT_NOT_FOUND"
        })
    }
}
