//! Outbound request shapes for the objects API

use serde::Serialize;
use serde_json::Value;

use core_kernel::PAGE_LIMIT;

use crate::error::RemoteError;

/// Properties projected when listing custom object records
pub const RECORD_PROPERTIES: [&str; 3] = ["name", "interest_program", "source_channel"];

/// Properties projected when listing contacts
pub const CONTACT_PROPERTIES: [&str; 4] = ["firstname", "lastname", "email", "phone"];

/// Query parameters of a list call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    properties: &'static [&'static str],
    limit: usize,
}

impl ListQuery {
    /// Projection used for the configured custom object
    pub fn records() -> Self {
        Self {
            properties: &RECORD_PROPERTIES,
            limit: PAGE_LIMIT,
        }
    }

    /// Projection used for contacts
    pub fn contacts() -> Self {
        Self {
            properties: &CONTACT_PROPERTIES,
            limit: PAGE_LIMIT,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Query string pairs, e.g. `properties=name,interest_program&limit=100`
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("properties".to_string(), self.properties.join(",")),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}

/// Fields of a custom object record to create
///
/// Optional fields that are absent, empty or whitespace-only are left out of
/// the request body entirely rather than being sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_channel: Option<String>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        interest_program: Option<String>,
        source_channel: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            interest_program: non_blank(interest_program),
            source_channel: non_blank(source_channel),
        }
    }

    /// Request body for `POST /crm/v3/objects/{objectType}`
    pub fn to_body(&self) -> Result<Value, RemoteError> {
        serde_json::to_value(CreateRecordBody { properties: self })
            .map_err(|e| RemoteError::serialization(format!("failed to encode record: {}", e)))
    }
}

#[derive(Serialize)]
struct CreateRecordBody<'a> {
    properties: &'a NewRecord,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
