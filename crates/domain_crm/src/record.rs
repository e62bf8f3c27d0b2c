//! CRM records as returned by the objects API
//!
//! Records are owned by the remote CRM. This system only reads them or asks
//! the CRM to append new ones, so nothing here mutates a record in place.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use core_kernel::RecordId;

/// A single CRM object (custom object record or contact)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Identifier assigned by the CRM
    pub id: RecordId,

    /// Property name to scalar value. `None` means the CRM returned `null`.
    #[serde(default, deserialize_with = "scalar_properties")]
    pub properties: BTreeMap<String, Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub archived: bool,
}

impl Record {
    /// Creates a record with only an id, mostly useful in tests and fixtures
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            properties: BTreeMap::new(),
            created_at: None,
            updated_at: None,
            archived: false,
        }
    }

    /// Adds a property value
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), Some(value.into()));
        self
    }

    /// Returns a property value, treating `null` and absent the same way
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(|value| value.as_deref())
    }
}

/// Body of a list call: `{ "results": [...], "paging": {...} }`
///
/// Paging cursors are ignored; only the first page is ever requested.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: Option<Vec<Record>>,
}

impl ListResponse {
    /// Results of the page, an absent or `null` field counting as empty
    pub fn into_records(self) -> Vec<Record> {
        self.results.unwrap_or_default()
    }
}

// The CRM sends every property as a string or null, but numbers and booleans
// show up for some calculated properties. Nested values are kept as compact JSON.
fn scalar_properties<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                Value::Bool(b) => Some(b.to_string()),
                Value::Number(n) => Some(n.to_string()),
                other => Some(other.to_string()),
            };
            (name, value)
        })
        .collect())
}

/// Row of the custom object table on the homepage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomRecordView {
    pub id: String,
    pub name: Option<String>,
    pub interest_program: Option<String>,
    pub source_channel: Option<String>,
}

impl From<&Record> for CustomRecordView {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.property("name").map(str::to_string),
            interest_program: record.property("interest_program").map(str::to_string),
            source_channel: record.property("source_channel").map(str::to_string),
        }
    }
}

/// Row of the contacts table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub id: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactView {
    /// First and last name joined, skipping whichever is missing
    pub fn full_name(&self) -> String {
        [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&Record> for ContactView {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            firstname: record.property("firstname").map(str::to_string),
            lastname: record.property("lastname").map(str::to_string),
            email: record.property("email").map(str::to_string),
            phone: record.property("phone").map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_minimal_shape() {
        let record: Record = serde_json::from_value(json!({
            "id": "1",
            "properties": { "name": "Ana" }
        }))
        .unwrap();

        assert_eq!(record, Record::new("1").with_property("name", "Ana"));
    }

    #[test]
    fn test_record_full_shape() {
        let record: Record = serde_json::from_value(json!({
            "id": "512",
            "properties": {
                "name": "Luis",
                "interest_program": null,
                "hs_object_id": 512,
                "hs_is_test": false
            },
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T10:00:00.000Z",
            "archived": false
        }))
        .unwrap();

        assert_eq!(record.property("name"), Some("Luis"));
        assert_eq!(record.property("interest_program"), None);
        assert!(record.properties.contains_key("interest_program"));
        assert_eq!(record.property("hs_object_id"), Some("512"));
        assert_eq!(record.property("hs_is_test"), Some("false"));
        assert!(record.created_at.is_some());
        assert!(!record.archived);
    }

    #[test]
    fn test_record_null_properties() {
        let record: Record = serde_json::from_value(json!({ "id": "7", "properties": null })).unwrap();
        assert!(record.properties.is_empty());
    }

    #[test]
    fn test_list_response_missing_results() {
        let response: ListResponse = serde_json::from_value(json!({ "paging": {} })).unwrap();
        assert!(response.into_records().is_empty());

        let response: ListResponse = serde_json::from_value(json!({ "results": null })).unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_custom_record_view() {
        let record = Record::new("9")
            .with_property("name", "Ana")
            .with_property("source_channel", "whatsapp");
        let view = CustomRecordView::from(&record);

        assert_eq!(view.id, "9");
        assert_eq!(view.name.as_deref(), Some("Ana"));
        assert_eq!(view.interest_program, None);
        assert_eq!(view.source_channel.as_deref(), Some("whatsapp"));
    }

    #[test]
    fn test_contact_full_name() {
        let contact = ContactView::from(&Record::new("3").with_property("lastname", "Pérez"));
        assert_eq!(contact.full_name(), "Pérez");

        let contact = ContactView::from(
            &Record::new("4")
                .with_property("firstname", "María")
                .with_property("lastname", "Pérez"),
        );
        assert_eq!(contact.full_name(), "María Pérez");
    }
}
