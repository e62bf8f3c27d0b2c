//! Property-Based Test Generators
//!
//! proptest strategies for CRM data, including text that must be escaped
//! before it reaches an HTML page.

use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for property text, biased towards HTML metacharacters
pub fn property_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-zÁÉÍÓÚáéíóúñ ]{1,20}",
        "[<>&\"' a-z]{1,20}",
        Just("<script>alert(1)</script>".to_string()),
    ]
}

/// Strategy for optional form fields: missing, empty, blank or filled
pub fn optional_field_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   ".to_string())),
        "[a-z]{1,12}".prop_map(Some),
    ]
}

/// Strategy for a custom object record body with a name
pub fn record_body_strategy() -> impl Strategy<Value = Value> {
    ("[0-9]{1,6}", property_text_strategy())
        .prop_map(|(id, name)| json!({ "id": id, "properties": { "name": name } }))
}

/// Strategy for a list body with up to `max` records
pub fn list_body_strategy(max: usize) -> impl Strategy<Value = Value> {
    prop::collection::vec(record_body_strategy(), 0..=max)
        .prop_map(|results| json!({ "results": results }))
}
