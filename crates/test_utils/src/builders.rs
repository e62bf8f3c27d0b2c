//! Test Data Builders
//!
//! Builders that let tests state only the fields they care about.

use std::sync::Arc;

use serde_json::{json, Value};

use core_kernel::ObjectType;
use domain_crm::{MockRemoteClient, RecordService};

use crate::fixtures::TEST_OBJECT_TYPE;

/// Builder for a list call body
#[derive(Debug, Default)]
pub struct ListPageBuilder {
    results: Vec<Value>,
    include_paging: bool,
}

impl ListPageBuilder {
    /// Creates an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw record
    pub fn with_record(mut self, record: Value) -> Self {
        self.results.push(record);
        self
    }

    /// Adds a record with an id and a `name` property
    pub fn with_named(self, id: &str, name: &str) -> Self {
        self.with_record(json!({ "id": id, "properties": { "name": name } }))
    }

    /// Adds `count` numbered records
    pub fn with_numbered(mut self, count: usize) -> Self {
        let start = self.results.len();
        for i in start..start + count {
            self.results.push(json!({
                "id": i.to_string(),
                "properties": { "name": format!("Record {}", i) }
            }));
        }
        self
    }

    /// Adds a `paging.next` cursor, which must be ignored
    pub fn with_paging(mut self) -> Self {
        self.include_paging = true;
        self
    }

    /// Builds the body
    pub fn build(self) -> Value {
        let mut body = json!({ "results": self.results });
        if self.include_paging {
            body["paging"] = json!({ "next": { "after": "100", "link": "?after=100" } });
        }
        body
    }
}

/// Builds a `RecordService` over a mock client for the test object type
pub fn mock_service(client: &MockRemoteClient) -> RecordService {
    RecordService::new(
        Arc::new(client.clone()),
        ObjectType::new(TEST_OBJECT_TYPE).expect("valid test object type"),
    )
}
