//! Record operations
//!
//! The three use cases behind the pages: list the configured custom object,
//! create a record of it, list contacts. Each one issues exactly one remote
//! call and ends in either success or a normalized `Failure`; no error from
//! the remote client escapes past this point.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use core_kernel::{HealthCheckResult, ObjectType, PAGE_LIMIT};

use crate::normalize::{normalize, Failure, OperationResult};
use crate::ports::RemoteClient;
use crate::record::{ListResponse, Record};
use crate::request::{ListQuery, NewRecord};
use crate::error::RemoteError;

/// Record operations bound to one remote client and one custom object type
#[derive(Clone)]
pub struct RecordService {
    client: Arc<dyn RemoteClient>,
    object_type: ObjectType,
}

impl RecordService {
    pub fn new(client: Arc<dyn RemoteClient>, object_type: ObjectType) -> Self {
        Self {
            client,
            object_type,
        }
    }

    /// The custom object type this service operates on
    pub fn object_type(&self) -> &ObjectType {
        &self.object_type
    }

    /// Lists the first page of the configured custom object
    pub async fn list_records(&self) -> OperationResult<Vec<Record>> {
        self.list(&self.object_type, ListQuery::records())
            .await
            .map_err(|failure| {
                error!(
                    status = failure.status,
                    object_type = %self.object_type,
                    detail = %failure.message,
                    "Error fetching records from CRM"
                );
                failure
            })
    }

    /// Creates a record of the configured custom object
    pub async fn create_record(&self, record: &NewRecord) -> OperationResult<()> {
        let path = self.object_type.collection_path();

        let result = match record.to_body() {
            Ok(body) => self.client.post(&path, &body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(created) => {
                let record_id = created.get("id").and_then(Value::as_str).unwrap_or("unknown");
                info!(
                    object_type = %self.object_type,
                    record_id,
                    "Created CRM record"
                );
                Ok(())
            }
            Err(e) => {
                let failure = normalize(&e);
                error!(
                    status = failure.status,
                    object_type = %self.object_type,
                    detail = %failure.message,
                    "Error creating record in CRM"
                );
                Err(failure)
            }
        }
    }

    /// Lists the first page of contacts
    pub async fn list_contacts(&self) -> OperationResult<Vec<Record>> {
        self.list(&ObjectType::contacts(), ListQuery::contacts())
            .await
            .map_err(|failure| {
                error!(
                    status = failure.status,
                    detail = %failure.message,
                    "Error fetching contacts from CRM"
                );
                failure
            })
    }

    /// Health of the underlying remote client
    pub async fn health(&self) -> HealthCheckResult {
        self.client.health_check().await
    }

    async fn list(&self, object_type: &ObjectType, query: ListQuery) -> Result<Vec<Record>, Failure> {
        let body = self
            .client
            .get(&object_type.collection_path(), &query.to_params())
            .await
            .map_err(Failure::from)?;

        let mut records = decode_list(body).map_err(Failure::from)?;

        if records.len() > PAGE_LIMIT {
            warn!(
                object_type = %object_type,
                received = records.len(),
                limit = PAGE_LIMIT,
                "CRM returned more results than requested, truncating"
            );
            records.truncate(PAGE_LIMIT);
        }

        Ok(records)
    }
}

// An empty body or a body without `results` is an empty page.
fn decode_list(body: Value) -> Result<Vec<Record>, RemoteError> {
    if body.is_null() {
        return Ok(Vec::new());
    }

    serde_json::from_value::<ListResponse>(body)
        .map(ListResponse::into_records)
        .map_err(|e| RemoteError::serialization(format!("unexpected list response from CRM: {}", e)))
}
