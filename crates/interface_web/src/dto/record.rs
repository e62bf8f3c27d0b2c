//! Record form DTOs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use domain_crm::NewRecord;

/// URL-encoded body posted by the updates form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecordForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    pub interest_program: Option<String>,
    pub source_channel: Option<String>,
}

impl RecordForm {
    /// Same form with surrounding whitespace removed from the name
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}

impl From<RecordForm> for NewRecord {
    fn from(form: RecordForm) -> Self {
        NewRecord::new(form.name, form.interest_program, form.source_channel)
    }
}

/// First human-readable message out of a validation failure
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid form submission.".to_string())
}
