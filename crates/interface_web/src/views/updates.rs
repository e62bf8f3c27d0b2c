//! Form for creating a custom object record

use domain_crm::Failure;

use crate::dto::RecordForm;

use super::{error_banner, escape, Page};

#[derive(Debug, Clone, Default)]
pub struct UpdatesPage {
    pub error: Option<String>,
    /// Values to prefill, e.g. after a failed submission
    pub form: RecordForm,
}

impl UpdatesPage {
    /// Re-renders the submitted values after the CRM refused them
    pub fn failed(failure: &Failure, form: RecordForm) -> Self {
        Self {
            error: Some(format!(
                "Failed to create record (HTTP {}). Please try again.",
                failure.status
            )),
            form,
        }
    }

    /// Re-renders the submitted values after local validation failed
    pub fn invalid(message: impl Into<String>, form: RecordForm) -> Self {
        Self {
            error: Some(message.into()),
            form,
        }
    }
}

impl Page for UpdatesPage {
    const NAME: &'static str = "updates";
    const TITLE: &'static str = "Update Custom Object Form | Integrating With HubSpot I Practicum";

    fn body(&self) -> String {
        format!(
            r#"<h1>Update Custom Object Form</h1>
{banner}
<form method="post" action="/update-cobj">
<label for="name">Name</label>
<input id="name" name="name" type="text" required value="{name}">
<label for="interest_program">Interest Program</label>
<input id="interest_program" name="interest_program" type="text" value="{interest_program}">
<label for="source_channel">Source Channel</label>
<input id="source_channel" name="source_channel" type="text" value="{source_channel}">
<button type="submit">Submit</button>
</form>
<p><a href="/">Return to the homepage</a></p>"#,
            banner = error_banner(self.error.as_deref()),
            name = escape(&self.form.name),
            interest_program = escape(self.form.interest_program.as_deref().unwrap_or("")),
            source_channel = escape(self.form.source_channel.as_deref().unwrap_or("")),
        )
    }
}
