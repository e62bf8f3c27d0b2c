//! Homepage: table of custom object records

use domain_crm::{CustomRecordView, Failure, Record};

use super::{cell, error_banner, Page};

#[derive(Debug, Clone, Default)]
pub struct HomepagePage {
    pub records: Vec<CustomRecordView>,
    pub error: Option<String>,
}

impl HomepagePage {
    pub fn with_records(records: &[Record]) -> Self {
        Self {
            records: records.iter().map(CustomRecordView::from).collect(),
            error: None,
        }
    }

    /// Empty table with a short diagnostic; the full failure is only logged
    pub fn failed(failure: &Failure) -> Self {
        Self {
            records: Vec::new(),
            error: Some(format!(
                "Failed to load records (HTTP {}). Check your token and object type in .env",
                failure.status
            )),
        }
    }
}

impl Page for HomepagePage {
    const NAME: &'static str = "homepage";
    const TITLE: &'static str = "Solicitudes Bot Admisiones | Integrating With HubSpot I Practicum";

    fn body(&self) -> String {
        let mut html = String::from("<h1>Solicitudes Bot Admisiones</h1>\n");
        html.push_str(&error_banner(self.error.as_deref()));
        html.push_str(r#"<p><a href="/update-cobj">Add a new record</a></p>"#);

        if self.records.is_empty() {
            if self.error.is_none() {
                html.push_str(r#"<p class="empty">No records found.</p>"#);
            }
            return html;
        }

        html.push_str(
            "<table>\n<thead><tr><th>Name</th><th>Interest Program</th><th>Source Channel</th></tr></thead>\n<tbody>\n",
        );
        for record in &self.records {
            html.push_str("<tr>");
            html.push_str(&cell(record.name.as_deref()));
            html.push_str(&cell(record.interest_program.as_deref()));
            html.push_str(&cell(record.source_channel.as_deref()));
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>");
        html
    }
}
