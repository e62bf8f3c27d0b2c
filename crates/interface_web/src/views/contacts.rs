//! Contacts table

use domain_crm::{ContactView, Failure, Record};

use super::{cell, error_banner, Page};

#[derive(Debug, Clone, Default)]
pub struct ContactsPage {
    pub contacts: Vec<ContactView>,
    pub error: Option<String>,
}

impl ContactsPage {
    pub fn with_contacts(records: &[Record]) -> Self {
        Self {
            contacts: records.iter().map(ContactView::from).collect(),
            error: None,
        }
    }

    pub fn failed(failure: &Failure) -> Self {
        Self {
            contacts: Vec::new(),
            error: Some(format!("Failed to load contacts (HTTP {}).", failure.status)),
        }
    }
}

impl Page for ContactsPage {
    const NAME: &'static str = "contacts";
    const TITLE: &'static str = "Contactos HubSpot | Integrating With HubSpot I Practicum";

    fn body(&self) -> String {
        let mut html = String::from("<h1>Contactos HubSpot</h1>\n");
        html.push_str(&error_banner(self.error.as_deref()));

        if self.contacts.is_empty() {
            if self.error.is_none() {
                html.push_str(r#"<p class="empty">No contacts found.</p>"#);
            }
            return html;
        }

        html.push_str("<table>\n<thead><tr><th>Name</th><th>Email</th><th>Phone</th></tr></thead>\n<tbody>\n");
        for contact in &self.contacts {
            let name = contact.full_name();
            html.push_str("<tr>");
            html.push_str(&cell(Some(name.as_str())));
            html.push_str(&cell(contact.email.as_deref()));
            html.push_str(&cell(contact.phone.as_deref()));
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_contacts() {
        let records = vec![Record::new("101")
            .with_property("firstname", "María")
            .with_property("lastname", "Pérez")
            .with_property("email", "maria@example.com")];
        let body = ContactsPage::with_contacts(&records).body();

        assert!(body.contains("<td>María Pérez</td><td>maria@example.com</td><td></td>"));
    }

    #[test]
    fn test_failed() {
        let page = ContactsPage::failed(&Failure::local("connection refused"));
        assert!(page.contacts.is_empty());
        assert!(page.body().contains("Failed to load contacts (HTTP 500)."));
    }
}
