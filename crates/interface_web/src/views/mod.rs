//! Server-rendered pages
//!
//! Each page is a plain struct implementing [`Page`]; rendering wraps the
//! page body in the shared layout. Every piece of text that comes from the
//! CRM or from a form goes through [`escape`] before it is written out.

mod contacts;
mod homepage;
mod updates;

pub use contacts::ContactsPage;
pub use homepage::HomepagePage;
pub use updates::UpdatesPage;

use axum::response::Html;

/// A page rendered by name inside the shared layout
pub trait Page {
    /// Name the page is keyed by (`homepage`, `updates`, `contacts`)
    const NAME: &'static str;

    /// Document title
    const TITLE: &'static str;

    /// Markup placed inside `<main>`
    fn body(&self) -> String;

    fn render(&self) -> Html<String> {
        Html(layout(Self::NAME, Self::TITLE, &self.body()))
    }
}

/// Escapes text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(name: &str, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body data-page="{name}">
<nav>
<a href="/">Solicitudes</a> |
<a href="/update-cobj">Nueva solicitud</a> |
<a href="/contacts">Contactos</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        name = name,
        body = body,
    )
}

/// Banner shown in place of data when an operation failed
fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<p class="error" role="alert">{}</p>"#, escape(message)),
        None => String::new(),
    }
}

/// Table cell for an optional property
fn cell(value: Option<&str>) -> String {
    format!("<td>{}</td>", escape(value.unwrap_or("")))
}

/// Page served for unknown routes
pub fn not_found_page() -> Html<&'static str> {
    Html(r#"<h1>404 - Page Not Found</h1><a href="/">Return to homepage</a>"#)
}

/// Minimal standalone error page
pub fn error_page(heading: &str, detail: &str) -> Html<String> {
    Html(format!(
        r#"<h1>{}</h1><p>{}</p><a href="/">Return to homepage</a>"#,
        escape(heading),
        escape(detail)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
        assert_eq!(escape("Ingeniería"), "Ingeniería");
    }

    #[test]
    fn test_layout_keys_page_by_name() {
        let html = layout("contacts", "Contactos", "<p>hi</p>");
        assert!(html.contains(r#"<body data-page="contacts">"#));
        assert!(html.contains("<title>Contactos</title>"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_error_banner() {
        assert_eq!(error_banner(None), "");
        assert!(error_banner(Some("HTTP <500>")).contains("HTTP &lt;500&gt;"));
    }

    #[test]
    fn test_error_page_escapes() {
        let Html(html) = error_page("Bad request", "<b>");
        assert!(html.contains("&lt;b&gt;"));
    }
}
