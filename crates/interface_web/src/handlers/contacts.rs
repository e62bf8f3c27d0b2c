//! Contacts handler

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::failure_status;
use crate::views::{ContactsPage, Page};
use crate::AppState;

/// `GET /contacts`: first page of CRM contacts
pub async fn list_contacts(State(state): State<AppState>) -> Response {
    match state.service.list_contacts().await {
        Ok(contacts) => ContactsPage::with_contacts(&contacts).render().into_response(),
        Err(failure) => (failure_status(&failure), ContactsPage::failed(&failure).render()).into_response(),
    }
}
