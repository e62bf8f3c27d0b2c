//! Custom object record handlers

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{info, warn};
use validator::Validate;

use domain_crm::NewRecord;

use crate::dto::{first_message, RecordForm};
use crate::error::{failure_status, WebError};
use crate::views::{HomepagePage, Page, UpdatesPage};
use crate::AppState;

/// `GET /`: table of the configured custom object
pub async fn homepage(State(state): State<AppState>) -> Response {
    match state.service.list_records().await {
        Ok(records) => HomepagePage::with_records(&records).render().into_response(),
        Err(failure) => (failure_status(&failure), HomepagePage::failed(&failure).render()).into_response(),
    }
}

/// `GET /update-cobj`: empty creation form
pub async fn update_form() -> Html<String> {
    UpdatesPage::default().render()
}

/// `POST /update-cobj`
///
/// Redirects home once the CRM accepted the record. Otherwise the form is
/// rendered again with the submitted values and a banner.
pub async fn create_record(
    State(state): State<AppState>,
    form: Result<Form<RecordForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form.map_err(|rejection| {
        warn!(error = %rejection, "Unreadable record form");
        WebError::BadRequest(rejection.body_text())
    })?;
    let form = form.normalized();

    if let Err(errors) = form.validate() {
        let message = first_message(&errors);
        info!(reason = %message, "Record form rejected");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            UpdatesPage::invalid(message, form).render(),
        )
            .into_response());
    }

    let record = NewRecord::from(form.clone());
    match state.service.create_record(&record).await {
        Ok(()) => Ok(Redirect::to("/").into_response()),
        Err(failure) => Ok((failure_status(&failure), UpdatesPage::failed(&failure, form).render()).into_response()),
    }
}

/// Fallback for every unmatched route
pub async fn not_found() -> WebError {
    WebError::NotFound
}
