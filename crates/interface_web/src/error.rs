//! Web error handling
//!
//! Two families of errors live here:
//!
//! - `StartupError`: configuration problems, fatal before the listener binds
//! - `WebError`: per-request errors that are not CRM failures (unknown route,
//!   unreadable form). CRM failures never become a `WebError`; handlers render
//!   them onto the page the user asked for.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use core_kernel::CoreError;
use domain_crm::Failure;

use crate::views;

/// Errors that stop the process from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Missing required environment variables: {}. Please ensure they are set in your .env file.", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CoreError),

    #[error("Failed to read configuration: {0}")]
    Config(#[from] config::ConfigError),
}

/// Per-request error types
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Page not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::NotFound => (StatusCode::NOT_FOUND, views::not_found_page()).into_response(),
            WebError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, views::error_page("Bad request", msg)).into_response()
            }
        }
    }
}

/// HTTP status a failed page is served with
///
/// Statuses that cannot carry a page body fall back to 500.
pub fn failure_status(failure: &Failure) -> StatusCode {
    match StatusCode::from_u16(failure.status) {
        Ok(status)
            if status.is_informational()
                || status == StatusCode::NO_CONTENT
                || status == StatusCode::RESET_CONTENT
                || status == StatusCode::NOT_MODIFIED =>
        {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Ok(status) => status,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
