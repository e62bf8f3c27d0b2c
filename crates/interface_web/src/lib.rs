//! Web front-end
//!
//! Server-rendered pages over the CRM record operations, using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per route; CRM failures are rendered onto the page
//! - **Views**: HTML pages with escaping for every interpolated value
//! - **DTOs**: the record form and its validation
//! - **Middleware**: request logging
//! - **Config**: environment-driven startup configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_web::create_router;
//!
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod views;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use domain_crm::RecordService;

use crate::handlers::{contacts, health, records};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: RecordService,
}

/// Creates the router with every page, the health probes and the 404 fallback
pub fn create_router(service: RecordService) -> Router {
    let state = AppState { service };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let page_routes = Router::new()
        .route("/", get(records::homepage))
        .route("/update-cobj", get(records::update_form).post(records::create_record))
        .route("/contacts", get(contacts::list_contacts));

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .fallback(records::not_found)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
