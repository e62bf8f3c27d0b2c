//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! CRM front-end test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built CRM response bodies and form values
//! - `builders`: Builder patterns for list pages and services
//! - `crm_server`: wiremock stand-in for the remote CRM
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod crm_server;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use crm_server::*;
pub use generators::*;
