//! Core Kernel - Foundational types for the CRM front-end
//!
//! This crate provides the building blocks used by the domain and interface crates:
//! - Identifiers for remote object collections and records
//! - The kernel error type
//! - Port marker traits and adapter health reporting

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{ObjectType, RecordId};
pub use error::CoreError;
pub use ports::{DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};

/// Maximum number of records requested from (and kept for) any list call
pub const PAGE_LIMIT: usize = 100;
