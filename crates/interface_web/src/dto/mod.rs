//! Form and response payloads

pub mod record;

pub use record::{first_message, RecordForm};
