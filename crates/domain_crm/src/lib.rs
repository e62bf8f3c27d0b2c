//! CRM Record Domain
//!
//! This crate owns everything between an inbound page request and the remote
//! CRM API: the record model, the remote client port and its HubSpot adapter,
//! the error normalizer and the three record operations.
//!
//! # Failure Model
//!
//! Every call to the CRM can fail in two ways:
//!
//! - **Rejected**: the CRM answered with a non-2xx status and a body
//! - **Transport**: the call never completed (DNS, connect, reset, timeout)
//!
//! Both are collapsed by [`normalize`](normalize::normalize) into a single
//! [`Failure`] carrying an HTTP status and a readable message, so nothing
//! above the record operations ever branches on where a failure came from.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use core_kernel::ObjectType;
//! use domain_crm::{Credentials, HubSpotClient, NewRecord, RecordService};
//!
//! let credentials = Credentials::new("https://api.hubapi.com", token)?;
//! let client = Arc::new(HubSpotClient::new(credentials)?);
//! let service = RecordService::new(client, ObjectType::new("solicitudes")?);
//!
//! match service.list_records().await {
//!     Ok(records) => println!("{} records", records.len()),
//!     Err(failure) => eprintln!("HTTP {}: {}", failure.status, failure.message),
//! }
//! ```

pub mod record;
pub mod request;
pub mod error;
pub mod normalize;
pub mod ports;
pub mod adapters;
pub mod services;

pub use record::{Record, ListResponse, CustomRecordView, ContactView};
pub use request::{NewRecord, ListQuery, RECORD_PROPERTIES, CONTACT_PROPERTIES};
pub use error::RemoteError;
pub use normalize::{Failure, OperationResult, normalize};
pub use ports::RemoteClient;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockRemoteClient, RecordedRequest};
pub use adapters::{Credentials, HubSpotClient};
pub use services::RecordService;
