//! External Adapters for the CRM Domain
//!
//! Adapter implementations of the `RemoteClient` port.
//!
//! # Available Adapters
//!
//! - **HubSpotClient**: HubSpot CRM v3 API over HTTPS
//! - **MockRemoteClient**: In-memory mock for testing (re-exported from the ports module)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_crm::adapters::{Credentials, HubSpotClient};
//! use domain_crm::RemoteClient;
//! use std::sync::Arc;
//!
//! let credentials = Credentials::new("https://api.hubapi.com", token)?;
//! let client: Arc<dyn RemoteClient> = Arc::new(HubSpotClient::new(credentials)?);
//! ```

pub mod hubspot;

pub use hubspot::{Credentials, HubSpotClient, DEFAULT_BASE_URL};
