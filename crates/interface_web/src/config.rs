//! Web front-end configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded) and never looked up again.
//!
//! | Variable               | Required | Default                   |
//! |------------------------|----------|---------------------------|
//! | `HUBSPOT_ACCESS_TOKEN` | yes      |                           |
//! | `CUSTOM_OBJECT_TYPE`   | yes      |                           |
//! | `HUBSPOT_BASE_URL`     | no       | `https://api.hubapi.com`  |
//! | `HOST`                 | no       | `0.0.0.0`                 |
//! | `PORT`                 | no       | `3000`                    |
//! | `LOG_LEVEL`            | no       | `info`                    |

use serde::Deserialize;

use core_kernel::ObjectType;
use domain_crm::adapters::{Credentials, DEFAULT_BASE_URL};

use crate::error::StartupError;

/// Environment variable holding the CRM bearer token
pub const TOKEN_VAR: &str = "HUBSPOT_ACCESS_TOKEN";

/// Environment variable holding the custom object type
pub const OBJECT_TYPE_VAR: &str = "CUSTOM_OBJECT_TYPE";

#[derive(Debug, Deserialize)]
struct RawConfig {
    host: String,
    port: u16,
    hubspot_base_url: String,
    log_level: String,
    hubspot_access_token: Option<String>,
    custom_object_type: Option<String>,
}

/// Web front-end configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CRM base URL and bearer token
    pub credentials: Credentials,
    /// Custom object collection served on the homepage
    pub object_type: ObjectType,
    /// Log level
    pub log_level: String,
}

impl WebConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_environment(config::Environment::default())
    }

    /// Loads configuration from an explicit set of variables
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, StartupError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_environment(config::Environment::default().source(Some(vars)))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, StartupError> {
        let raw: RawConfig = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("hubspot_base_url", DEFAULT_BASE_URL)?
            .set_default("log_level", "info")?
            .add_source(environment.ignore_empty(true))
            .build()?
            .try_deserialize()?;

        let token = present(raw.hubspot_access_token);
        let object_type = present(raw.custom_object_type);

        let missing: Vec<&'static str> = [(TOKEN_VAR, token.is_none()), (OBJECT_TYPE_VAR, object_type.is_none())]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();

        let (Some(token), Some(object_type)) = (token, object_type) else {
            return Err(StartupError::MissingVariables(missing));
        };

        Ok(Self {
            host: raw.host,
            port: raw.port,
            credentials: Credentials::new(raw.hubspot_base_url, token)?,
            object_type: ObjectType::new(object_type)?,
            log_level: raw.log_level,
        })
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
