//! Site Configuration
//!
//! The page has no runtime configuration. A couple of values can be baked in
//! at build time through environment variables.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const ENDPOINT_VAR: Option<&str> = option_env!("CARECONNECT_SIGNUP_ENDPOINT");
const YEAR_VAR: Option<&str> = option_env!("CARECONNECT_COPYRIGHT_YEAR");

/// Values shared by the shell components and the sink selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Product name shown in the nav bar and footer
    pub brand: String,

    /// Year in the footer copyright line
    pub copyright_year: u16,

    /// Where accepted emails are posted; `None` logs to the console instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "CareConnect".into(),
            copyright_year: 2024,
            signup_endpoint: None,
        }
    }
}

impl SiteConfig {
    /// Build from `CARECONNECT_*` variables captured at compile time.
    ///
    /// Unparseable or invalid values fall back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_vars(ENDPOINT_VAR, YEAR_VAR)
    }

    fn from_vars(endpoint: Option<&str>, year: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(year) = year {
            match year.trim().parse() {
                Ok(year) => config.copyright_year = year,
                Err(_) => tracing::warn!(year, "ignoring invalid CARECONNECT_COPYRIGHT_YEAR"),
            }
        }

        config.signup_endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_owned);

        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "falling back to console signup sink");
            config.signup_endpoint = None;
        }

        config
    }

    /// Footer copyright line
    pub fn copyright(&self) -> String {
        format!("\u{a9} {} {}. All rights reserved.", self.copyright_year, self.brand)
    }

    /// Endpoints must be absolute http(s) URLs or root-relative paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.signup_endpoint.as_deref() {
            None => Ok(()),
            Some(e) if e.starts_with("https://") || e.starts_with("http://") => Ok(()),
            Some(e) if e.starts_with('/') && !e.starts_with("//") => Ok(()),
            Some(e) => Err(ConfigError::InvalidEndpoint(e.to_owned())),
        }
    }
}
