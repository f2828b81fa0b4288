use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Identifier of the Microsoft Teams channel.
pub const TEAMS_SERVICE: &str = "teams";

/// Environment variable read by [`ServiceConfig::teams_from_env`].
pub const TEAMS_WEBHOOK_URL_ENV: &str = "TEAMS_WEBHOOK_URL";

pub(crate) const SERVICE_URL_FIELD: &str = "service_url";

/// Notification service configuration, as entered by an operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Identifier of the channel this configuration is for, e.g. `"teams"`.
    pub service: String,
    /// Webhook URL. For Teams the URL itself carries the access token.
    #[serde(default)]
    pub service_url: Option<String>,
}

impl ServiceConfig {
    /// Create a Teams configuration posting to the given webhook URL.
    pub fn teams(service_url: impl Into<String>) -> Self {
        ServiceConfig {
            service: TEAMS_SERVICE.into(),
            service_url: Some(service_url.into()),
        }
    }

    /// Create a Teams configuration.
    ///
    /// Reads the webhook URL from the `TEAMS_WEBHOOK_URL` environment variable.
    pub fn teams_from_env() -> Result<Self, ConfigError> {
        let service_url =
            std::env::var(TEAMS_WEBHOOK_URL_ENV).map_err(|source| ConfigError::Env {
                name: TEAMS_WEBHOOK_URL_ENV,
                source,
            })?;
        Ok(Self::teams(service_url))
    }

    /// The webhook URL, checked to be a present, absolute `http` or `https` URI.
    pub fn endpoint(&self) -> Result<http::Uri, ConfigError> {
        let url = self
            .service_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingField(SERVICE_URL_FIELD))?;
        parse_endpoint(url)
    }
}

fn parse_endpoint(url: &str) -> Result<http::Uri, ConfigError> {
    let uri = http::Uri::try_from(url).map_err(|err| ConfigError::InvalidUrl(err.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        Some(scheme) => return Err(ConfigError::UnsupportedScheme(scheme.into())),
        None => return Err(ConfigError::InvalidUrl("url must be absolute".into())),
    }
    if uri.host().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl("url has no host".into()));
    }
    Ok(uri)
}
