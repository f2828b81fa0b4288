use std::error::Error as StdError;

/// Error returned by an [`HttpClient`](crate::HttpClient) when a request could not be completed.
pub type HttpError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that occurred while notifying a channel about a problem.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The service configuration is not usable. No request was sent.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The message card failed to serialize to JSON. No request was sent.
    ///
    /// Note: This is an error in this crate. If you spot this, please open an issue.
    #[error("serializing notification payload failed with {0}")]
    SerializePayload(serde_json::Error),

    /// Could not complete the HTTP request to the webhook. The notification was most likely not
    /// delivered. The transport error is available as the source.
    #[error("sending notification failed with {0}")]
    Delivery(#[source] HttpError),
}

/// Reasons a [`ServiceConfig`](crate::ServiceConfig) is rejected.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required field is absent or blank.
    #[error("You must specify the URL (missing field `{0}`)")]
    MissingField(&'static str),

    /// The webhook URL is not an absolute URI.
    #[error("invalid webhook url: {0}")]
    InvalidUrl(String),

    /// The webhook URL does not use `http` or `https`.
    #[error("unsupported webhook url scheme {0:?}; only http and https are supported")]
    UnsupportedScheme(String),

    /// No channel is registered under the configured service identifier.
    #[error("unknown notification service {0:?}")]
    UnknownService(String),

    /// Reading the configuration from the environment failed.
    #[error("reading {name} failed with {source}")]
    Env {
        /// Name of the environment variable.
        name: &'static str,
        /// Underlying error.
        source: std::env::VarError,
    },
}
