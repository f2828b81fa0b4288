//! Microsoft Teams notifications for [Errbit] problems.
//!
//! [Errbit]: https://github.com/errbit/errbit
//!
//! Whenever a problem is recorded, a notification channel turns it into a message and delivers
//! it to the destination an operator configured. This crate ships the Teams channel, which posts
//! a [legacy actionable message card] to an [incoming webhook].
//!
//! [legacy actionable message card]: https://learn.microsoft.com/en-us/outlook/actionable-messages/message-card-reference
//! [incoming webhook]: https://learn.microsoft.com/en-us/microsoftteams/platform/webhooks-and-connectors/how-to/add-incoming-webhook
//!
//! # Usage
//!
//! Register the channel with an HTTP client and send problems with the operator's
//! configuration:
//!
//! ```no_run
//! use errbit_notifications::{ChannelRegistry, Error, HttpClient, Problem, ServiceConfig, TeamsChannel};
//!
//! async fn notify<C: HttpClient + 'static>(client: C, problem: &Problem) -> Result<(), Error> {
//!     let registry = ChannelRegistry::new().with_channel(TeamsChannel::new(client));
//!     let config = ServiceConfig::teams_from_env()?;
//!     registry.validate(&config)?;
//!     registry.send(&config, problem).await
//! }
//! ```
//!
//! Enable one of the `reqwest-client`, `reqwest-client-rustls`, `reqwest-blocking-client` or
//! `reqwest-blocking-client-rustls` features to use `reqwest` as the client, or implement
//! [`HttpClient`] for your own.
//!
//! # Message card
//!
//! | Card field           | Value                                                      |
//! | -------------------- | ---------------------------------------------------------- |
//! | `title`, `summary`   | `[<app name>] <error class>`, or the message without class |
//! | `themeColor`         | `0078D7`                                                   |
//! | `activityTitle`      | problem message                                            |
//! | `facts`              | see [`build_payload`]                                      |
//! | `potentialAction`    | `OpenUri` button "View in Errbit" linking to the problem   |
//!
//! # Delivery
//!
//! Every notification is one `POST` with a JSON body. Nothing is retried, and the response
//! status is not inspected: only transport failures are reported as [`Error::Delivery`].
#![doc(html_root_url = "https://docs.rs/errbit-notifications/0.1.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod channel;
mod config;
mod convert;
mod error;
mod http_client;
mod models;
mod payload;
mod problem;
mod teams;
mod uploader;

pub use channel::{ChannelRegistry, FieldDescriptor, NotificationChannel};
pub use config::{ServiceConfig, TEAMS_SERVICE, TEAMS_WEBHOOK_URL_ENV};
pub use error::{ConfigError, Error, HttpError};
pub use http_client::HttpClient;
pub use models::{Fact, LimitedLenString, MessageCard, PotentialAction, Section, Target};
pub use payload::{build_payload, build_payload_in};
pub use problem::{Backtrace, BacktraceLine, Notice, Problem};
pub use teams::TeamsChannel;
