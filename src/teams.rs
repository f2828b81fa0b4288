use crate::{
    channel::{FieldDescriptor, NotificationChannel},
    config::{SERVICE_URL_FIELD, TEAMS_SERVICE},
    error::{ConfigError, Error},
    payload::build_payload,
    problem::Problem,
    uploader, HttpClient, ServiceConfig,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

const FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
    name: SERVICE_URL_FIELD,
    label: "URL",
    placeholder: "Teams Webhook URL (https://XXXXX.webhook.office.com/webhookb2/XXXXXX/IncomingWebhook/XXXXXXX)",
}];

/// Posts problems to a Microsoft Teams incoming webhook as message cards.
pub struct TeamsChannel<C> {
    client: Arc<C>,
}

impl<C> Clone for TeamsChannel<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: Debug> Debug for TeamsChannel<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamsChannel")
            .field("client", &self.client)
            .finish()
    }
}

impl<C: HttpClient + 'static> TeamsChannel<C> {
    /// Create a channel sending requests with the given client.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl<C: HttpClient + 'static> NotificationChannel for TeamsChannel<C> {
    fn label(&self) -> &'static str {
        TEAMS_SERVICE
    }

    fn fields(&self) -> &'static [FieldDescriptor] {
        FIELDS
    }

    fn validate(&self, config: &ServiceConfig) -> Result<(), ConfigError> {
        config.endpoint().map(|_| ())
    }

    async fn send(&self, config: &ServiceConfig, problem: &Problem) -> Result<(), Error> {
        let endpoint = config.endpoint()?;
        let card = build_payload(problem);
        uploader::send(self.client.as_ref(), &endpoint, &card).await
    }
}
