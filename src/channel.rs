use crate::{
    error::{ConfigError, Error},
    problem::Problem,
    ServiceConfig,
};
use async_trait::async_trait;
use std::{collections::BTreeMap, fmt::Debug, sync::Arc};

/// Describes a configuration field to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name of the [`ServiceConfig`] field.
    pub name: &'static str,
    /// Short label shown next to the input.
    pub label: &'static str,
    /// Placeholder shown in the empty input.
    pub placeholder: &'static str,
}

/// A destination problems can be reported to.
#[async_trait]
pub trait NotificationChannel: Debug + Send + Sync {
    /// Identifier the channel is registered under, e.g. `"teams"`.
    fn label(&self) -> &'static str;

    /// Configuration fields the channel reads.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Check that the configuration can be used to send notifications.
    fn validate(&self, config: &ServiceConfig) -> Result<(), ConfigError>;

    /// Notify about a problem. Validates the configuration first and sends nothing if it is
    /// invalid.
    async fn send(&self, config: &ServiceConfig, problem: &Problem) -> Result<(), Error>;
}

/// Channels keyed by their label.
#[derive(Debug, Default, Clone)]
pub struct ChannelRegistry {
    channels: BTreeMap<&'static str, Arc<dyn NotificationChannel>>,
}

impl ChannelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel under its label, replacing any channel with the same label.
    pub fn with_channel(mut self, channel: impl NotificationChannel + 'static) -> Self {
        self.channels.insert(channel.label(), Arc::new(channel));
        self
    }

    /// Look up the channel a configuration is for.
    pub fn get(&self, service: &str) -> Option<&Arc<dyn NotificationChannel>> {
        self.channels.get(service)
    }

    /// Labels of all registered channels.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.channels.keys().copied()
    }

    fn channel_for(
        &self,
        config: &ServiceConfig,
    ) -> Result<&Arc<dyn NotificationChannel>, ConfigError> {
        self.get(&config.service)
            .ok_or_else(|| ConfigError::UnknownService(config.service.clone()))
    }

    /// Validate a configuration with the channel it is for.
    pub fn validate(&self, config: &ServiceConfig) -> Result<(), ConfigError> {
        self.channel_for(config)?.validate(config)
    }

    /// Notify about a problem through the channel the configuration is for.
    pub async fn send(&self, config: &ServiceConfig, problem: &Problem) -> Result<(), Error> {
        self.channel_for(config)?.send(config, problem).await
    }
}
