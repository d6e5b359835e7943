pub mod error;

pub use error::{EventBusError, Result};

use std::time::Duration;

use async_trait::async_trait;
use posts_common::Event;
use tracing::debug;

/// Anything that can hand an event to the event bus.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &Event) -> Result<()>;
}

pub struct EventBusClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventBusClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EventBusError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl EventPublisher for EventBusClient {
    /// POST the event envelope to the bus's `/events` ingestion endpoint.
    async fn publish(&self, event: &Event) -> Result<()> {
        let endpoint = format!("{}/events", self.base_url);

        let resp = self.client.post(&endpoint).json(event).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(EventBusError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(event_type = %event.event_type, "Published event");
        Ok(())
    }
}
