use std::sync::Arc;

use postwire_core::{EmailClient, OutboundMessage, SendError, SendSuccess};
use tokio::sync::RwLock;

/// In-memory client that records messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<OutboundMessage>>>,
    failure: Option<SendError>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that rejects every message with `error`.
    pub fn failing(error: SendError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub async fn sent_messages(&self) -> Vec<OutboundMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, message: &OutboundMessage) -> Result<SendSuccess, SendError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.sent.write().await.push(message.clone());

        Ok(SendSuccess {
            success_count: message.recipients.len() as u64,
            ..SendSuccess::default()
        })
    }
}
