use async_trait::async_trait;

use crate::{
    domain::{message::OutboundMessage, send_result::SendSuccess},
    error::SendError,
};

/// Port trait for the provider's send endpoint
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(&self, message: &OutboundMessage) -> Result<SendSuccess, SendError>;
}
