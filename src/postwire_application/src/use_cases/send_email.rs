use std::sync::Arc;

use postwire_core::{
    AdapterConfig, EmailClient, MessageBuilder, MessageOptions, OutboundMessage, SendError,
    SendSuccess,
};

/// Send email use case - turns host options into one provider call
pub struct SendEmailUseCase<E>
where
    E: EmailClient,
{
    config: Arc<AdapterConfig>,
    email_client: E,
}

impl<E> SendEmailUseCase<E>
where
    E: EmailClient,
{
    pub fn new(config: Arc<AdapterConfig>, email_client: E) -> Self {
        Self {
            config,
            email_client,
        }
    }

    /// Execute the send email use case
    ///
    /// # Arguments
    /// * `options` - Sender, recipients, content and attachments supplied by the host
    ///
    /// # Returns
    /// The provider's per-recipient counts, or a SendError if the options are
    /// invalid or the provider call fails
    #[tracing::instrument(name = "SendEmailUseCase::execute", skip_all)]
    pub async fn execute(&self, options: &MessageOptions) -> Result<SendSuccess, SendError> {
        let message = self.build_message(options)?;

        tracing::debug!(
            recipients = message.recipients.len(),
            attachments = message.attachments.as_ref().map_or(0, Vec::len),
            "Message built"
        );

        self.email_client.send_email(&message).await
    }

    /// Run the builder steps in their fixed order
    pub fn build_message(&self, options: &MessageOptions) -> Result<OutboundMessage, SendError> {
        let config = self.config.as_ref();

        MessageBuilder::new(config)
            .with_from(
                options.from.as_ref(),
                &config.default_from_address,
                &config.default_from_name,
            )
            .with_recipients(options.to.as_ref())
            .with_reply_to(options.reply_to.as_ref())
            .with_content(options)
            .with_headers(options.headers.as_ref())
            .with_attachments(options.attachments.as_deref())?
            .build()
    }
}
