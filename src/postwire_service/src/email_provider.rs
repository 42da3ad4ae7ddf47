use std::sync::Arc;

use postwire_adapters::{config::EmailSetting, email::HttpEmailClient};
use postwire_application::SendEmailUseCase;
use postwire_core::{AdapterConfig, EmailClient, MessageOptions, SendError, SendSuccess};
use reqwest::Client;

use crate::error::ProviderSetupError;

/// Host-facing email provider: one `send` entry point backed by an [`EmailClient`].
///
/// The provider is safe to share between concurrent sends. Each call builds
/// its own message; only the configuration is shared.
pub struct EmailProvider<E = HttpEmailClient>
where
    E: EmailClient,
{
    send_email: SendEmailUseCase<E>,
}

impl<E> EmailProvider<E>
where
    E: EmailClient,
{
    /// Create a provider with an explicit client
    ///
    /// # Arguments
    /// * `config` - API key and default sender
    /// * `email_client` - Client used for the outbound call (a mock in tests)
    pub fn new(config: AdapterConfig, email_client: E) -> Self {
        Self {
            send_email: SendEmailUseCase::new(Arc::new(config), email_client),
        }
    }

    /// Send one email
    ///
    /// # Returns
    /// The provider's per-recipient counts, or the SendError raised while
    /// building or sending the message
    pub async fn send(&self, options: &MessageOptions) -> Result<SendSuccess, SendError> {
        let result = self.send_email.execute(options).await;

        match &result {
            Ok(success) => tracing::info!(
                success_count = success.success_count,
                fail_count = success.fail_count,
                "Email sent"
            ),
            Err(e) => tracing::error!(status = e.status_code(), error = %e, "Email not sent"),
        }

        result
    }
}

impl EmailProvider<HttpEmailClient> {
    /// Assemble a provider backed by the HTTP client from loaded settings
    pub fn from_settings(settings: &EmailSetting) -> Result<Self, ProviderSetupError> {
        let http_client = Client::builder()
            .timeout(settings.email_client.timeout())
            .build()?;

        let email_client = HttpEmailClient::new(
            settings.email_client.base_url.clone(),
            settings.email_client.api_key.clone(),
            http_client,
        );

        Ok(Self::new(settings.adapter_config(), email_client))
    }

    /// Load settings from the environment and assemble a provider
    pub fn from_env() -> Result<Self, ProviderSetupError> {
        let settings = EmailSetting::load()?;
        Self::from_settings(&settings)
    }
}
