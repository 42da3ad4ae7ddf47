use postwire_adapters::{
    config::{EmailClientSetting, EmailSetting, SenderSetting, test},
    email::HttpEmailClient,
};
use postwire_core::{MessageOptions, SendError, SendSuccess};
use postwire_service::EmailProvider;
use secrecy::Secret;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const SENDER_NAME: &str = "Test Sender";

pub struct TestProvider {
    pub provider: EmailProvider<HttpEmailClient>,
    pub email_server: MockServer,
}

impl TestProvider {
    pub async fn spawn() -> Self {
        let email_server = MockServer::start().await;

        let settings = EmailSetting {
            email_client: EmailClientSetting {
                base_url: email_server.uri(),
                api_key: Secret::new(API_KEY.to_string()),
                timeout_in_millis: test::email_client::TIMEOUT.as_millis() as u64,
            },
            sender: SenderSetting {
                address: test::email_client::SENDER.to_string(),
                name: SENDER_NAME.to_string(),
            },
        };

        let provider = EmailProvider::<HttpEmailClient>::from_settings(&settings)
            .expect("Failed to build email provider");

        Self {
            provider,
            email_server,
        }
    }

    pub async fn send(&self, options: serde_json::Value) -> Result<SendSuccess, SendError> {
        let options: MessageOptions =
            serde_json::from_value(options).expect("Invalid message options");
        self.provider.send(&options).await
    }

    /// JSON bodies of every request the provider received.
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.body_json().expect("Request body is not JSON"))
            .collect()
    }
}
