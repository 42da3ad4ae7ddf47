use postwire_core::{EmailClient, OutboundMessage, ProviderReply, SendError, SendSuccess};
use reqwest::{Client, StatusCode, Url, header::ACCEPT};
use secrecy::{ExposeSecret, Secret};

/// Provider REST client. One POST per message, no retries.
#[derive(Clone)]
pub struct HttpEmailClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl HttpEmailClient {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    /// Resolve the send endpoint below the base URL, keeping any path prefix
    /// such as `/v1`.
    fn endpoint(&self) -> Result<Url, SendError> {
        let mut base = Url::parse(&self.base_url).map_err(SendError::transport)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(SEND_EMAIL_PATH).map_err(SendError::transport)
    }
}

#[async_trait::async_trait]
impl EmailClient for HttpEmailClient {
    #[tracing::instrument(name = "Sending email", skip_all, fields(recipients = message.recipients.len()))]
    async fn send_email(&self, message: &OutboundMessage) -> Result<SendSuccess, SendError> {
        let url = self.endpoint()?;

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(message)
            .send()
            .await
            .map_err(SendError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SendError::transport)?;

        let result = normalize_response(status, &body);
        match &result {
            Ok(success) => tracing::debug!(
                success_count = success.success_count,
                fail_count = success.fail_count,
                "Provider accepted message"
            ),
            Err(e) => tracing::warn!(status = e.status_code(), error = %e, "Provider rejected message"),
        }
        result
    }
}

/// Map status and body to a result. The status is checked before the body.
fn normalize_response(status: StatusCode, body: &str) -> Result<SendSuccess, SendError> {
    if !status.is_success() {
        let message = ProviderReply::error_message(body)
            .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()));
        return Err(SendError::provider(Some(status.as_u16()), message));
    }

    match ProviderReply::parse(body)? {
        ProviderReply::Success(success) => Ok(success),
        // A 2xx carrying the error shape has no failing status to report, so
        // it falls back to the generic 500.
        ProviderReply::Error { status: message } => Err(SendError::provider(
            None,
            message.unwrap_or_else(|| {
                format!("Unexpected response with status {}", status.as_u16())
            }),
        )),
    }
}

const SEND_EMAIL_PATH: &str = "email/send";
const JSON_CONTENT_TYPE: &str = "application/json";
const API_KEY_HEADER: &str = "X-Api-Key";
