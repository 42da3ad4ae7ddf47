use serde::{Deserialize, Serialize};

/// Per-recipient outcome reported by the provider for an accepted request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendSuccess {
    pub success_count: u64,
    #[serde(default)]
    pub fail_count: u64,
    #[serde(default)]
    pub failed_recipients: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Provider reply body, told apart by the presence of `success_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReply {
    Success(SendSuccess),
    Error { status: Option<String> },
}

#[derive(Deserialize)]
struct RawReply {
    success_count: Option<u64>,
    #[serde(default)]
    fail_count: u64,
    #[serde(default)]
    failed_recipients: Vec<String>,
    #[serde(default)]
    errors: Vec<String>,
    status: Option<String>,
    message: Option<String>,
}

impl From<RawReply> for ProviderReply {
    fn from(raw: RawReply) -> Self {
        match raw.success_count {
            Some(success_count) => ProviderReply::Success(SendSuccess {
                success_count,
                fail_count: raw.fail_count,
                failed_recipients: raw.failed_recipients,
                errors: raw.errors,
            }),
            None => ProviderReply::Error {
                status: raw.status.or(raw.message),
            },
        }
    }
}

impl ProviderReply {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawReply>(body).map(Into::into)
    }

    /// The `status` (or `message`) field of an error-shaped body, if any.
    pub fn error_message(body: &str) -> Option<String> {
        match Self::parse(body).ok()? {
            ProviderReply::Error { status } => status,
            ProviderReply::Success(_) => None,
        }
    }
}
