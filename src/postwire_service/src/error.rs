use thiserror::Error;

/// Failure to assemble an [`EmailProvider`](crate::EmailProvider) from settings.
#[derive(Debug, Error)]
pub enum ProviderSetupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
