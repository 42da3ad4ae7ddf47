mod email_provider;
mod error;
mod tracing;

pub use email_provider::EmailProvider;
pub use error::ProviderSetupError;
pub use crate::tracing::init_tracing;
