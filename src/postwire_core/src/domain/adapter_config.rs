use secrecy::Secret;

/// Settings fixed at adapter construction and shared read-only by every send.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub api_key: Secret<String>,
    pub default_from_address: String,
    pub default_from_name: String,
}

impl AdapterConfig {
    pub fn new(
        api_key: Secret<String>,
        default_from_address: impl Into<String>,
        default_from_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            default_from_address: default_from_address.into(),
            default_from_name: default_from_name.into(),
        }
    }
}
