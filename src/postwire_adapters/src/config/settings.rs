use std::time::Duration;

use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use postwire_core::AdapterConfig;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_CONFIG_FILE, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSetting {
    pub email_client: EmailClientSetting,
    pub sender: SenderSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSetting {
    pub base_url: String,
    pub api_key: Secret<String>,
    pub timeout_in_millis: u64,
}

impl EmailClientSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

/// Default sender used when a send request names none.
#[derive(Debug, Clone, Deserialize)]
pub struct SenderSetting {
    pub address: String,
    pub name: String,
}

impl EmailSetting {
    /// Load settings from `.env`, the optional `postwire.json` file and the
    /// environment.
    ///
    /// Nested keys can be set as `POSTWIRE__EMAIL_CLIENT__BASE_URL`. The flat
    /// variables in [`env`] take precedence over everything else.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_file = std::env::var(env::CONFIG_FILE_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Self::defaults()?
            .add_source(File::with_name(&config_file).required(false))
            .add_source(Environment::with_prefix(env::ENV_PREFIX).separator(env::ENV_SEPARATOR))
            .set_override_option("email_client.base_url", read_env(env::BASE_URL_ENV_VAR))?
            .set_override_option("email_client.api_key", read_env(env::API_KEY_ENV_VAR))?
            .set_override_option("sender.address", read_env(env::FROM_ADDRESS_ENV_VAR))?
            .set_override_option("sender.name", read_env(env::FROM_NAME_ENV_VAR))?
            .build()?
            .try_deserialize()
    }

    /// Build settings from a JSON document, on top of the built-in defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT_IN_MILLIS as i64,
            )?
            .set_default("sender.name", "")
    }

    pub fn adapter_config(&self) -> AdapterConfig {
        AdapterConfig::new(
            self.email_client.api_key.clone(),
            self.sender.address.clone(),
            self.sender.name.clone(),
        )
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
