pub mod env {
    pub const CONFIG_FILE_ENV_VAR: &str = "POSTWIRE_CONFIG_FILE";
    pub const BASE_URL_ENV_VAR: &str = "POSTWIRE_BASE_URL";
    pub const API_KEY_ENV_VAR: &str = "POSTWIRE_API_KEY";
    pub const FROM_ADDRESS_ENV_VAR: &str = "POSTWIRE_FROM_ADDRESS";
    pub const FROM_NAME_ENV_VAR: &str = "POSTWIRE_FROM_NAME";
    pub const ENV_PREFIX: &str = "POSTWIRE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_FILE: &str = "postwire";

pub mod prod {
    pub mod email_client {
        pub const BASE_URL: &str = "https://api.ahasend.com/v1/";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
