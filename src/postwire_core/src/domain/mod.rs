pub mod adapter_config;
pub mod address;
pub mod attachment;
pub mod message;
pub mod recipient;
pub mod send_result;
