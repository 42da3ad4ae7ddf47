pub mod builder;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    adapter_config::AdapterConfig,
    address::{Address, AddressField, parse_address},
    attachment::{Attachment, AttachmentContent, AttachmentInput, DEFAULT_CONTENT_TYPE},
    message::{MessageOptions, OutboundMessage},
    recipient::Recipient,
    send_result::{ProviderReply, SendSuccess},
};

pub use builder::MessageBuilder;
pub use error::SendError;
pub use ports::services::EmailClient;
