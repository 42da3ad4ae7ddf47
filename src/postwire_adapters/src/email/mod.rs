pub mod http_email_client;
pub mod mock_email_client;

pub use http_email_client::HttpEmailClient;
pub use mock_email_client::MockEmailClient;
