//! # Postwire - Transactional Email Provider Adapter
//!
//! This is a facade crate that re-exports all public APIs from the postwire components.
//! Use this crate to get the whole adapter in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! postwire = { path = "../postwire" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Recipient`, `OutboundMessage`, `Attachment`, `SendError`, etc.
//! - **Builder**: `MessageBuilder` and the `parse_address` helper
//! - **Port**: `EmailClient`
//! - **Use cases**: `SendEmailUseCase`
//! - **Adapters**: `HttpEmailClient`, `MockEmailClient`, `EmailSetting`
//! - **Service**: `EmailProvider` - The main entry point for hosts

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use postwire_core::*;
}

// Re-export most commonly used core types at the root level
pub use postwire_core::{
    AdapterConfig, Address, AddressField, Attachment, AttachmentContent, AttachmentInput,
    EmailClient, MessageBuilder, MessageOptions, OutboundMessage, Recipient, SendError,
    SendSuccess, parse_address,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use postwire_application::*;
}

pub use postwire_application::SendEmailUseCase;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Email client implementations
    pub mod email {
        pub use postwire_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use postwire_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use postwire_adapters::{
    config::EmailSetting,
    email::{HttpEmailClient, MockEmailClient},
};

// ============================================================================
// Email Provider (Main Entry Point)
// ============================================================================

/// Main email provider
pub use postwire_service::{EmailProvider, ProviderSetupError, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the email client port
pub use async_trait::async_trait;

/// Re-export secrecy for working with the API key
pub use secrecy::{ExposeSecret, Secret};
