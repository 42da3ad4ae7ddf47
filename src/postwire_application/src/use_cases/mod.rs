pub mod send_email;

// Re-export for convenience
pub use send_email::SendEmailUseCase;
