//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Charge amount failed validation
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Redirect URL could not be built
    #[error("Bad redirect URL: {0}")]
    BadUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Stripe(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Stripe(_) => "Payment processing failed. Please try again.",
            PaymentError::InvalidAmount(_) => "Invalid amount.",
            PaymentError::Config(_) => "Service configuration error.",
            PaymentError::BadUrl(_) => "An error occurred processing your request.",
        }
    }
}
