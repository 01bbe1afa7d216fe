//! Error types for the wallet account
//!
//! Every rule the account enforces maps to one variant, so callers can match
//! on the kind of rejection instead of parsing messages.

use thiserror::Error;

/// Account error type
#[derive(Debug, Error)]
pub enum Error {
    /// Amount is zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Movement date outside what the operation accepts
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The daily deposit count has already been reached
    #[error("Deposit limit exceeded: {0}")]
    DepositLimitExceeded(String),

    /// The withdrawal would go over what is left of today's allowance
    #[error("Daily withdrawal limit exceeded: {0}")]
    DailyWithdrawalLimitExceeded(String),

    /// Error when an account has insufficient funds
    #[error("Insufficient balance: {0}")]
    InsufficientBalance(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a business rule rejection rather than a setup
    /// or encoding failure
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Error::InvalidAmount(_)
                | Error::InvalidDate(_)
                | Error::DepositLimitExceeded(_)
                | Error::DailyWithdrawalLimitExceeded(_)
                | Error::InsufficientBalance(_)
        )
    }
}

/// From rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::DecimalError(err.to_string())
    }
}
