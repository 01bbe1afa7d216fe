//! Decimal type utilities for precise money calculations

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Monetary amount with exact decimal arithmetic
pub type Amount = Decimal;

/// Returns true when the amount is strictly greater than zero
pub fn is_positive(amount: Amount) -> bool {
    amount > Amount::ZERO
}

/// Clamp an amount at zero
pub fn floor_at_zero(amount: Amount) -> Amount {
    amount.max(Amount::ZERO)
}
