//! Wallet account enforcing daily deposit and withdrawal rules

pub mod account;
pub mod config;

pub use account::{Account, AccountSnapshot};
pub use config::AccountPolicy;
