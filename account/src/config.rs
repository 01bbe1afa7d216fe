//! Configuration for account limits

use std::env::{self, VarError};
use std::str::FromStr;

use common::decimal::Amount;
use common::error::{Error, Result};
use tracing::debug;

/// Default number of deposits allowed per calendar day
pub const DEFAULT_MAX_DAILY_DEPOSITS: u32 = 3;

/// Default ceiling for the sum of withdrawals in a calendar day
pub const DEFAULT_DAILY_WITHDRAWAL_LIMIT: Amount = Amount::ONE_THOUSAND;

/// Business limits an account is opened under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPolicy {
    /// Deposits allowed per calendar day
    pub max_daily_deposits: u32,
    /// Maximum total withdrawn per calendar day
    pub daily_withdrawal_limit: Amount,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            max_daily_deposits: DEFAULT_MAX_DAILY_DEPOSITS,
            daily_withdrawal_limit: DEFAULT_DAILY_WITHDRAWAL_LIMIT,
        }
    }
}

impl AccountPolicy {
    /// Create a policy with custom limits
    pub fn new(max_daily_deposits: u32, daily_withdrawal_limit: Amount) -> Self {
        Self {
            max_daily_deposits,
            daily_withdrawal_limit,
        }
    }

    /// Create a policy from `MAX_DAILY_DEPOSITS` and `DAILY_WITHDRAWAL_LIMIT`,
    /// using the defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let max_daily_deposits = match read_var("MAX_DAILY_DEPOSITS")? {
            Some(value) => value.trim().parse::<u32>().map_err(|e| {
                Error::ConfigurationError(format!("MAX_DAILY_DEPOSITS={}: {}", value, e))
            })?,
            None => DEFAULT_MAX_DAILY_DEPOSITS,
        };

        let daily_withdrawal_limit = match read_var("DAILY_WITHDRAWAL_LIMIT")? {
            Some(value) => Amount::from_str(value.trim())?,
            None => DEFAULT_DAILY_WITHDRAWAL_LIMIT,
        };

        let policy = Self::new(max_daily_deposits, daily_withdrawal_limit);
        policy.validate()?;

        debug!(
            "Loaded account policy: {} deposits/day, {} withdrawal limit/day",
            policy.max_daily_deposits, policy.daily_withdrawal_limit
        );
        Ok(policy)
    }

    /// Check that the limits make sense
    pub fn validate(&self) -> Result<()> {
        if self.daily_withdrawal_limit < Amount::ZERO {
            return Err(Error::ConfigurationError(format!(
                "daily withdrawal limit cannot be negative: {}",
                self.daily_withdrawal_limit
            )));
        }

        Ok(())
    }
}

/// Read an environment variable, treating only an unset variable as absent
fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(Error::ConfigurationError(format!(
            "{} is not valid unicode: {:?}",
            name, raw
        ))),
    }
}
