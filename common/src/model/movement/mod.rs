//! Movement models and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{self, Amount};
use crate::error::{Error, Result};

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Money put into the account
    Deposit,
    /// Money taken out of the account
    Withdrawal,
}

/// A single deposit or withdrawal, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Calendar day the movement happened
    date: NaiveDate,
    /// Always strictly positive; the sign is carried by `kind`
    amount: Amount,
    kind: MovementKind,
}

impl Movement {
    /// Create a movement, rejecting amounts that are not strictly positive
    pub fn new(date: NaiveDate, amount: Amount, kind: MovementKind) -> Result<Self> {
        if !decimal::is_positive(amount) {
            return Err(Error::InvalidAmount(format!(
                "{}: movement amount must be positive",
                amount
            )));
        }

        Ok(Self { date, amount, kind })
    }

    /// Create a deposit movement
    pub fn deposit(date: NaiveDate, amount: Amount) -> Result<Self> {
        Self::new(date, amount, MovementKind::Deposit)
    }

    /// Create a withdrawal movement
    pub fn withdrawal(date: NaiveDate, amount: Amount) -> Result<Self> {
        Self::new(date, amount, MovementKind::Withdrawal)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    /// Whether the movement happened on the given day
    pub fn occurred_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Effect of the movement on a balance
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }
}
