//! Account entity and its balance rules

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use common::clock::{Clock, SystemClock};
use common::decimal::{self, Amount};
use common::error::{Error, Result};
use common::model::movement::{Movement, MovementKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AccountPolicy;

/// Account holding a balance and its deposit and withdrawal history
pub struct Account {
    id: Uuid,
    balance: Amount,
    deposits: Vec<Movement>,
    withdrawals: Vec<Movement>,
    policy: AccountPolicy,
    clock: Arc<dyn Clock>,
}

/// Serializable view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: Uuid,
    pub balance: Amount,
    pub deposits: Vec<Movement>,
    pub withdrawals: Vec<Movement>,
}

impl AccountSnapshot {
    /// Render the snapshot as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Account {
    /// Open an account with the default policy and the host clock
    pub fn new(initial_balance: Amount) -> Result<Self> {
        Self::with_policy(initial_balance, AccountPolicy::default(), Arc::new(SystemClock))
    }

    /// Open an account with custom limits and time source
    pub fn with_policy(
        initial_balance: Amount,
        policy: AccountPolicy,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        policy.validate()?;

        if initial_balance < Amount::ZERO {
            return Err(Error::InvalidAmount(format!(
                "{}: initial balance cannot be negative",
                initial_balance
            )));
        }

        let account = Self {
            id: Uuid::new_v4(),
            balance: initial_balance,
            deposits: Vec::new(),
            withdrawals: Vec::new(),
            policy,
            clock,
        };

        debug!("Opened account {} with balance {}", account.id, initial_balance);
        Ok(account)
    }

    /// Unique account ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Deposits in the order they were recorded
    pub fn deposits(&self) -> &[Movement] {
        &self.deposits
    }

    /// Withdrawals in the order they were recorded
    pub fn withdrawals(&self) -> &[Movement] {
        &self.withdrawals
    }

    /// Limits the account was opened under
    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    /// All movements ordered by date
    pub fn movements(&self) -> Vec<Movement> {
        let mut movements: Vec<Movement> = self
            .deposits
            .iter()
            .chain(self.withdrawals.iter())
            .cloned()
            .collect();
        movements.sort_by_key(Movement::date);
        movements
    }

    /// Put money into the account
    pub fn deposit(&mut self, amount: Amount) -> Result<()> {
        self.check_positive(amount)?;

        let today = self.clock.today();
        let deposits_today = self.deposits_on(today);
        if deposits_today >= self.policy.max_daily_deposits as usize {
            warn!("Account {} rejected deposit of {}: daily deposit limit reached", self.id, amount);
            return Err(Error::DepositLimitExceeded(format!(
                "already made {} deposits today, the limit is {}",
                deposits_today, self.policy.max_daily_deposits
            )));
        }

        let movement = Movement::deposit(today, amount)?;
        let balance = self.balance.checked_add(amount).ok_or_else(|| {
            warn!("Account {} rejected deposit of {}: balance overflow", self.id, amount);
            Error::DecimalError(format!("balance overflow adding {} to {}", amount, self.balance))
        })?;
        self.balance = balance;
        self.deposits.push(movement);

        info!("Deposited {} to account {}, balance {}", amount, self.id, self.balance);
        Ok(())
    }

    /// Take money out of the account
    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.check_positive(amount)?;

        let today = self.clock.today();
        let remaining = self
            .policy
            .daily_withdrawal_limit
            .saturating_sub(self.amount_withdrawn_on(today));
        if amount > remaining {
            warn!("Account {} rejected withdrawal of {}: daily limit reached", self.id, amount);
            return Err(Error::DailyWithdrawalLimitExceeded(format!(
                "cannot withdraw more than {} per day, remaining today: {}",
                self.policy.daily_withdrawal_limit,
                decimal::floor_at_zero(remaining)
            )));
        }

        if amount > self.balance {
            warn!("Account {} rejected withdrawal of {}: balance is {}", self.id, amount, self.balance);
            return Err(Error::InsufficientBalance(format!(
                "cannot withdraw more than {}",
                self.balance
            )));
        }

        let movement = Movement::withdrawal(today, amount)?;
        self.balance -= amount;
        self.withdrawals.push(movement);

        info!("Withdrew {} from account {}, balance {}", amount, self.id, self.balance);
        Ok(())
    }

    /// Append a dated movement to the history without changing the balance
    ///
    /// Used to load history kept elsewhere. Only days before today are
    /// accepted, so today's limits are governed by `deposit` and `withdraw`
    /// alone.
    pub fn record_movement(&mut self, date: NaiveDate, amount: Amount, kind: MovementKind) -> Result<()> {
        let movement = Movement::new(date, amount, kind)?;

        let today = self.clock.today();
        if date >= today {
            warn!("Account {} rejected {:?} dated {}: not before {}", self.id, kind, date, today);
            return Err(Error::InvalidDate(format!(
                "{}: recorded movements must be dated before {}",
                date, today
            )));
        }
        debug!("Recording {:?} of {} on {} for account {}", kind, amount, date, self.id);

        match kind {
            MovementKind::Deposit => self.deposits.push(movement),
            MovementKind::Withdrawal => self.withdrawals.push(movement),
        }
        Ok(())
    }

    /// Total withdrawn on the given day
    pub fn amount_withdrawn_on(&self, date: NaiveDate) -> Amount {
        Self::total_on(&self.withdrawals, date)
    }

    /// Total deposited on the given day
    pub fn amount_deposited_on(&self, date: NaiveDate) -> Amount {
        Self::total_on(&self.deposits, date)
    }

    /// Number of deposits made on the given day
    pub fn deposits_on(&self, date: NaiveDate) -> usize {
        self.deposits.iter().filter(|m| m.occurred_on(date)).count()
    }

    /// How much can still be withdrawn today, ignoring the balance
    pub fn remaining_withdrawal_allowance(&self) -> Amount {
        let today = self.clock.today();
        decimal::floor_at_zero(
            self.policy
                .daily_withdrawal_limit
                .saturating_sub(self.amount_withdrawn_on(today)),
        )
    }

    /// How many deposits can still be made today
    pub fn remaining_deposits_today(&self) -> usize {
        let today = self.clock.today();
        (self.policy.max_daily_deposits as usize).saturating_sub(self.deposits_on(today))
    }

    /// Copy of the balance and history for serialization
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            balance: self.balance,
            deposits: self.deposits.clone(),
            withdrawals: self.withdrawals.clone(),
        }
    }

    fn check_positive(&self, amount: Amount) -> Result<()> {
        if !decimal::is_positive(amount) {
            warn!("Account {} rejected non-positive amount {}", self.id, amount);
            return Err(Error::InvalidAmount(format!(
                "{}: amount must be positive",
                amount
            )));
        }
        Ok(())
    }

    // Saturates instead of panicking on imported history near Decimal::MAX
    fn total_on(movements: &[Movement], date: NaiveDate) -> Amount {
        movements
            .iter()
            .filter(|m| m.occurred_on(date))
            .fold(Amount::ZERO, |total, m| total.saturating_add(m.amount()))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("balance", &self.balance)
            .field("deposits", &self.deposits)
            .field("withdrawals", &self.withdrawals)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
