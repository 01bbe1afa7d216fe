//! Sources of the current calendar date
//!
//! Daily limits are evaluated against "today", which the account asks a
//! [`Clock`] for instead of reading the host clock directly.

use std::sync::RwLock;

use chrono::{Days, Local, NaiveDate};

/// Supplies the current calendar day
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock whose date only changes when told to
///
/// Meant for tests and simulations; production accounts use [`SystemClock`].
#[derive(Debug)]
pub struct ManualClock {
    today: RwLock<NaiveDate>,
}

impl ManualClock {
    /// Create a clock fixed at the given date
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    /// Move the clock to another date
    pub fn set(&self, date: NaiveDate) {
        let mut today = self.today.write().unwrap_or_else(|e| e.into_inner());
        *today = date;
    }

    /// Move the clock forward by whole days, saturating at the last
    /// representable date
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.write().unwrap_or_else(|e| e.into_inner());
        *today = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap_or_else(|e| e.into_inner())
    }
}
