//! Common types and utilities for the wallet account
//!
//! This library contains the types shared by the account crate and its
//! tests: the unified error type, decimal aliases, movement records and the
//! clock abstraction that supplies "today".

pub mod error;
pub mod model;
pub mod decimal;
pub mod clock;

/// Re-export important types
pub use error::{Error, Result};
pub use decimal::*;
pub use clock::{Clock, SystemClock};
