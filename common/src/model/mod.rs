//! Domain models for the wallet account

pub mod movement;
