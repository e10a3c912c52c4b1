//! Core data models for the Courier Earnings Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attempt;
mod statement;
mod tier;

pub use attempt::{AttemptLog, AttemptRecord};
pub use statement::{EarningStatement, LineItem};
pub use tier::{Bonus, LineItemKind, Tier};
