//! Error types for the Courier Earnings Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate cards,
//! validating attempt records and serving statements.

use thiserror::Error;

use crate::models::{LineItemKind, Tier};

/// The main error type for the Courier Earnings Engine.
///
/// The earnings computation itself cannot fail on a validated [`AttemptLog`]
/// and a validated registry. Everything here describes configuration problems
/// or input rejected before it reaches the calculator.
///
/// [`AttemptLog`]: crate::models::AttemptLog
///
/// # Example
///
/// ```
/// use courier_earnings::error::EngineError;
///
/// let error = EngineError::UnknownRateCardId {
///     id: "diamond_tier".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid rate card id provided: diamond_tier");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An environment setting held a value that could not be used.
    #[error("Invalid setting '{name}': {message}")]
    InvalidSetting {
        /// The name of the setting.
        name: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// The rate card identifier does not name a known tier.
    #[error("Invalid rate card id provided: {id}")]
    UnknownRateCardId {
        /// The identifier that was supplied.
        id: String,
    },

    /// A statement was requested for an empty list of attempts.
    #[error("No activity logs found")]
    EmptyAttemptLog,

    /// An attempt record was present but unusable.
    #[error("Invalid attempt at index {index}: {message}")]
    InvalidAttempt {
        /// Position of the record in the submitted list.
        index: usize,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A registry was built without a rate card for one of the tiers.
    #[error("No rate card configured for tier {tier}")]
    MissingRateCard {
        /// The tier with no rate card.
        tier: Tier,
    },

    /// A tier's rate card lacks a rate its calculation plan needs.
    #[error("Rate card for tier {tier} has no rate for '{item}'")]
    MissingRate {
        /// The tier whose rate card is incomplete.
        tier: Tier,
        /// The line item kind without a rate.
        item: LineItemKind,
    },

    /// The tracing subscriber could not be installed.
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
