//! Courier Earnings Engine
//!
//! This crate computes a courier's earnings statement from a list of delivery attempt
//! records, applying tier-specific rate cards, conditional bonuses and a guaranteed
//! hourly minimum.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
