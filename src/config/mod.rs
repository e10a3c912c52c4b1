//! Configuration loading and management for the Courier Earnings Engine.
//!
//! This module provides the rate card registry (built in, or loaded from a
//! YAML file) and the service settings read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use courier_earnings::config::ConfigLoader;
//!
//! let registry = ConfigLoader::load("./config/rate_cards.yaml").unwrap().into_registry();
//! for (tier, card) in registry.iter() {
//!     println!("{tier}: ${}/h", card.hourly_minimum_earnings());
//! }
//! ```

mod loader;
mod registry;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use registry::RateCardRegistry;
pub use settings::{AppConfig, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT};
pub use types::{RateCard, RateCardsFile};
