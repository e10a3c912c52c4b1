//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate cards
//! from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::registry::RateCardRegistry;
use super::types::RateCardsFile;

/// Loads and provides access to rate card configuration.
///
/// The `ConfigLoader` reads a YAML rate card file, checks that every rate is
/// non-negative and that every tier is fully priced, and exposes the result
/// as a [`RateCardRegistry`].
///
/// # File Structure
///
/// ```text
/// rate_cards:
///   bronze_tier:
///     hourly_minimum_earnings: "14.50"
///     line_items:
///       perSuccessfulAttempt: "0.459"
///       perUnsuccessfulAttempt: "0.229"
///       longRouteBonus: "10.00"
///       loyaltyBonusRoutes: "20.00"
///   silver_tier:
///     ...
/// ```
///
/// # Example
///
/// ```no_run
/// use courier_earnings::config::ConfigLoader;
/// use courier_earnings::models::Tier;
///
/// let loader = ConfigLoader::load("./config/rate_cards.yaml")?;
/// let gold = loader.registry().rate_card_for(Tier::Gold);
/// println!("Gold hourly minimum: ${}", gold.hourly_minimum_earnings());
/// # Ok::<(), courier_earnings::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: RateCardRegistry,
}

impl ConfigLoader {
    /// Loads rate cards from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML, unknown keys or a negative rate
    ///   (`ConfigParseError`)
    /// - A tier or one of its required rates is missing
    ///   (`MissingRateCard`, `MissingRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses rate cards from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use courier_earnings::config::ConfigLoader;
    ///
    /// let result = ConfigLoader::from_yaml_str("rate_cards: {}");
    /// assert!(result.is_err());
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source: &str) -> EngineResult<Self> {
        let file: RateCardsFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        for (tier, card) in &file.rate_cards {
            if card.hourly_minimum_earnings() < Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("{tier}: hourly_minimum_earnings must not be negative"),
                });
            }
            if let Some((kind, _)) = card
                .line_items()
                .iter()
                .find(|(_, rate)| **rate < Decimal::ZERO)
            {
                return Err(EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("{tier}: rate for '{kind}' must not be negative"),
                });
            }
        }

        let registry = RateCardRegistry::from_rate_cards(file.rate_cards)?;
        Ok(Self { registry })
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> &RateCardRegistry {
        &self.registry
    }

    /// Consumes the loader, returning the registry.
    pub fn into_registry(self) -> RateCardRegistry {
        self.registry
    }
}
