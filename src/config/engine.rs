//! Change engine policy configuration.
//!
//! The maximum accepted amount and the canonical denomination set are
//! deployment policy, not algorithm constants: the engine takes them as
//! parameters so it stays independently testable with arbitrary sets.

use config::ConfigError;
use serde::Deserialize;

/// Change engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Maximum accepted amount, in major currency units.
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,

    /// Canonical denomination set accepted by the service, in major units.
    #[serde(default = "default_denominations")]
    pub denominations: Vec<f64>,
}

const fn default_max_amount() -> f64 {
    10000.0
}

fn default_denominations() -> Vec<f64> {
    vec![
        0.01, 0.05, 0.10, 0.20, 0.50, 1.00, 2.00, 5.00, 10.00, 50.00, 100.00, 1000.00,
    ]
}

impl EngineConfig {
    /// Validate the engine configuration.
    ///
    /// Deep validation of the denomination values (clean minor-unit
    /// conversion, uniqueness) happens when the engine is built; this catches
    /// the structurally broken cases early with a config-level error.
    ///
    /// # Errors
    ///
    /// Returns an error if the maximum amount is not a positive finite number
    /// or the denomination set is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_amount.is_finite() || self.max_amount <= 0.0 {
            return Err(ConfigError::Message(
                "engine.max_amount must be a positive finite number".to_string(),
            ));
        }
        if self.denominations.is_empty() {
            return Err(ConfigError::Message(
                "engine.denominations cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_amount: default_max_amount(),
            denominations: default_denominations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_denominations() {
        let config = EngineConfig {
            denominations: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_max_amount() {
        let config = EngineConfig {
            max_amount: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            max_amount: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
