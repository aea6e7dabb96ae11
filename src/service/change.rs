//! Change calculation service.
//!
//! Orchestrates the engine stages and enforces boundary policy: the
//! configured maximum amount and the canonical denomination set. The stages
//! themselves (`normalize`, `solver`, `assemble`) are policy-free and accept
//! arbitrary denomination sets.

use crate::config::EngineConfig;
use crate::domain::{ChangeRequest, ChangeResponse};
use crate::error::{AppError, Result};
use crate::service::{assemble, normalize, solver};

/// Service computing minimum coin change.
///
/// Stateless per request; a single instance is shared across all handlers.
pub struct ChangeService {
    /// Maximum accepted amount, in major units.
    max_amount: f64,
    /// Canonical denominations, in major units, as configured.
    canonical: Vec<f64>,
    /// Canonical denominations in minor units, sorted ascending.
    canonical_minor: Vec<u64>,
}

impl ChangeService {
    /// Create a new change service from engine configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured denomination set is empty or does
    /// not convert cleanly to minor units.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let canonical_minor = normalize::denominations_to_minor(&config.denominations)?;
        Ok(Self {
            max_amount: config.max_amount,
            canonical: config.denominations.clone(),
            canonical_minor,
        })
    }

    /// Compute the minimum coin change for a request.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, `Infeasible` when no
    /// exact combination of the denominations reaches the amount, or
    /// `Internal` on a defensive engine fault.
    pub fn calculate(&self, request: &ChangeRequest) -> Result<ChangeResponse> {
        let target = normalize::amount_to_minor(request.amount, self.max_amount)?;
        let denominations = normalize::denominations_to_minor(&request.denominations)?;

        // Boundary policy: requested denominations must come from the
        // canonical set.
        for &minor in &denominations {
            if self.canonical_minor.binary_search(&minor).is_err() {
                #[allow(clippy::cast_precision_loss)]
                let value = minor as f64 / normalize::MINOR_PER_MAJOR;
                return Err(AppError::InvalidDenomination(format!(
                    "denomination {value} is not accepted"
                )));
            }
        }

        let pieces = solver::min_pieces(target, &denominations)?.ok_or(AppError::Infeasible)?;

        Ok(assemble::build_response(&pieces))
    }

    /// The canonical denomination list, as configured.
    #[must_use]
    pub fn valid_denominations(&self) -> &[f64] {
        &self.canonical
    }

    /// Smoke-test the engine for the readiness probe.
    #[must_use]
    pub fn self_check(&self) -> bool {
        let smallest = self.canonical.iter().copied().fold(f64::INFINITY, f64::min);
        let request = ChangeRequest {
            amount: smallest,
            denominations: self.canonical.clone(),
        };
        matches!(
            self.calculate(&request),
            Ok(ref response) if response.total_coins == 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoinCount;

    fn default_service() -> ChangeService {
        ChangeService::new(&EngineConfig::default()).unwrap()
    }

    fn custom_service(max_amount: f64, denominations: &[f64]) -> ChangeService {
        ChangeService::new(&EngineConfig {
            max_amount,
            denominations: denominations.to_vec(),
        })
        .unwrap()
    }

    fn request(amount: f64, denominations: &[f64]) -> ChangeRequest {
        ChangeRequest {
            amount,
            denominations: denominations.to_vec(),
        }
    }

    #[test]
    fn test_canonical_41_cents_is_three_pieces() {
        let service = default_service();
        let response = service
            .calculate(&request(0.41, &[0.01, 0.05, 0.10, 0.20, 0.50, 1.00]))
            .unwrap();
        assert_eq!(response.total_coins, 3);
        assert_eq!(
            response.coins,
            vec![
                CoinCount {
                    denomination: 0.01,
                    count: 1
                },
                CoinCount {
                    denomination: 0.20,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_zero_amount_is_zero_pieces() {
        let service = default_service();
        let response = service.calculate(&request(0.0, &[0.05, 0.10])).unwrap();
        assert!(response.coins.is_empty());
        assert_eq!(response.total_coins, 0);
    }

    #[test]
    fn test_infeasible_is_distinct_outcome() {
        let service = default_service();
        let result = service.calculate(&request(0.03, &[0.05, 0.10]));
        assert!(matches!(result, Err(AppError::Infeasible)));
    }

    #[test]
    fn test_greedy_trap_with_custom_set() {
        // 0.25 is not in the default canonical set; configure it in.
        let service = custom_service(10000.0, &[0.25, 0.10]);
        let response = service.calculate(&request(0.30, &[0.25, 0.10])).unwrap();
        assert_eq!(response.total_coins, 3);
        assert_eq!(
            response.coins,
            vec![CoinCount {
                denomination: 0.10,
                count: 3
            }]
        );
    }

    #[test]
    fn test_rejects_denomination_outside_canonical_set() {
        let service = default_service();
        let result = service.calculate(&request(0.30, &[0.25, 0.10]));
        assert!(matches!(result, Err(AppError::InvalidDenomination(_))));
    }

    #[test]
    fn test_rejects_amount_over_maximum() {
        let service = default_service();
        let result = service.calculate(&request(10000.01, &[0.10]));
        assert!(matches!(result, Err(AppError::InvalidAmount(_))));
    }

    #[test]
    fn test_rejects_empty_denomination_set() {
        let service = default_service();
        let result = service.calculate(&request(1.0, &[]));
        assert!(matches!(result, Err(AppError::EmptyDenominationSet)));
    }

    #[test]
    fn test_exactness_in_minor_units() {
        let service = default_service();
        let response = service
            .calculate(&request(13.37, &[0.01, 0.05, 0.10, 0.20, 0.50, 1.00, 2.00, 5.00, 10.00]))
            .unwrap();
        let total_minor: u64 = response
            .coins
            .iter()
            .map(|c| (c.denomination * 100.0).round() as u64 * u64::from(c.count))
            .sum();
        assert_eq!(total_minor, 1337);
    }

    #[test]
    fn test_deterministic_output() {
        let service = default_service();
        let req = request(7.77, &[0.01, 0.05, 0.10, 0.20, 0.50, 2.00]);
        let a = service.calculate(&req).unwrap();
        let b = service.calculate(&req).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_self_check_passes() {
        assert!(default_service().self_check());
    }
}
