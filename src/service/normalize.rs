//! Amount normalization.
//!
//! Converts decimal currency values to integer minor units (cents) before
//! any optimization happens. All downstream arithmetic is integral; decimals
//! only reappear when the response is assembled. Binary floating point
//! cannot represent most two-decimal values exactly (0.10 is really
//! 0.1000000000000000055...), so conversion rounds to the nearest minor unit
//! and rejects inputs whose residual shows they carried more than two
//! decimal places.

use crate::error::{AppError, Result};

/// Minor units per major currency unit.
pub const MINOR_PER_MAJOR: f64 = 100.0;

/// Residual tolerance when snapping a scaled value to an integer minor-unit
/// count. Well above accumulated f64 noise at the supported magnitudes, well
/// below half a minor unit.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Convert a decimal value to minor units, rejecting values that do not land
/// on a whole number of minor units.
fn to_minor_units(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let scaled = value * MINOR_PER_MAJOR;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > RESIDUAL_TOLERANCE {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minor = rounded as u64;
    Some(minor)
}

/// Normalize a decimal amount to minor units.
///
/// # Errors
///
/// Returns `InvalidAmount` if the amount is negative, not finite, exceeds
/// `max_amount`, or has more than two decimal places.
pub fn amount_to_minor(amount: f64, max_amount: f64) -> Result<u64> {
    if !amount.is_finite() {
        return Err(AppError::InvalidAmount(
            "amount must be a finite number".to_string(),
        ));
    }
    if amount < 0.0 || amount > max_amount {
        return Err(AppError::InvalidAmount(format!(
            "amount must be between 0 and {max_amount}"
        )));
    }
    to_minor_units(amount).ok_or_else(|| {
        AppError::InvalidAmount(format!(
            "amount {amount} has more than two decimal places"
        ))
    })
}

/// Normalize a denomination list to deduplicated minor units.
///
/// Input order is irrelevant; the returned values are sorted ascending.
///
/// # Errors
///
/// Returns `EmptyDenominationSet` if the list is empty, or
/// `InvalidDenomination` if any value is non-positive, not finite, has more
/// than two decimal places, or duplicates another after normalization.
pub fn denominations_to_minor(denominations: &[f64]) -> Result<Vec<u64>> {
    if denominations.is_empty() {
        return Err(AppError::EmptyDenominationSet);
    }

    let mut minor = Vec::with_capacity(denominations.len());
    for &value in denominations {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::InvalidDenomination(format!(
                "denomination {value} must be a positive finite number"
            )));
        }
        let cents = to_minor_units(value).ok_or_else(|| {
            AppError::InvalidDenomination(format!(
                "denomination {value} has more than two decimal places"
            ))
        })?;
        minor.push(cents);
    }

    minor.sort_unstable();
    let before = minor.len();
    minor.dedup();
    if minor.len() != before {
        return Err(AppError::InvalidDenomination(
            "duplicate denomination in set".to_string(),
        ));
    }

    Ok(minor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_exact_conversion() {
        // 0.10 is not exactly representable in binary; must still yield 10
        assert_eq!(amount_to_minor(0.10, 10000.0).unwrap(), 10);
        assert_eq!(amount_to_minor(0.41, 10000.0).unwrap(), 41);
        assert_eq!(amount_to_minor(0.0, 10000.0).unwrap(), 0);
        assert_eq!(amount_to_minor(10000.0, 10000.0).unwrap(), 1_000_000);
    }

    #[test]
    fn test_amount_out_of_range() {
        assert!(matches!(
            amount_to_minor(-0.01, 10000.0),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            amount_to_minor(10000.01, 10000.0),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_not_finite() {
        assert!(matches!(
            amount_to_minor(f64::NAN, 10000.0),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            amount_to_minor(f64::INFINITY, 10000.0),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_excess_precision() {
        assert!(matches!(
            amount_to_minor(0.015, 10000.0),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            amount_to_minor(1.234, 10000.0),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_denominations_sorted_and_converted() {
        let minor = denominations_to_minor(&[0.50, 0.05, 0.10]).unwrap();
        assert_eq!(minor, vec![5, 10, 50]);
    }

    #[test]
    fn test_denominations_empty() {
        assert!(matches!(
            denominations_to_minor(&[]),
            Err(AppError::EmptyDenominationSet)
        ));
    }

    #[test]
    fn test_denominations_non_positive() {
        assert!(matches!(
            denominations_to_minor(&[0.10, 0.0]),
            Err(AppError::InvalidDenomination(_))
        ));
        assert!(matches!(
            denominations_to_minor(&[-0.05]),
            Err(AppError::InvalidDenomination(_))
        ));
    }

    #[test]
    fn test_denominations_excess_precision() {
        assert!(matches!(
            denominations_to_minor(&[0.001]),
            Err(AppError::InvalidDenomination(_))
        ));
    }

    #[test]
    fn test_denominations_duplicate_after_normalization() {
        // 0.1 and 0.10 normalize to the same minor-unit value
        assert!(matches!(
            denominations_to_minor(&[0.1, 0.10]),
            Err(AppError::InvalidDenomination(_))
        ));
    }
}
