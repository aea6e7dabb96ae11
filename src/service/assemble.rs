//! Response assembly.
//!
//! Groups the solver's piece multiset per denomination and converts minor
//! units back to decimals. All counting happens in integers; the decimal
//! conversion is purely presentational, so the reported total always equals
//! the solver's minimum exactly.

use std::collections::BTreeMap;

use crate::domain::{ChangeResponse, CoinCount};
use crate::service::normalize::MINOR_PER_MAJOR;

/// Build the API response from the solver's piece multiset.
///
/// Pieces of the same denomination collapse into one entry; entries are
/// sorted ascending by denomination (the `BTreeMap` key order).
#[must_use]
pub fn build_response(pieces: &[u64]) -> ChangeResponse {
    let mut grouped: BTreeMap<u64, u32> = BTreeMap::new();
    for &piece in pieces {
        *grouped.entry(piece).or_insert(0) += 1;
    }

    let coins: Vec<CoinCount> = grouped
        .into_iter()
        .map(|(minor, count)| CoinCount {
            #[allow(clippy::cast_precision_loss)]
            denomination: minor as f64 / MINOR_PER_MAJOR,
            count,
        })
        .collect();

    let total_coins = coins.iter().map(|c| c.count).sum();

    ChangeResponse { coins, total_coins }
}
