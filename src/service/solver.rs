//! Minimum-piece solver.
//!
//! Unbounded coin change over integer minor units, solved with dynamic
//! programming. Greedy largest-first selection is provably wrong for
//! non-canonical denomination sets (30 cents from {25, 10} greedily takes a
//! 25 and gets stuck; the optimum is three 10s), so every request runs the
//! exact DP regardless of the set.

use crate::error::{AppError, Result};

/// Defensive ceiling on the DP target, in minor units. The configured
/// maximum amount bounds real requests far below this; the ceiling only
/// guards against a pathological configuration allocating unbounded tables.
const MAX_TARGET: u64 = 100_000_000;

/// Sentinel for "no representation known" in the DP table.
const UNREACHABLE: u32 = u32::MAX;

/// Find the minimum number of pieces summing exactly to `target`.
///
/// `denominations` must be deduplicated positive minor-unit values; order is
/// irrelevant. Returns the multiset of pieces used in one optimal solution
/// (as minor-unit values, unordered), or `None` when no exact combination of
/// the denominations reaches the target. A target of zero yields an empty
/// multiset.
///
/// When several denominations produce the same minimal count for an amount,
/// the largest wins, so identical inputs always reconstruct the identical
/// solution.
///
/// # Errors
///
/// Returns `Internal` if the target exceeds the defensive table ceiling.
pub fn min_pieces(target: u64, denominations: &[u64]) -> Result<Option<Vec<u64>>> {
    if target > MAX_TARGET {
        return Err(AppError::Internal(format!(
            "solver target {target} exceeds supported ceiling"
        )));
    }
    #[allow(clippy::cast_possible_truncation)]
    let target = target as usize;

    // Largest first: with strict-improvement updates below, the first
    // denomination to reach a count wins ties.
    let mut coins: Vec<usize> = denominations
        .iter()
        .filter(|&&d| d > 0)
        .map(|&d| usize::try_from(d).unwrap_or(usize::MAX))
        .collect();
    coins.sort_unstable_by(|a, b| b.cmp(a));

    // best[a]: minimum pieces to represent amount a exactly.
    // choice[a]: last piece of one optimal solution for a.
    let mut best = vec![UNREACHABLE; target + 1];
    let mut choice = vec![0usize; target + 1];
    best[0] = 0;

    for amount in 1..=target {
        for &coin in &coins {
            if coin > amount {
                continue;
            }
            let prev = best[amount - coin];
            if prev == UNREACHABLE {
                continue;
            }
            let candidate = prev + 1;
            if candidate < best[amount] {
                best[amount] = candidate;
                choice[amount] = coin;
            }
        }
    }

    if best[target] == UNREACHABLE {
        return Ok(None);
    }

    // Walk the choice table back from the target to collect the pieces.
    let mut pieces = Vec::with_capacity(best[target] as usize);
    let mut remaining = target;
    while remaining > 0 {
        let coin = choice[remaining];
        pieces.push(coin as u64);
        remaining -= coin;
    }

    Ok(Some(pieces))
}
