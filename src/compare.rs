//! Total ordering of monetary amounts.
//!
//! Amounts are ordered exactly, with no tolerance. Every NaN compares equal to every other NaN
//! and greater than any other value, and `-0.0` sorts below `+0.0`.

use std::cmp::Ordering;

/// Compares two amounts under the total order described in the module docs.
pub fn compare(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.total_cmp(&right),
    }
}

/// Returns `true` only if `balance` is strictly greater than `amount`. Equal values do not qualify.
pub fn strictly_exceeds(balance: f64, amount: f64) -> bool {
    compare(balance, amount) == Ordering::Greater
}
