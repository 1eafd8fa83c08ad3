//! Balance sufficiency checks run before a gift purchase is accepted.
//!
//! A [`BalanceSufficiencyChecker`] asks a [`lookup::BalanceLookup`] for a client's current
//! balance and answers whether that balance strictly exceeds the cost of the purchase.

pub use crate::checker::BalanceSufficiencyChecker;
pub use crate::types::{Balance, ClientBalance, ClientId, PurchaseRequest};
pub use crate::validation::PurchaseValidation;

mod checker;
pub mod compare;
pub mod lookup;
mod types;
mod validation;
