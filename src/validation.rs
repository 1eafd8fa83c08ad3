use async_trait::async_trait;

use crate::compare;
use crate::types::{Balance, ClientId, PurchaseRequest};

/// Capability deciding whether a client can afford a purchase.
///
/// Every check is a strict-greater-than test: a balance exactly equal to the required amount is
/// **not** sufficient.
#[async_trait]
pub trait PurchaseValidation {
    type Error: std::error::Error;

    /// Checks the client's balance against the unit amount of the purchase, ignoring its quantity.
    async fn has_sufficient_balance(&self, client_id: ClientId, purchase: &PurchaseRequest)
        -> Result<bool, Self::Error>;

    /// Checks the client's balance against `unit_amount * quantity`.
    async fn has_sufficient_balance_for_quantity(
        &self,
        client_id: ClientId,
        purchase: &PurchaseRequest,
    ) -> Result<bool, Self::Error>;

    /// Checks an already known balance against `amount`, without looking anything up.
    fn has_sufficient_funds(&self, balance: Balance, amount: f64) -> bool {
        compare::strictly_exceeds(balance.value(), amount)
    }
}
