use async_trait::async_trait;

use crate::compare;
use crate::lookup::BalanceLookup;
use crate::types::{Balance, ClientId, PurchaseRequest};
use crate::validation::PurchaseValidation;

/// The BalanceSufficiencyChecker couples the sufficiency policy with a [`BalanceLookup`], so that
/// purchases can be checked against the balance a client currently holds.
///
/// The checker keeps no state besides its lookup: calls are independent and may run concurrently.
/// Lookup failures (e.g. an unknown client) are returned untouched and yield no verdict.
pub struct BalanceSufficiencyChecker<L>
where
    L: BalanceLookup,
{
    lookup: L,
}

impl<L> BalanceSufficiencyChecker<L>
where
    L: BalanceLookup,
{
    /// Creates a new instance of a [`BalanceSufficiencyChecker`].
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the internal balance lookup
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    async fn exceeds(&self, client_id: ClientId, required: f64) -> Result<bool, L::Error> {
        let balance: Balance = self.lookup.balance(client_id).await?;
        let sufficient: bool = compare::strictly_exceeds(balance.value(), required);

        tracing::debug!(balance = balance.value(), required, sufficient, "balance checked");

        Ok(sufficient)
    }
}

#[async_trait]
impl<L> PurchaseValidation for BalanceSufficiencyChecker<L>
where
    L: BalanceLookup + Sync,
{
    type Error = L::Error;

    #[tracing::instrument(skip_all, fields(client_id = %client_id), err)]
    async fn has_sufficient_balance(
        &self,
        client_id: ClientId,
        purchase: &PurchaseRequest,
    ) -> Result<bool, Self::Error> {
        self.exceeds(client_id, purchase.unit_amount).await
    }

    #[tracing::instrument(skip_all, fields(client_id = %client_id, quantity = purchase.quantity), err)]
    async fn has_sufficient_balance_for_quantity(
        &self,
        client_id: ClientId,
        purchase: &PurchaseRequest,
    ) -> Result<bool, Self::Error> {
        self.exceeds(client_id, purchase.total_cost()).await
    }
}
