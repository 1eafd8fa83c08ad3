use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::lookup::{BalanceLookup, BalanceLookupError};
use crate::types::{Balance, ClientBalance, ClientId};

/// [`BalanceLookup`] backed by a map held in memory.
///
/// The map is protected by an [`Arc`] so clones share the same balances.
#[derive(Clone, Default)]
pub struct InMemoryBalanceLookup {
    balances: Arc<RwLock<HashMap<ClientId, Balance>>>,
}

impl InMemoryBalanceLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lookup already holding the given records. Later records win on duplicate ids.
    pub fn with_balances(balances: impl IntoIterator<Item = ClientBalance>) -> Self {
        let balances: HashMap<ClientId, Balance> = balances
            .into_iter()
            .map(|record| (record.client_id, record.balance))
            .collect();

        Self {
            balances: Arc::new(RwLock::new(balances)),
        }
    }

    /// Inserts or replaces the balance recorded for `client_id`.
    pub async fn set_balance(&self, client_id: ClientId, balance: Balance) {
        let mut guard = self.balances.write().await;
        guard.insert(client_id, balance);
    }

    /// Removes the record of `client_id`, returning its last balance if there was one.
    pub async fn remove(&self, client_id: ClientId) -> Option<Balance> {
        self.balances.write().await.remove(&client_id)
    }
}

#[async_trait]
impl BalanceLookup for InMemoryBalanceLookup {
    type Error = BalanceLookupError;

    async fn balance(&self, client_id: ClientId) -> Result<Balance, Self::Error> {
        let guard = self.balances.read().await;

        match guard.get(&client_id) {
            Some(balance) => Ok(*balance),
            None => {
                tracing::debug!(%client_id, "no balance record for client");
                Err(BalanceLookupError::ClientNotFound(client_id))
            }
        }
    }
}
