use std::ops::Deref;

use async_trait::async_trait;

use crate::types::{Balance, ClientId};

pub use in_memory::InMemoryBalanceLookup;

mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

/// A BalanceLookup is responsible for fetching the current balance of a client, given its identifier.
///
/// Implementors own the balance records; callers only ever read a snapshot of them.
#[async_trait]
pub trait BalanceLookup {
    type Error: std::error::Error;

    /// Returns the balance currently recorded for `client_id`.
    ///
    /// Implementors should fail with a "client not found" error when no record exists, rather than
    /// returning a zero balance.
    async fn balance(&self, client_id: ClientId) -> Result<Balance, Self::Error>;
}

/// Blanket implementation making a [`BalanceLookup`] every (smart) pointer to a [`BalanceLookup`],
/// e.g. `&Lookup`, `Box<Lookup>`, `Arc<Lookup>`.
#[async_trait]
impl<L, T> BalanceLookup for T
where
    L: BalanceLookup + Sync + ?Sized,
    T: Deref<Target = L> + Sync,
{
    type Error = L::Error;

    /// Deref call to [`BalanceLookup::balance`].
    async fn balance(&self, client_id: ClientId) -> Result<Balance, Self::Error> {
        self.deref().balance(client_id).await
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BalanceLookupError {
    /// No balance record exists for the client.
    #[error("client {0} not found")]
    ClientNotFound(ClientId),
    /// Sql error
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
