pub use builder::*;
pub use statements::*;

mod builder;
mod statements;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::lookup::{BalanceLookup, BalanceLookupError};
use crate::types::{Balance, ClientBalance, ClientId};

/// Default Postgres implementation for the [`BalanceLookup`], reading balances from a table keyed by
/// client id.
///
/// The lookup is protected by an [`Arc`] that allows it to be cloneable still having the same memory
/// reference.
#[derive(Clone)]
pub struct PgBalanceLookup {
    pub(super) inner: Arc<InnerPgBalanceLookup>,
}

pub(super) struct InnerPgBalanceLookup {
    pub(super) pool: Pool<Postgres>,
    pub(super) statements: Statements,
}

impl PgBalanceLookup {
    /// Returns the name of the balances table
    pub fn table_name(&self) -> &str {
        self.inner.statements.table_name()
    }

    /// Inserts the given balance record, or overwrites the balance of an existing one.
    ///
    /// # Errors
    ///
    /// Will return an `Err` if the upsert fails.
    pub async fn upsert(&self, record: &ClientBalance) -> Result<(), BalanceLookupError> {
        let _ = sqlx::query(self.inner.statements.upsert_balance())
            .bind(record.client_id.value())
            .bind(record.balance.value())
            .execute(&self.inner.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl BalanceLookup for PgBalanceLookup {
    type Error = BalanceLookupError;

    #[tracing::instrument(skip_all, fields(client_id = %client_id), err)]
    async fn balance(&self, client_id: ClientId) -> Result<Balance, Self::Error> {
        let balance: Option<f64> = sqlx::query_scalar(self.inner.statements.select_balance())
            .bind(client_id.value())
            .fetch_optional(&self.inner.pool)
            .await?;

        match balance {
            Some(value) => Ok(Balance::new(value)),
            None => {
                tracing::debug!("no balance record for client");
                Err(BalanceLookupError::ClientNotFound(client_id))
            }
        }
    }
}
