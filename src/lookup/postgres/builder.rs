use std::sync::Arc;

use sqlx::postgres::PgQueryResult;
use sqlx::{Pool, Postgres, Transaction};

use super::{InnerPgBalanceLookup, PgBalanceLookup, Statements};

/// Table read by a [`PgBalanceLookup`] unless another one is configured.
pub const DEFAULT_TABLE_NAME: &str = "client_balances";

/// Struct used to build a brand new [`PgBalanceLookup`].
pub struct PgBalanceLookupBuilder {
    pool: Pool<Postgres>,
    table_name: String,
    run_migrations: bool,
}

impl PgBalanceLookupBuilder {
    /// Creates a new instance of a [`PgBalanceLookupBuilder`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            run_migrations: true,
        }
    }

    /// Set the name of the table holding the balances
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Calling this function the caller avoid running migrations. Useful when the balances table is
    /// owned by another service.
    pub fn without_running_migrations(mut self) -> Self {
        self.run_migrations = false;
        self
    }

    /// Creates the balances table, if `run_migrations` isn't explicitly set to false, and returns an
    /// instance of [`PgBalanceLookup`].
    ///
    /// # Errors
    ///
    /// Will return an `Err` if there's an error running the migration.
    pub async fn try_build(self) -> Result<PgBalanceLookup, sqlx::Error> {
        let statements: Statements = Statements::new(&self.table_name);

        if self.run_migrations {
            let mut transaction: Transaction<Postgres> = self.pool.begin().await?;
            let _: PgQueryResult = sqlx::query(statements.create_table())
                .execute(&mut *transaction)
                .await?;
            transaction.commit().await?;
        }

        Ok(PgBalanceLookup {
            inner: Arc::new(InnerPgBalanceLookup {
                pool: self.pool,
                statements,
            }),
        })
    }
}
