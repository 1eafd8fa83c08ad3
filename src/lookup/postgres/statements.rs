/// Statements run by [`super::PgBalanceLookup`], rendered once for the configured table.
#[derive(Clone, Debug)]
pub struct Statements {
    table_name: String,
    create_table: String,
    select_balance: String,
    upsert_balance: String,
}

impl Statements {
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            create_table: format!(include_str!("statements/create_table.sql"), table_name),
            select_balance: format!(include_str!("statements/select_balance.sql"), table_name),
            upsert_balance: format!(include_str!("statements/upsert_balance.sql"), table_name),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn create_table(&self) -> &str {
        &self.create_table
    }

    pub fn select_balance(&self) -> &str {
        &self.select_balance
    }

    pub fn upsert_balance(&self) -> &str {
        &self.upsert_balance
    }
}
