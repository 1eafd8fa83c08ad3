use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque key identifying the client whose balance is checked.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i32);

impl ClientId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for ClientId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of the funds currently available to a client.
///
/// The value is only ever read here; whoever owns the balance record is in charge of mutating it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(f64);

impl Balance {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Balance {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// A balance record as returned by a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBalance {
    pub client_id: ClientId,
    pub balance: Balance,
}

/// The cost of a requested purchase.
///
/// Neither field is validated: negative amounts or quantities flow straight into
/// [`PurchaseRequest::total_cost`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Cost of a single unit.
    pub unit_amount: f64,
    /// Number of units requested.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

impl PurchaseRequest {
    /// Creates a single-unit purchase.
    pub const fn new(unit_amount: f64) -> Self {
        Self {
            unit_amount,
            quantity: default_quantity(),
        }
    }

    pub const fn with_quantity(unit_amount: f64, quantity: i32) -> Self {
        Self { unit_amount, quantity }
    }

    /// Required total for the whole purchase, `unit_amount * quantity`.
    pub fn total_cost(&self) -> f64 {
        self.unit_amount * f64::from(self.quantity)
    }
}
