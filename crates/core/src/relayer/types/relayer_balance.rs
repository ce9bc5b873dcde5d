use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Native balance of a relayer account, in the unit the relayer reports
/// (`wei`, `lamports`, `stroops`, ...).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RelayerBalance {
    pub balance: serde_json::Number,
    pub unit: String,
}

impl Display for RelayerBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.balance, self.unit)
    }
}
