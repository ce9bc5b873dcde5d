use serde::{Deserialize, Serialize};

use super::TransactionStatus;

/// A transaction as listed under `/relayers/{id}/transactions`.
///
/// Amounts are kept as strings because relayers report them as decimal
/// strings that can exceed `u64`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transaction {
    pub id: String,

    #[serde(default)]
    pub hash: Option<String>,

    pub status: TransactionStatus,

    #[serde(default)]
    pub nonce: Option<u64>,

    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub gas_price: Option<String>,

    #[serde(default)]
    pub gas_limit: Option<String>,

    #[serde(default)]
    pub data: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub confirmed_at: Option<String>,
}
