use serde::{Deserialize, Serialize};

use super::RelayerId;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Relayer {
    /// The unique identifier for the relayer
    pub id: RelayerId,

    /// The name of the relayer
    pub name: String,

    /// The network the relayer operates on, e.g. `sepolia`
    pub network: String,

    /// The network family, e.g. `evm`, `solana`, `stellar`
    pub network_type: String,

    /// If the relayer is paused
    pub paused: bool,

    /// The relayer address
    pub address: String,
}

impl Relayer {
    pub fn status(&self) -> &'static str {
        if self.paused {
            "Paused"
        } else {
            "Active"
        }
    }
}
