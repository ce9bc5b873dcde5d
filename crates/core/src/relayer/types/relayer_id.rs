use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Relayer identifiers are operator-chosen strings such as `sepolia-example`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelayerId(String);

impl RelayerId {
    pub fn new(id: impl Into<String>) -> Self {
        RelayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RelayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RelayerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Relayer id cannot be empty".to_string());
        }

        Ok(RelayerId(trimmed.to_string()))
    }
}
