use relaydash_core::{
    relayer::{Relayer, RelayerBalance, RelayerId},
    transaction::types::Transaction,
};
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResponse, ApiResult},
};

#[derive(Clone)]
pub struct RelayerApi {
    client: Arc<HttpClient>,
}

impl RelayerApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// All relayers visible to the api key.
    pub async fn list(&self) -> ApiResult<Vec<Relayer>> {
        let response: ApiResponse<Vec<Relayer>> = self.client.get("api/v1/relayers").await?;
        Ok(response.data)
    }

    pub async fn balance(&self, id: &RelayerId) -> ApiResult<RelayerBalance> {
        let response: ApiResponse<RelayerBalance> =
            self.client.get(&format!("api/v1/relayers/{}/balance", id)).await?;
        Ok(response.data)
    }

    /// Transactions sent by the relayer, newest first as returned by the server.
    pub async fn transactions(&self, id: &RelayerId) -> ApiResult<Vec<Transaction>> {
        let response: ApiResponse<Vec<Transaction>> =
            self.client.get(&format!("api/v1/relayers/{}/transactions", id)).await?;
        Ok(response.data)
    }
}
