mod api;

use std::{sync::Arc, time::Duration};

pub use api::{
    ApiResponse, ApiResult, ApiSdkError, PluginApi, PluginInvoker, RelayerApi, http::HttpClient,
};
use relaydash_core::common_types::Endpoint;

/// Client for a single relayer.
pub struct SDK {
    pub relayer: RelayerApi,
    pub plugin: PluginApi,
}

impl SDK {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::from_http(HttpClient::new(endpoint))
    }

    /// Like [`SDK::new`] but every request gives up after `timeout`.
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> ApiResult<Self> {
        Ok(Self::from_http(HttpClient::with_timeout(endpoint, timeout)?))
    }

    fn from_http(client: HttpClient) -> Self {
        let client = Arc::new(client);

        Self { relayer: RelayerApi::new(Arc::clone(&client)), plugin: PluginApi::new(client) }
    }
}
