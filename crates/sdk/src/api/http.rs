use std::time::Duration;

use relaydash_core::common_types::Endpoint;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::api::types::{ApiResult, ApiSdkError};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    endpoint: Endpoint,
}

impl HttpClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { client: Client::new(), endpoint }
    }

    /// Every request made through this client gives up after `timeout`.
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Reuses an existing connection pool for another endpoint.
    pub fn from_client(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    fn build_url(&self, path: &str) -> String {
        self.endpoint.join(path)
    }

    fn build_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = format!("Bearer {}", self.endpoint.api_key.expose());
        let mut value = HeaderValue::from_str(&bearer).map_err(|_| {
            ApiSdkError::ConfigError("API key contains characters not allowed in a header".into())
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        Ok(headers)
    }

    pub async fn get<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        let headers = self.build_headers()?;

        let response = self.client.get(&url).headers(headers).send().await?.error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.build_url(path);
        let headers = self.build_headers()?;

        let response =
            self.client.post(&url).headers(headers).json(body).send().await?.error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}
