use serde::{Deserialize, Serialize};

use super::ApiKey;

/// Where a relayer lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub url: String,

    #[serde(rename = "apiKey")]
    pub api_key: ApiKey,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, api_key: impl Into<ApiKey>) -> Self {
        Self { url: url.into(), api_key: api_key.into() }
    }

    /// Joins `path` onto the base url with exactly one slash between them.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Both the url and the api key are set.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.api_key.is_empty()
    }
}
