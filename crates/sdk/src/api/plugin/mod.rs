mod invoker;

pub use invoker::PluginInvoker;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use relaydash_core::plugin::PluginCallResult;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResponse, ApiResult},
};

#[derive(Debug, Serialize)]
pub(crate) struct PluginCallRequest<'a> {
    pub params: &'a Value,
}

/// Characters that would end or restructure a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn plugin_call_path(plugin_id: &str) -> String {
    format!("api/v1/plugins/{}/call", utf8_percent_encode(plugin_id, PATH_SEGMENT))
}

#[derive(Clone)]
pub struct PluginApi {
    client: Arc<HttpClient>,
}

impl PluginApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Calls a plugin once and decodes the relayer's result.
    ///
    /// A plugin that ran but reported `success: false` is still an `Ok`;
    /// only transport and HTTP status failures are errors.
    pub async fn call(&self, plugin_id: &str, params: &Value) -> ApiResult<PluginCallResult> {
        let response: ApiResponse<PluginCallResult> =
            self.client.post(&plugin_call_path(plugin_id), &PluginCallRequest { params }).await?;
        Ok(response.data)
    }
}
