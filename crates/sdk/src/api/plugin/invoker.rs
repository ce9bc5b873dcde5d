use std::time::Duration;

use async_trait::async_trait;
use relaydash_core::{
    benchmark::{InvocationClient, InvocationFailure},
    common_types::Endpoint,
};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{PluginCallRequest, plugin_call_path};
use crate::api::{http::HttpClient, types::ApiResult};

/// Calls plugins over HTTP on behalf of the benchmark runner.
///
/// The endpoint comes with each call, so one invoker can serve runs against
/// different relayers while sharing a single connection pool.
#[derive(Clone, Default)]
pub struct PluginInvoker {
    client: Client,
}

impl PluginInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl InvocationClient for PluginInvoker {
    async fn invoke(
        &self,
        endpoint: &Endpoint,
        operation_id: &str,
        parameters: &Value,
    ) -> Result<Value, InvocationFailure> {
        let http = HttpClient::from_client(self.client.clone(), endpoint.clone());

        http.post::<Value, _>(&plugin_call_path(operation_id), &PluginCallRequest {
            params: parameters,
        })
        .await
        .map_err(|e| {
            debug!("Plugin {} call against {} failed: {}", operation_id, endpoint.url, e);
            InvocationFailure::new(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{TEST_API_KEY, spawn};
    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use relaydash_core::benchmark::{BenchmarkRequest, BenchmarkRunner, ChannelProgressSink};
    use serde_json::json;
    use std::sync::Arc;

    async fn plugin(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let expected = format!("Bearer {}", TEST_API_KEY);
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" })));
        }

        (StatusCode::OK, Json(json!({ "data": { "success": true, "return_value": body } })))
    }

    async fn broken() -> (StatusCode, Json<Value>) {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" })))
    }

    fn router() -> Router {
        Router::new()
            .route("/api/v1/plugins/example/call", post(plugin))
            .route("/api/v1/plugins/broken/call", post(broken))
    }

    #[tokio::test]
    async fn test_invoke_returns_raw_response() {
        let base_url = spawn(router()).await;
        let endpoint = Endpoint::new(base_url, TEST_API_KEY);

        let response =
            PluginInvoker::new().invoke(&endpoint, "example", &json!({ "foo": 1 })).await.unwrap();

        assert_eq!(response["data"]["success"], json!(true));
        assert_eq!(response["data"]["return_value"], json!({ "params": { "foo": 1 } }));
    }

    #[tokio::test]
    async fn test_http_failures_become_invocation_failures() {
        let base_url = spawn(router()).await;

        let wrong_key = Endpoint::new(base_url.clone(), "not-the-key");
        let failure =
            PluginInvoker::new().invoke(&wrong_key, "example", &json!({})).await.unwrap_err();
        assert!(failure.describe().contains("401"), "{}", failure.describe());

        let endpoint = Endpoint::new(base_url, TEST_API_KEY);
        let failure = PluginInvoker::new().invoke(&endpoint, "broken", &json!({})).await.unwrap_err();
        assert!(failure.describe().contains("500"), "{}", failure.describe());
    }

    #[tokio::test]
    async fn test_unreachable_relayer_is_a_failure() {
        let endpoint = Endpoint::new("http://127.0.0.1:1", TEST_API_KEY);

        let failure = PluginInvoker::new().invoke(&endpoint, "example", &json!({})).await.unwrap_err();

        assert!(!failure.describe().is_empty());
    }

    #[tokio::test]
    async fn test_benchmark_against_mock_relayer() {
        let base_url = spawn(router()).await;
        let runner = BenchmarkRunner::new(Arc::new(PluginInvoker::new()));
        let (sink, mut events) = ChannelProgressSink::channel();

        let request = BenchmarkRequest::new(
            Endpoint::new(base_url, TEST_API_KEY),
            "example",
            json!({ "foo": "bar" }),
            3,
            0.03,
        );
        let handle = runner.start(request, Arc::new(sink)).unwrap();
        let report = handle.wait().await.unwrap();

        assert_eq!(report.summary.total_calls, 3);
        assert_eq!(report.summary.successful_calls, 3);
        assert_eq!(report.summary.success_rate_percent, 100.0);
        assert!(report.outcomes.iter().all(|o| o.response.is_some()));

        let mut received = 0;
        while events.try_recv().is_ok() {
            received += 1;
        }
        assert_eq!(received, 4);
    }
}
