use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `data` payload of a plugin call response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PluginCallResult {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    /// Whatever the plugin returned; relayers usually send it JSON-encoded.
    #[serde(default)]
    pub return_value: Option<Value>,

    #[serde(default)]
    pub logs: Vec<PluginLog>,

    #[serde(default)]
    pub traces: Vec<PluginTrace>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginLog {
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginTrace {
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub payload: Value,

    #[serde(default)]
    pub relayer_id: Option<String>,

    #[serde(default)]
    pub request_id: Option<String>,
}

impl PluginCallResult {
    /// The error text if the plugin reported one.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_result() {
        let result: PluginCallResult = serde_json::from_str(
            r#"{
                "success": true,
                "message": "Plugin called successfully",
                "error": "",
                "return_value": "{\"ok\":true}",
                "logs": [{ "level": "info", "message": "hello" }],
                "traces": [{
                    "method": "sendTransaction",
                    "payload": { "to": "0x0" },
                    "relayer_id": "sepolia-example",
                    "request_id": "req-1"
                }]
            }"#,
        )
        .unwrap();

        assert!(result.success);
        assert_eq!(result.error_message(), None);
        assert_eq!(result.logs.len(), 1);
        assert_eq!(result.traces[0].method.as_deref(), Some("sendTransaction"));
    }

    #[test]
    fn test_deserialize_sparse_error_result() {
        let result: PluginCallResult =
            serde_json::from_str(r#"{ "success": false, "error": "boom" }"#).unwrap();

        assert!(!result.success);
        assert_eq!(result.error_message(), Some("boom"));
        assert!(result.logs.is_empty());
        assert!(result.traces.is_empty());
    }
}
