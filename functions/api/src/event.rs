use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Inbound platform event, exactly as the host delivers it.
///
/// Platforms attach extra fields (request context, base64 flags); those are
/// ignored rather than rejected. Optional fields take their defaults when
/// absent from the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    pub path: String,
    pub http_method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

/// Platform-facing output, produced exactly once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_full_event() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "path": "/.netlify/functions/api/widgets",
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "body": "{\"name\":\"sprocket\"}",
            "queryStringParameters": {"page": "2"}
        }))
        .unwrap();

        assert_eq!(event.path, "/.netlify/functions/api/widgets");
        assert_eq!(event.http_method, "POST");
        assert_eq!(event.headers["Content-Type"], "application/json");
        assert_eq!(event.body.as_deref(), Some("{\"name\":\"sprocket\"}"));
        assert_eq!(event.query_string_parameters.unwrap()["page"], "2");
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "path": "/",
            "httpMethod": "GET"
        }))
        .unwrap();

        assert!(event.headers.is_empty());
        assert!(event.body.is_none());
        assert!(event.query_string_parameters.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "path": "/",
            "httpMethod": "GET",
            "isBase64Encoded": false,
            "requestContext": {"stage": "prod"}
        }))
        .unwrap();

        assert_eq!(event.http_method, "GET");
    }
}
