use std::collections::HashMap;

use serde_json::json;
use thiserror::Error;

use crate::event::InvocationResult;

/// Failures the adapter converts into structured results instead of
/// letting them reach the host's fault path.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Body present but not parseable as the declared content type.
    #[error("request body is not valid {content_type}")]
    MalformedBody { content_type: String },

    /// The wrapped handler returned an error. The detail is for logs only
    /// and never reaches the response.
    #[error("handler failed: {0}")]
    HandlerFault(String),

    /// No handler capability is configured.
    #[error("no handler registered for {method} {path}")]
    Unimplemented { path: String, method: String },
}

impl AdapterError {
    /// Map the failure to the HTTP-shaped result the caller sees.
    pub fn into_result(self) -> InvocationResult {
        match self {
            AdapterError::MalformedBody { content_type } => plain(
                400,
                json!({
                    "error": format!("request body is not valid {content_type}")
                }),
            ),
            AdapterError::HandlerFault(_) => {
                plain(500, json!({"error": "internal server error"}))
            }
            AdapterError::Unimplemented { path, method } => plain(
                501,
                json!({
                    "message": "no handler is configured for this function",
                    "path": path,
                    "method": method
                }),
            ),
        }
    }
}

fn plain(status_code: u16, body: serde_json::Value) -> InvocationResult {
    InvocationResult {
        status_code,
        headers: HashMap::new(),
        body: body.to_string(),
    }
}
