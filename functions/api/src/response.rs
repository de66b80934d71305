use std::collections::HashMap;

use serde_json::Value;

use crate::event::InvocationResult;

/// Mutable response accumulator handed to the wrapped handler.
///
/// Defaults to status 200, no headers, empty body. Setters return `&mut Self`
/// so handlers can chain them (`res.status(201).json(...)`). Exactly one
/// terminal write is expected; later writes overwrite earlier ones.
#[derive(Debug, Clone)]
pub struct ResponseSink {
    status: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl Default for ResponseSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink {
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn status(&mut self, code: u16) -> &mut Self {
        self.status = code;
        self
    }

    /// Serialize the payload into the body and declare it as JSON.
    pub fn json(&mut self, data: Value) -> &mut Self {
        self.headers
            .insert("content-type".to_string(), "application/json".to_string());
        self.body = data.to_string();
        self
    }

    /// Set the body verbatim for strings, serialized for anything else.
    pub fn send(&mut self, data: impl Into<Value>) -> &mut Self {
        self.body = match data.into() {
            Value::String(text) => text,
            other => other.to_string(),
        };
        self
    }

    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Read the final state back out as the platform result.
    pub fn into_result(self) -> InvocationResult {
        InvocationResult {
            status_code: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_200_empty_empty() {
        let result = ResponseSink::new().into_result();

        assert_eq!(result.status_code, 200);
        assert!(result.headers.is_empty());
        assert_eq!(result.body, "");
    }

    #[test]
    fn setters_chain() {
        let mut sink = ResponseSink::new();
        sink.status(201).json(json!({"id": 7}));
        let result = sink.into_result();

        assert_eq!(result.status_code, 201);
        assert_eq!(result.headers["content-type"], "application/json");
        assert_eq!(result.body, "{\"id\":7}");
    }

    #[test]
    fn last_write_wins() {
        let mut sink = ResponseSink::new();
        sink.status(404).send("nope");
        sink.status(200).json(json!({"ok": true}));
        let result = sink.into_result();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, "{\"ok\":true}");
    }

    #[test]
    fn send_keeps_strings_verbatim() {
        let mut sink = ResponseSink::new();
        sink.send("plain text");

        assert_eq!(sink.body(), "plain text");
        // No content type is implied for a raw send.
        assert!(sink.clone().into_result().headers.is_empty());
    }

    #[test]
    fn send_serializes_non_strings() {
        let mut sink = ResponseSink::new();
        sink.send(json!({"count": 2}));

        assert_eq!(sink.body(), "{\"count\":2}");
    }
}
