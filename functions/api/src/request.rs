use std::collections::HashMap;

use serde_json::Value;

use crate::error::AdapterError;
use crate::event::InvocationEvent;

/// Request body after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Raw text, kept verbatim when no structured content type is declared.
    Text(String),
    /// Parsed structure when the content type declared JSON.
    Json(Value),
}

impl RequestBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestBody::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

/// Platform event reshaped into what a framework-style handler expects:
/// routing prefix stripped, header keys lowercased, body parsed, query
/// defaulted.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: RequestBody,
    pub query: HashMap<String, String>,
}

impl NormalizedRequest {
    pub fn from_event(
        event: InvocationEvent,
        route_prefix: &str,
    ) -> Result<Self, AdapterError> {
        let path = strip_route_prefix(&event.path, route_prefix);
        let headers: HashMap<String, String> = event
            .headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        let body = parse_body(event.body, headers.get("content-type").map(String::as_str))?;

        Ok(Self {
            method: event.http_method,
            path,
            headers,
            body,
            query: event.query_string_parameters.unwrap_or_default(),
        })
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Strip the host's fixed routing prefix. Idempotent: a path that no longer
/// starts with the prefix passes through untouched. An empty remainder
/// becomes `/`.
pub fn strip_route_prefix(path: &str, prefix: &str) -> String {
    let rest = path.strip_prefix(prefix).unwrap_or(path);
    if rest.is_empty() {
        "/".to_string()
    } else {
        rest.to_string()
    }
}

fn parse_body(
    body: Option<String>,
    content_type: Option<&str>,
) -> Result<RequestBody, AdapterError> {
    let raw = match body {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(RequestBody::Empty),
    };

    if declares_json(content_type) {
        let value: Value = serde_json::from_str(&raw).map_err(|_| {
            AdapterError::MalformedBody {
                content_type: "application/json".to_string(),
            }
        })?;
        return Ok(RequestBody::Json(value));
    }

    Ok(RequestBody::Text(raw))
}

fn declares_json(content_type: Option<&str>) -> bool {
    // Parameters like "; charset=utf-8" don't change the essence type.
    content_type
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim();
            essence.eq_ignore_ascii_case("application/json")
                || essence.to_ascii_lowercase().ends_with("+json")
        })
        .unwrap_or(false)
}
