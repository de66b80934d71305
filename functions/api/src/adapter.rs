use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::Error;
use tracing::{error, info, warn};

use crate::error::AdapterError;
use crate::event::{InvocationEvent, InvocationResult};
use crate::request::NormalizedRequest;
use crate::response::ResponseSink;

/// Routing prefix the host prepends to every function path.
pub const DEFAULT_ROUTE_PREFIX: &str = "/.netlify/functions/api";

/// The wrapped application's entry point. The adapter invokes it once per
/// event and reads the sink back after it returns; an `Err` becomes a
/// generic 500 result.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn call(&self, req: NormalizedRequest, res: &mut ResponseSink) -> Result<(), Error>;
}

/// Translates one platform invocation into one handler call.
///
/// Holds only immutable configuration; every invocation gets its own
/// request, sink, and result, so concurrent invocations never share state.
pub struct EventAdapter {
    route_prefix: String,
    handler: Option<Arc<dyn RequestHandler>>,
}

impl EventAdapter {
    pub fn new(handler: Arc<dyn RequestHandler>) -> Self {
        Self {
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            handler: Some(handler),
        }
    }

    /// Adapter with no handler wired; every invocation answers 501.
    pub fn stub() -> Self {
        Self {
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            handler: None,
        }
    }

    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    /// Never fails: every internal failure is converted into a well-formed
    /// result so the host never sees a fault of its own.
    pub async fn handle(&self, event: InvocationEvent) -> InvocationResult {
        match self.dispatch(event).await {
            Ok(result) => result,
            Err(err) => {
                match &err {
                    AdapterError::MalformedBody { content_type } => {
                        warn!(%content_type, "rejecting unparseable request body");
                    }
                    AdapterError::HandlerFault(detail) => {
                        // Logged server-side only; the response stays generic.
                        error!(%detail, "handler failed");
                    }
                    AdapterError::Unimplemented { path, method } => {
                        info!(%path, %method, "no handler configured, answering 501");
                    }
                }
                err.into_result()
            }
        }
    }

    async fn dispatch(&self, event: InvocationEvent) -> Result<InvocationResult, AdapterError> {
        let request = NormalizedRequest::from_event(event, &self.route_prefix)?;

        let handler = match &self.handler {
            Some(handler) => Arc::clone(handler),
            None => {
                return Err(AdapterError::Unimplemented {
                    path: request.path,
                    method: request.method,
                })
            }
        };

        info!(method = %request.method, path = %request.path, "dispatching");

        let mut sink = ResponseSink::new();
        handler
            .call(request, &mut sink)
            .await
            .map_err(|err| AdapterError::HandlerFault(err.to_string()))?;

        Ok(sink.into_result())
    }
}
