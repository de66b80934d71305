use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::json;
use tracing::info;

use apifunction::adapter::{EventAdapter, RequestHandler};
use apifunction::event::{InvocationEvent, InvocationResult};
use apifunction::request::NormalizedRequest;
use apifunction::response::ResponseSink;

/// Minimal wrapped application. Real deployments swap this for their own
/// `RequestHandler` implementation; everything else stays the same.
struct EchoHandler;

#[async_trait]
impl RequestHandler for EchoHandler {
    async fn call(&self, req: NormalizedRequest, res: &mut ResponseSink) -> Result<(), Error> {
        match (req.method.as_str(), req.path.as_str()) {
            ("GET", "/health") => {
                res.json(json!({"status": "ok"}));
            }
            ("POST", "/echo") => {
                match req.body.as_json() {
                    Some(body) => res.status(200).json(body.clone()),
                    None => res.status(200).send(req.body.as_text().unwrap_or("")),
                };
            }
            _ => {
                res.status(404)
                    .json(json!({"error": "not found", "path": req.path}));
            }
        }
        Ok(())
    }
}

async fn invoke(
    adapter: Arc<EventAdapter>,
    event: LambdaEvent<InvocationEvent>,
) -> Result<InvocationResult, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "invocation received");
    Ok(adapter.handle(payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps its own timestamps.
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .init();

    let adapter = Arc::new(EventAdapter::new(Arc::new(EchoHandler)));

    lambda_runtime::run(service_fn(move |event| invoke(adapter.clone(), event))).await
}
