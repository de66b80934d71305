//! Runs an Express-style request handler inside a single-invocation
//! serverless host.
//!
//! The host hands each invocation to us as a JSON event (path, method,
//! headers, body, query). [`adapter::EventAdapter`] normalizes that event
//! into a [`request::NormalizedRequest`], drives the wrapped application's
//! handler against a mutable [`response::ResponseSink`], and reads the sink
//! back as the [`event::InvocationResult`] the host expects. Every failure
//! is converted into a well-formed result; nothing propagates into the
//! host's own fault path.

pub mod adapter;
pub mod error;
pub mod event;
pub mod request;
pub mod response;
