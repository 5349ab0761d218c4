//! Request ID generation.
//!
//! Every inbound request gets a UUID v4 `x-request-id` header as early as
//! possible, and the same value is propagated onto the response so clients
//! can correlate logs and traces.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// UUID v4 request ID source for tower-http's set/propagate layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdMaker;

impl MakeRequestId for RequestIdMaker {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
