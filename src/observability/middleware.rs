//! Request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

/// Wraps every route, including the scrape route and the not-found
/// fallback: start the timer, run the rest of the stack, then record the
/// latency observation and increment the request counter with the final
/// status code. Runs its bookkeeping on error responses too, since typed
/// handler failures have already been turned into responses by this point.
///
/// The `endpoint` label is the matched route template (`/books/{id}`), so
/// path parameters never fan out into new label values. Only requests that
/// matched no route at all fall back to the raw path.
pub async fn track_requests(
    State(state): State<AppState>,
    matched_path: Option<MatchedPath>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = matched_path
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;

    state.metrics.record_request(
        &method,
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
