//! Instrumented book handlers.
//!
//! # Responsibilities
//! - One trace span per logical operation, named for the operation
//! - `book.id` recorded before the store call, so it survives failures
//! - Simulated backend delay awaited inside the span
//! - `error` / `error.message` recorded before a NotFound leaves the span
//!
//! The span closes on drop on every exit path; the metrics middleware picks
//! up the final status independently of anything done here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::time::sleep;
use tracing::{field::Empty, info_span, Instrument, Span};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::simulation::StoreOp;
use crate::store::{Book, BookDraft, BookPatch, StoreError};

fn record_failure(err: &StoreError) {
    let span = Span::current();
    span.record("error", true);
    span.record("error.message", err.to_string().as_str());
}

/// GET /books. No dedicated span; the list operation only carries the
/// simulated delay and the middleware metrics.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    sleep(state.delay.sample(StoreOp::List)).await;
    Json(state.store.list())
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
) -> Result<Json<Book>, ApiError> {
    let span = info_span!(
        "get_book_by_id",
        book.id = book_id,
        book.title = Empty,
        error = Empty,
        error.message = Empty,
    );
    async move {
        sleep(state.delay.sample(StoreOp::Get)).await;
        match state.store.get(book_id) {
            Ok(book) => {
                Span::current().record("book.title", book.title.as_str());
                Ok(Json(book))
            }
            Err(err) => {
                record_failure(&err);
                Err(err.into())
            }
        }
    }
    .instrument(span)
    .await
}

/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> (StatusCode, Json<Book>) {
    let span = info_span!("create_book", book.id = Empty, book.title = Empty);
    async move {
        sleep(state.delay.sample(StoreOp::Create)).await;
        let book = state.store.create(draft);

        let span = Span::current();
        span.record("book.id", book.id);
        span.record("book.title", book.title.as_str());
        tracing::debug!(book.id = book.id, "Book created");

        (StatusCode::CREATED, Json(book))
    }
    .instrument(span)
    .await
}

/// PUT /books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>, ApiError> {
    let span = info_span!(
        "update_book",
        book.id = book_id,
        book.title = Empty,
        error = Empty,
        error.message = Empty,
    );
    async move {
        sleep(state.delay.sample(StoreOp::Update)).await;
        match state.store.update(book_id, patch) {
            Ok(book) => {
                Span::current().record("book.title", book.title.as_str());
                Ok(Json(book))
            }
            Err(err) => {
                record_failure(&err);
                Err(err.into())
            }
        }
    }
    .instrument(span)
    .await
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let span = info_span!(
        "delete_book",
        book.id = book_id,
        error = Empty,
        error.message = Empty,
    );
    async move {
        sleep(state.delay.sample(StoreOp::Delete)).await;
        match state.store.delete(book_id) {
            Ok(()) => Ok(StatusCode::NO_CONTENT),
            Err(err) => {
                record_failure(&err);
                Err(err.into())
            }
        }
    }
    .instrument(span)
    .await
}
