//! HTTP adapters over the catalog store. Each handler performs exactly one
//! store call; the store is the only state behind the router.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use folio_http::error::AppError;

use super::models::{Book, BookId, CreateBook, UpdateBook};
use super::store::{BookStore, StoreError};

const NOT_FOUND_MESSAGE: &str = "Book not found";

/// Build the books router over a shared store handle.
pub fn router(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/health", get(health_check))
        .route("/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(store)
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::not_found(NOT_FOUND_MESSAGE),
        }
    }
}

/// Parse a path segment into a book id. A non-numeric id is indistinguishable
/// from an unknown numeric one: both surface as the standard 404.
fn parse_id(raw: &str) -> Result<BookId, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))
}

async fn list_books(State(store): State<Arc<BookStore>>) -> Json<Vec<Book>> {
    Json(store.list())
}

async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(store.get(id)?))
}

async fn create_book(
    State(store): State<Arc<BookStore>>,
    Json(fields): Json<CreateBook>,
) -> (StatusCode, Json<Book>) {
    let book = store.create(fields);
    tracing::info!(id = book.id, "book created");
    (StatusCode::CREATED, Json(book))
}

async fn update_book(
    State(store): State<Arc<BookStore>>,
    Path(raw_id): Path<String>,
    Json(patch): Json<UpdateBook>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(store.update(id, patch)?))
}

async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&raw_id)?;
    let book = store.delete(id)?;
    tracing::info!(id = book.id, "book deleted");
    Ok(Json(book))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}
