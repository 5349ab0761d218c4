//! CRUD flows over a running server.

use std::sync::Arc;

use bookly_api::simulation::NeverFault;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn banner_and_health_respond() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let banner: Value = client
        .get(app.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(banner["message"], "Welcome to Bookly API");
    assert_eq!(banner["version"], "1.0.0");

    let health = client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(health.status(), 200);
    let health: Value = health.json().await.unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["message"], "API is running smoothly");
}

#[tokio::test]
async fn seed_data_lists_three_books() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let books: Vec<Value> = client
        .get(app.url("/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["title"], "1984");
    assert_eq!(books[2]["author"], "F. Scott Fitzgerald");
}

#[tokio::test]
async fn get_existing_book_is_repeatable() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let first: Value = client
        .get(app.url("/books/2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(app.url("/books/2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first["title"], "To Kill a Mockingbird");
}

#[tokio::test]
async fn get_missing_book_is_404_with_detail() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let response = client.get(app.url("/books/999")).send().await.unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Book not found");
}

#[tokio::test]
async fn create_assigns_id_and_round_trips() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let payload = json!({
        "id": 77,
        "title": "Brave New World",
        "author": "Aldous Huxley",
        "publisher": "Chatto & Windus",
        "publisher_date": "1932-01-01",
        "page_count": 311,
        "language": "English",
    });

    let response = client
        .post(app.url("/books"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.unwrap();
    // The payload id is ignored; the store assigns max + 1.
    assert_eq!(created["id"], 4);
    assert_eq!(created["title"], "Brave New World");

    let fetched: Value = client
        .get(app.url("/books/4"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_merges_and_keeps_path_id() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let response = client
        .put(app.url("/books/1"))
        .json(&json!({ "id": 50, "title": "Nineteen Eighty-Four" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "Nineteen Eighty-Four");
    assert_eq!(updated["author"], "George Orwell");
    assert_eq!(updated["page_count"], 328);

    let missing = client.put(app.url("/books/999")).json(&json!({})).send().await.unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let response = client.delete(app.url("/books/3")).send().await.unwrap();
    assert_eq!(response.status(), 204);
    assert!(response.bytes().await.unwrap().is_empty());

    let gone = client.get(app.url("/books/3")).send().await.unwrap();
    assert_eq!(gone.status(), 404);

    let again = client.delete(app.url("/books/3")).send().await.unwrap();
    assert_eq!(again.status(), 404);
}

#[tokio::test]
async fn freed_max_id_is_reissued() {
    let app = common::spawn_app(Arc::new(NeverFault)).await;
    let client = reqwest::Client::new();

    let payload = json!({
        "title": "Transient",
        "author": "Nobody",
        "publisher": "Nowhere Press",
        "publisher_date": "2020-02-02",
        "page_count": 10,
        "language": "English",
    });

    let first: Value = client
        .post(app.url("/books"))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["id"], 4);

    let deleted = client.delete(app.url("/books/4")).send().await.unwrap();
    assert_eq!(deleted.status(), 204);

    // Deleting the current max frees its id for the next create.
    let second: Value = client
        .post(app.url("/books"))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["id"], 4);
}
