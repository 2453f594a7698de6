#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use pos_server::{AppState, DbService, api};
use serde_json::Value;
use tower::ServiceExt;

pub const SEAT_COUNT: i64 = 10;

/// Fresh in-memory database with the schema and ten free seats
pub async fn test_db() -> DbService {
    let db = DbService::connect_url("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();

    for statement in include_str!("../../schema/sqlite.sql").split(';') {
        if statement
            .lines()
            .all(|l| l.trim().is_empty() || l.trim_start().starts_with("--"))
        {
            continue;
        }
        sqlx::query(statement).execute(&db.pool).await.unwrap();
    }
    for id in 1..=SEAT_COUNT {
        sqlx::query("INSERT INTO seat (seat_id) VALUES (?)")
            .bind(id)
            .execute(&db.pool)
            .await
            .unwrap();
    }
    db
}

/// Router over [`test_db`]
pub async fn test_app() -> Router {
    api::create_router(AppState::new(&test_db().await))
}

/// Send one request and decode the JSON body (`Null` when empty or not JSON)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, body).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
