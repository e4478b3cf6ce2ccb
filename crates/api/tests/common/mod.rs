//! Shared harness for the HTTP integration tests.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`,
//! without binding a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use dvdrental_api::config::ServerConfig;
use dvdrental_api::router::build_app_router;
use dvdrental_api::state::AppState;
use dvdrental_db::models::customer::{CreateCustomer, Customer};
use dvdrental_db::models::film::{CreateFilm, Film};
use dvdrental_db::models::inventory::CreateInventoryItem;
use dvdrental_db::models::staff::{CreateStaff, Staff};
use dvdrental_db::repositories::{CustomerRepo, FilmRepo, InventoryRepo, StaffRepo};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Server configuration for tests. The database URL is unused because the
/// pool comes from `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// The production router, middleware included, over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a body verbatim, for payloads that are not valid JSON.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn customer(pool: &PgPool, first_name: &str, last_name: &str) -> Customer {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: Some(format!("{}.{}@example.com", first_name, last_name).to_lowercase()),
            is_active: None,
        },
    )
    .await
    .unwrap()
}

pub async fn staff(pool: &PgPool, first_name: &str, username: &str) -> Staff {
    StaffRepo::create(
        pool,
        &CreateStaff {
            first_name: first_name.to_string(),
            last_name: "Hillyer".to_string(),
            email: None,
            username: username.to_string(),
            is_active: None,
        },
    )
    .await
    .unwrap()
}

/// A film with `copies` inventory items.
pub async fn film_with_copies(pool: &PgPool, title: &str, rate: Decimal, copies: usize) -> Film {
    let film = FilmRepo::create(
        pool,
        &CreateFilm {
            title: title.to_string(),
            description: None,
            release_year: Some(2006),
            rental_duration: Some(3),
            rental_rate: Some(rate),
            length_minutes: None,
            replacement_cost: None,
            rating: None,
        },
    )
    .await
    .unwrap();

    for _ in 0..copies {
        InventoryRepo::create(
            pool,
            &CreateInventoryItem {
                film_id: film.id,
                store_id: None,
            },
        )
        .await
        .unwrap();
    }
    film
}

pub fn rental_body(customer_id: i64, film_id: i64, staff_id: i64) -> serde_json::Value {
    serde_json::json!({
        "customer_id": customer_id,
        "film_id": film_id,
        "staff_id": staff_id,
        "days": 3,
    })
}
