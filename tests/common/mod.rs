#![allow(dead_code)]

use std::net::IpAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use game_inventory::config::{Config, Environment};
use game_inventory::state::AppState;

const BOUNDARY: &str = "game-inventory-test-boundary";

/// A collected response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Numeric id at the end of the `Location` header (`/game/7` -> 7).
    pub fn redirect_id(&self) -> i32 {
        self.location
            .as_deref()
            .and_then(|l| l.rsplit('/').next())
            .and_then(|id| id.parse().ok())
            .unwrap_or_default()
    }
}

/// A file part for [`post_multipart`].
pub struct FilePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        server_host: IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        upload_dir: std::env::temp_dir().join("game-inventory-tests"),
        upload_max_bytes: 20 * 1024 * 1024,
    }
}

/// Full router over a fresh in-memory database, plus a handle on that database.
pub async fn test_app() -> (Router, DatabaseConnection) {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    game_inventory::db::migrate(&db).await.unwrap_or_default();

    let state = AppState::new(db.clone(), test_config());
    assert!(state.is_ok(), "templates failed to compile");
    let router = state
        .map(game_inventory::routes::app)
        .unwrap_or_default();

    (router, db)
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();

    TestResponse {
        status,
        location,
        body: String::from_utf8(body.to_vec()).unwrap_or_default(),
    }
}

/// Test helper: send a GET request to the app.
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

/// Test helper: POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, impl AsRef<str>)]) -> TestResponse {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap_or_default();
    send(app, request).await
}

/// Test helper: POST a `multipart/form-data` body with an optional `image` part.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<FilePart<'_>>,
) -> TestResponse {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap_or_default();
    send(app, request).await
}

// ─────────────────────────────────────────────────────────────────────────────
// Seeding through the HTTP surface
// ─────────────────────────────────────────────────────────────────────────────

pub async fn create_company(app: &Router, name: &str) -> i32 {
    let response = post_form(
        app,
        "/company/create",
        &[("name", name), ("location", "Kyoto"), ("founded", "1889-09-23")],
    )
    .await;
    assert_eq!(response.status, StatusCode::FOUND, "{}", response.body);
    response.redirect_id()
}

pub async fn create_genre(app: &Router, name: &str) -> i32 {
    let response = post_form(app, "/genre/create", &[("name", name)]).await;
    assert_eq!(response.status, StatusCode::FOUND, "{}", response.body);
    response.redirect_id()
}

pub async fn create_game(
    app: &Router,
    name: &str,
    company_id: i32,
    genre_ids: &[i32],
    platforms: &[i32],
) -> i32 {
    let fields = game_fields(name, company_id, genre_ids, platforms);
    let response = post_form(app, "/game/create", &fields[..]).await;
    assert_eq!(response.status, StatusCode::FOUND, "{}", response.body);
    response.redirect_id()
}

/// Game form fields with a valid price and stock.
pub fn game_fields(
    name: &str,
    company_id: i32,
    genre_ids: &[i32],
    platforms: &[i32],
) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", name.to_string()),
        ("price", "60".to_string()),
        ("copies", "12".to_string()),
        ("company", company_id.to_string()),
    ];
    fields.extend(genre_ids.iter().map(|id| ("genres", id.to_string())));
    fields.extend(platforms.iter().map(|id| ("platforms", id.to_string())));
    fields
}
