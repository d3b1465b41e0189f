//! Router-level tests for admin sessions.
//!
//! Drives the full `Router` with `oneshot` against a `MemoryStore`, so no
//! network or database is needed.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Request, Response, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use chrono::Utc;
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

use wanderlust_admin::{
    config::AdminConfig,
    db::MemoryStore,
    models::{Category, Destination, TourPackage},
    services::hash_password,
    state::AppState,
};
use wanderlust_core::{
    AdminId, CategoryId, CurrencyCode, DestinationId, Email, PackageId, PackageStatus, Price,
};

const PROTECTED_PAGES: [&str; 6] = [
    "/admin",
    "/admin/packages",
    "/admin/destinations",
    "/admin/categories",
    "/admin/gallery",
    "/admin/inquiries",
];

const PROTECTED_API: [&str; 6] = [
    "/api/admin/me",
    "/api/admin/packages",
    "/api/admin/destinations",
    "/api/admin/categories",
    "/api/admin/gallery",
    "/api/admin/inquiries",
];

// =============================================================================
// Harness
// =============================================================================

fn config(base_url: &str, lookup_timeout: Duration) -> AdminConfig {
    AdminConfig {
        database_url: SecretString::from("postgres://localhost/unused"),
        host: "127.0.0.1".parse().unwrap(),
        port: 3001,
        base_url: Url::parse(base_url).unwrap(),
        session_lookup_timeout: lookup_timeout,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
        tls: None,
    }
}

fn app_with(store: &MemoryStore, config: AdminConfig) -> Router {
    let state = AppState::with_stores(config, Arc::new(store.clone()), Arc::new(store.clone()));
    wanderlust_admin::router(state)
}

fn app(store: &MemoryStore) -> Router {
    app_with(
        store,
        config("http://localhost:3001", Duration::from_secs(2)),
    )
}

/// Store holding the admin `a@x.com` / `secret` plus a little content.
async fn seeded_store() -> (MemoryStore, AdminId) {
    let store = MemoryStore::new();
    let hash = hash_password("secret").unwrap();
    let admin = store
        .insert_admin(Email::parse("a@x.com").unwrap(), "Ayu", &hash)
        .await;

    let destination = Destination {
        id: DestinationId::generate(),
        name: "Bali".to_string(),
        country: "Indonesia".to_string(),
        description: Some("Island of the gods".to_string()),
        image_url: None,
        created_at: Utc::now(),
    };
    let category = Category {
        id: CategoryId::generate(),
        name: "Beach".to_string(),
        slug: "beach".to_string(),
        created_at: Utc::now(),
    };
    store
        .add_package(TourPackage {
            id: PackageId::generate(),
            title: "Ubud Retreat".to_string(),
            slug: "ubud-retreat".to_string(),
            destination_id: destination.id,
            destination_name: destination.name.clone(),
            category_id: category.id,
            category_name: category.name.clone(),
            price: Price::new(Decimal::new(125_000, 2), CurrencyCode::USD),
            duration_days: 5,
            status: PackageStatus::Published,
            created_at: Utc::now(),
        })
        .await;
    store.add_destination(destination).await;
    store.add_category(category).await;

    (store, admin.id)
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(path: &str, body: &'static str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}

/// `name=value` part of a `Set-Cookie` header.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().trim().to_string()
}

fn assert_redirects_to_login(response: &Response<Body>) {
    assert!(
        response.status().is_redirection(),
        "expected redirect, got {}",
        response.status()
    );
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/admin/login");
}

async fn assert_unauthorized_json(response: Response<Body>) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
}

async fn login(app: &Router, email: &str, password: &str) -> Response<Body> {
    app.clone()
        .oneshot(post_json(
            "/api/admin/auth/login",
            &json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

async fn login_cookie(app: &Router) -> String {
    let response = login(app, "a@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::OK);
    cookie_pair(&set_cookie(&response).unwrap())
}

// =============================================================================
// Edge gate
// =============================================================================

#[tokio::test]
async fn test_protected_pages_without_cookie_redirect() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    for path in PROTECTED_PAGES {
        let response = app.clone().oneshot(get(path, None)).await.unwrap();
        assert_redirects_to_login(&response);
    }
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_unknown_admin_path_without_cookie_redirects() {
    let (store, _) = seeded_store().await;
    let response = app(&store)
        .oneshot(get("/admin/does-not-exist", None))
        .await
        .unwrap();
    assert_redirects_to_login(&response);
}

#[tokio::test]
async fn test_edge_gate_only_checks_presence() {
    let (store, _) = seeded_store().await;
    let forged = format!("admin_session={}", AdminId::generate());

    // Unrouted, so only the edge gate runs.
    let response = app(&store)
        .oneshot(get("/admin/does-not-exist", Some(forged.as_str())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_lookalike_prefix_is_not_protected() {
    let (store, _) = seeded_store().await;
    let response = app(&store)
        .oneshot(get("/administrator", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_redirects_to_admin() {
    let (store, _) = seeded_store().await;
    let response = app(&store).oneshot(get("/", None)).await.unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/admin");
}

// =============================================================================
// Login page
// =============================================================================

#[tokio::test]
async fn test_login_page_renders_in_every_cookie_state() {
    let (store, _) = seeded_store().await;
    let app = app(&store);
    let valid = login_cookie(&app).await;
    let forged = format!("admin_session={}", AdminId::generate());

    for cookie in [None, Some("admin_session=garbage"), Some(forged.as_str()), Some(valid.as_str())] {
        let response = app.clone().oneshot(get("/admin/login", cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "cookie: {cookie:?}");
        assert!(body_text(response).await.contains("Sign in"));
    }
}

#[tokio::test]
async fn test_login_page_skips_store_lookup() {
    let (store, _) = seeded_store().await;
    let forged = format!("admin_session={}", AdminId::generate());

    let response = app(&store)
        .oneshot(get("/admin/login", Some(forged.as_str())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_client_supplied_marker_does_not_bypass_layout_gate() {
    let (store, _) = seeded_store().await;
    let forged = format!("admin_session={}", AdminId::generate());

    let request = Request::builder()
        .method("GET")
        .uri("/admin/packages")
        .header(COOKIE, &forged)
        .header("x-admin-login-page", "1")
        .header("x-login-page", "true")
        .body(Body::empty())
        .unwrap();

    let response = app(&store).oneshot(request).await.unwrap();
    assert_redirects_to_login(&response);
}

// =============================================================================
// Layout gate and API guard
// =============================================================================

#[tokio::test]
async fn test_forged_cookie_rejected_everywhere() {
    let (store, _) = seeded_store().await;
    let app = app(&store);
    let forged = format!("admin_session={}", AdminId::generate());

    for path in PROTECTED_PAGES {
        let response = app.clone().oneshot(get(path, Some(forged.as_str()))).await.unwrap();
        assert_redirects_to_login(&response);
    }
    for path in PROTECTED_API {
        let response = app.clone().oneshot(get(path, Some(forged.as_str()))).await.unwrap();
        assert_unauthorized_json(response).await;
    }
}

#[tokio::test]
async fn test_malformed_cookie_rejected() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    for cookie in ["admin_session=", "admin_session=1", "admin_session=' OR 1=1 --"] {
        let response = app.clone().oneshot(get("/admin/packages", Some(cookie))).await.unwrap();
        assert_redirects_to_login(&response);

        let response = app.clone().oneshot(get("/api/admin/me", Some(cookie))).await.unwrap();
        assert_unauthorized_json(response).await;
    }
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_api_without_cookie_is_401() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    for path in PROTECTED_API {
        let response = app.clone().oneshot(get(path, None)).await.unwrap();
        assert_unauthorized_json(response).await;
    }
}

#[tokio::test]
async fn test_valid_session_reaches_pages_and_api() {
    let (store, admin_id) = seeded_store().await;
    let app = app(&store);
    let cookie = login_cookie(&app).await;

    for path in PROTECTED_PAGES {
        let response = app.clone().oneshot(get(path, Some(cookie.as_str()))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path: {path}");
    }

    let response = app.clone().oneshot(get("/admin/packages", Some(cookie.as_str()))).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Ubud Retreat"));
    assert!(html.contains("$1250.00"));
    assert!(html.contains("Ayu"));

    let response = app.clone().oneshot(get("/api/admin/me", Some(cookie.as_str()))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "id": admin_id.to_string(), "email": "a@x.com", "name": "Ayu" })
    );

    let response = app.clone().oneshot(get("/api/admin/packages", Some(cookie.as_str()))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let packages = body_json(response).await;
    assert_eq!(packages.as_array().unwrap().len(), 1);
    assert_eq!(packages[0]["slug"], "ubud-retreat");
}

#[tokio::test]
async fn test_unknown_api_route_is_json_404() {
    let (store, _) = seeded_store().await;
    let response = app(&store)
        .oneshot(get("/api/admin/nope", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
}

// =============================================================================
// Login API
// =============================================================================

#[tokio::test]
async fn test_login_issues_cookie_and_returns_public_fields() {
    let (store, admin_id) = seeded_store().await;
    let response = login(&app(&store), "A@X.com", "secret").await;

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response).unwrap();
    assert_eq!(cookie_pair(&cookie), format!("admin_session={admin_id}"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(cookie.contains("Path=/"));
    assert!(!cookie.contains("Secure"));

    let body = body_text(response).await;
    assert!(!body.contains("argon2"));
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "admin": { "id": admin_id.to_string(), "email": "a@x.com", "name": "Ayu" }
        })
    );
}

#[tokio::test]
async fn test_cookie_is_secure_over_https() {
    let (store, _) = seeded_store().await;
    let app = app_with(
        &store,
        config("https://admin.wanderlust.travel", Duration::from_secs(2)),
    );

    let response = login(&app, "a@x.com", "secret").await;
    assert!(set_cookie(&response).unwrap().contains("Secure"));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    let wrong_password = login(&app, "a@x.com", "wrong").await;
    let unknown_email = login(&app, "nobody@x.com", "secret").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&wrong_password).is_none());
    assert!(set_cookie(&unknown_email).is_none());
    assert_eq!(body_json(wrong_password).await, body_json(unknown_email).await);
}

#[tokio::test]
async fn test_missing_credentials_are_400() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    for body in [
        json!({ "email": "", "password": "secret" }),
        json!({ "email": "   ", "password": "secret" }),
        json!({ "email": "a@x.com", "password": "" }),
        json!({ "email": "a@x.com" }),
        json!({}),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/api/admin/auth/login", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let garbage = Request::builder()
        .method("POST")
        .uri("/api/admin/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(garbage).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_login_with_store_down_is_503() {
    let (store, _) = seeded_store().await;
    store.set_unavailable(true);

    let response = login(&app(&store), "a@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(set_cookie(&response).is_none());
    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().contains("memory store"));
}

// =============================================================================
// Logout
// =============================================================================

#[tokio::test]
async fn test_logout_api_deletes_cookie() {
    let (store, _) = seeded_store().await;
    let app = app(&store);
    let cookie = login_cookie(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/auth/logout")
        .header(COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let removal = set_cookie(&response).unwrap();
    assert!(removal.starts_with("admin_session="));
    assert!(removal.contains("Max-Age=0"));
    assert_eq!(body_json(response).await, json!({ "success": true }));

    // A client that honours the removal has no cookie left.
    let response = app.clone().oneshot(get("/admin/packages", None)).await.unwrap();
    assert_redirects_to_login(&response);
    let response = app.clone().oneshot(get("/api/admin/me", None)).await.unwrap();
    assert_unauthorized_json(response).await;
}

#[tokio::test]
async fn test_logout_without_cookie_is_fine() {
    let (store, _) = seeded_store().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/auth/logout")
        .body(Body::empty())
        .unwrap();

    let response = app(&store).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Form login
// =============================================================================

#[tokio::test]
async fn test_form_login_redirects_to_dashboard() {
    let (store, admin_id) = seeded_store().await;
    let response = app(&store)
        .oneshot(post_form("/admin/login", "email=a%40x.com&password=secret", None))
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/admin");
    assert_eq!(
        cookie_pair(&set_cookie(&response).unwrap()),
        format!("admin_session={admin_id}")
    );
}

#[tokio::test]
async fn test_form_login_failure_rerenders_with_generic_error() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    let wrong = app
        .clone()
        .oneshot(post_form("/admin/login", "email=a%40x.com&password=nope", None))
        .await
        .unwrap();
    let unknown = app
        .clone()
        .oneshot(post_form("/admin/login", "email=z%40x.com&password=nope", None))
        .await
        .unwrap();

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&wrong).is_none());
    assert!(body_text(wrong).await.contains("Invalid email or password"));
    assert!(body_text(unknown).await.contains("Invalid email or password"));
}

#[tokio::test]
async fn test_form_logout_redirects_to_login() {
    let (store, _) = seeded_store().await;
    let app = app(&store);
    let cookie = login_cookie(&app).await;

    let response = app
        .clone()
        .oneshot(post_form("/admin/logout", "", Some(cookie.as_str())))
        .await
        .unwrap();

    assert_redirects_to_login(&response);
    assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
}

// =============================================================================
// Failure modes
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_slow_store_fails_closed() {
    let (store, _) = seeded_store().await;
    let app = app_with(
        &store,
        config("http://localhost:3001", Duration::from_millis(50)),
    );
    let cookie = login_cookie(&app).await;

    store.set_latency(Some(Duration::from_secs(10))).await;

    let response = app.clone().oneshot(get("/admin/packages", Some(cookie.as_str()))).await.unwrap();
    assert_redirects_to_login(&response);

    let response = app.clone().oneshot(get("/api/admin/me", Some(cookie.as_str()))).await.unwrap();
    assert_unauthorized_json(response).await;
}

#[tokio::test]
async fn test_store_outage_fails_closed() {
    let (store, _) = seeded_store().await;
    let app = app(&store);
    let cookie = login_cookie(&app).await;

    store.set_unavailable(true);

    let response = app.clone().oneshot(get("/admin", Some(cookie.as_str()))).await.unwrap();
    assert_redirects_to_login(&response);

    let response = app.clone().oneshot(get("/api/admin/packages", Some(cookie.as_str()))).await.unwrap();
    assert_unauthorized_json(response).await;
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[tokio::test]
async fn test_deleting_admin_ends_session() {
    let (store, admin_id) = seeded_store().await;
    let app = app(&store);

    let response = login(&app, "a@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = cookie_pair(&set_cookie(&response).unwrap());
    assert_eq!(body_json(response).await["admin"]["name"], "Ayu");

    let response = app.clone().oneshot(get("/admin/packages", Some(cookie.as_str()))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(store.remove_admin(admin_id).await);

    let response = app.clone().oneshot(get("/admin/packages", Some(cookie.as_str()))).await.unwrap();
    assert_redirects_to_login(&response);
}

// =============================================================================
// Ambient
// =============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    let response = app.clone().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    let response = app.clone().oneshot(get("/health/ready", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    store.set_unavailable(true);
    let response = app.clone().oneshot(get("/health/ready", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let (store, _) = seeded_store().await;
    let app = app(&store);

    for path in ["/health", "/admin/login", "/admin/packages", "/api/admin/me"] {
        let response = app.clone().oneshot(get(path, None)).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY", "path: {path}");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
        assert_eq!(headers.get("cache-control").unwrap(), "no-store");
        assert!(headers.get("content-security-policy").is_some());
    }
}
