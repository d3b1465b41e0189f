//! End-to-end session tests against a running admin server.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (`wl-cli migrate`)
//! - The admin server running against the same database
//!
//! Run with: `cargo test -p wanderlust-integration-tests -- --ignored`

use reqwest::StatusCode;
use reqwest::header::{LOCATION, SET_COOKIE};
use serde_json::{Value, json};

use wanderlust_integration_tests::{TestContext, client};

const PASSWORD: &str = "correct horse battery";

fn location(resp: &reqwest::Response) -> Option<&str> {
    resp.headers().get(LOCATION).and_then(|v| v.to_str().ok())
}

// ============================================================================
// Full Lifecycle
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_session_ends_when_admin_is_deleted() {
    let ctx = TestContext::new().await.expect("Failed to connect to database");
    let admin = ctx
        .provision_admin("E2E Admin", PASSWORD)
        .await
        .expect("Failed to provision admin");
    let client = client().expect("Failed to create HTTP client");

    let resp = client
        .post(ctx.url("/api/admin/auth/login"))
        .json(&json!({ "email": admin.email.as_str(), "password": PASSWORD }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| v.starts_with("admin_session="))
    );
    let body: Value = resp.json().await.expect("Failed to parse login response");
    assert_eq!(body["success"], true);
    assert_eq!(body["admin"]["name"], "E2E Admin");

    let resp = client
        .get(ctx.url("/admin/packages"))
        .send()
        .await
        .expect("Failed to get packages");
    assert_eq!(resp.status(), StatusCode::OK);

    ctx.remove_admin(&admin).await.expect("Failed to remove admin");

    let resp = client
        .get(ctx.url("/admin/packages"))
        .send()
        .await
        .expect("Failed to get packages");
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), Some("/admin/login"));

    let resp = client
        .get(ctx.url("/api/admin/me"))
        .send()
        .await
        .expect("Failed to get me");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_logout_then_pages_redirect() {
    let ctx = TestContext::new().await.expect("Failed to connect to database");
    let admin = ctx
        .provision_admin("E2E Logout", PASSWORD)
        .await
        .expect("Failed to provision admin");
    let client = client().expect("Failed to create HTTP client");

    let resp = client
        .post(ctx.url("/admin/login"))
        .form(&[("email", admin.email.as_str()), ("password", PASSWORD)])
        .send()
        .await
        .expect("Failed to submit login form");
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), Some("/admin"));

    let resp = client
        .get(ctx.url("/admin"))
        .send()
        .await
        .expect("Failed to get dashboard");
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.expect("Failed to read dashboard");
    assert!(html.contains("E2E Logout"));

    let resp = client
        .post(ctx.url("/api/admin/auth/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(ctx.url("/admin"))
        .send()
        .await
        .expect("Failed to get dashboard");
    assert_eq!(location(&resp), Some("/admin/login"));

    ctx.remove_admin(&admin).await.expect("Failed to remove admin");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let ctx = TestContext::new().await.expect("Failed to connect to database");
    let admin = ctx
        .provision_admin("E2E Failures", PASSWORD)
        .await
        .expect("Failed to provision admin");
    let client = client().expect("Failed to create HTTP client");

    let mut bodies = Vec::new();
    for (email, password) in [
        (admin.email.as_str(), "not the password"),
        ("nobody@wanderlust.test", PASSWORD),
    ] {
        let resp = client
            .post(ctx.url("/api/admin/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to log in");
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().get(SET_COOKIE).is_none());
        bodies.push(resp.text().await.expect("Failed to read body"));
    }
    assert_eq!(bodies[0], bodies[1]);

    ctx.remove_admin(&admin).await.expect("Failed to remove admin");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unauthenticated_requests_are_turned_away() {
    let client = client().expect("Failed to create HTTP client");
    let base_url = wanderlust_integration_tests::admin_base_url();

    let resp = client
        .get(format!("{base_url}/admin/inquiries"))
        .send()
        .await
        .expect("Failed to get inquiries");
    assert_eq!(location(&resp), Some("/admin/login"));

    let resp = client
        .get(format!("{base_url}/admin/login"))
        .send()
        .await
        .expect("Failed to get login page");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/api/admin/packages"))
        .header("Cookie", format!("admin_session={}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to get packages");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_readiness_reports_database() {
    let client = client().expect("Failed to create HTTP client");
    let base_url = wanderlust_integration_tests::admin_base_url();

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}
