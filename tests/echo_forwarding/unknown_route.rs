//! tests/echo_forwarding/unknown_route.rs
//! Ensures that hitting an unknown route returns the framework's default 404.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    // The echo endpoint is irrelevant here; nothing should be forwarded.
    let base_url: String = common::spawn_app(&common::unreachable_endpoint());

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    // No custom fallback is installed, so axum answers with a bare 404.
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "");
}
