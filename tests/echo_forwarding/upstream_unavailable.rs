//! tests/echo_forwarding/upstream_unavailable.rs
//! Ensures outbound failures surface as a bare 500 with no payload.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn returns_500_when_the_upstream_answers_with_an_error_status() {
    let mock_server: MockServer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/post"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let base_url: String = common::spawn_app(&format!("{}/post", mock_server.uri()));

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    // The fault is opaque: a generic server error, no upstream body leaks.
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "");
}

#[tokio::test]
async fn returns_500_when_the_upstream_is_unreachable() {
    let base_url: String = common::spawn_app(&common::unreachable_endpoint());

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "");
}
