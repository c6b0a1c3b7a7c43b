//! Plain HTTP requests against the WebSocket route.

#![allow(clippy::panic)]

mod common;

use reqwest::StatusCode;
use tokio_test::assert_ok;

#[tokio::test]
async fn plain_get_is_rejected_without_registering() {
    let server = common::spawn_server().await;

    let response = assert_ok!(reqwest::get(server.http_url("/")).await);
    assert!(
        response.status().is_client_error(),
        "unexpected status {}",
        response.status()
    );
    assert!(server.registry.is_empty().await);
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let server = common::spawn_server().await;

    let response = assert_ok!(reqwest::get(server.http_url("/health")).await);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_verbs_are_not_allowed() {
    let server = common::spawn_server().await;

    let client = reqwest::Client::new();
    let response = assert_ok!(client.post(server.http_url("/")).send().await);
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn server_keeps_serving_after_rejection() {
    let server = common::spawn_server().await;

    let _ = assert_ok!(reqwest::get(server.http_url("/")).await);
    let connected = tokio_tungstenite::connect_async(server.ws_url()).await;
    assert!(connected.is_ok(), "websocket connect failed after rejection");
}
