#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use fusion_client::{
    ClientConfig, ClientError, FusionApi, RelayHost, RequestDescriptor, TransportMode,
    TransportSelector,
};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn relayed(server: &MockServer) -> TransportSelector {
    let handle = RelayHost::spawn(&ClientConfig::new(server.uri())).expect("relay spawns");
    TransportSelector::relayed(handle)
}

#[tokio::test]
async fn test_relay_performs_call_and_keeps_big_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kol/get"))
        .and(query_param("name", "whale"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":3,"name":"whale","dc_channel_id":1234567890123456789,"dc_author_ids":[]}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let selector = relayed(&server);
    assert_eq!(selector.mode(), TransportMode::Relayed);

    let kols = FusionApi::new(selector).get_kols(Some("whale")).await.expect("relayed call");
    assert_eq!(kols.kols.len(), 1);
    assert_eq!(kols.kols[0].dc_channel_id.as_str(), "1234567890123456789");
}

#[tokio::test]
async fn test_relay_forwards_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kol/add"))
        .and(body_json(json!({
            "name": "whale",
            "kol_type": "WWG",
            "dc_channel_id": "1234567890123456789",
            "dc_author_ids": ["42"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success", "message": "added"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestDescriptor::post("/kol/add")
        .json(&json!({
            "name": "whale",
            "kol_type": "WWG",
            "dc_channel_id": "1234567890123456789",
            "dc_author_ids": ["42"]
        }))
        .expect("body encodes");
    let body = relayed(&server).send(&request).await.expect("relayed call");
    assert_eq!(body["message"], json!("added"));
}

#[tokio::test]
async fn test_relay_reports_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/remove"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "db locked"})))
        .mount(&server)
        .await;

    let err = relayed(&server)
        .send(&RequestDescriptor::delete("/user/remove").query("username", "alice"))
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, ClientError::Relay { .. }), "got {:?}", err);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some(&json!({"detail": "db locked"})));
    assert_eq!(err.message(), "request failed with status code 500");
}

#[tokio::test]
async fn test_relay_address_change_is_seen_by_later_calls() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/user/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": [], "total": 0})))
            .expect(1)
            .mount(server)
            .await;
    }

    let api = FusionApi::new(relayed(&first));
    api.get_users(None).await.expect("first server");

    api.set_base_url(&second.uri()).await.expect("relay acknowledges");
    assert_eq!(api.base_url().await.expect("relay answers"), second.uri());
    api.get_users(None).await.expect("second server");
}

#[tokio::test]
async fn test_relay_network_failure() {
    let handle = RelayHost::spawn(&ClientConfig::new("http://127.0.0.1:1")).expect("relay spawns");
    let err = TransportSelector::relayed(handle)
        .send(&RequestDescriptor::get("/user/get"))
        .await
        .expect_err("refused");

    assert!(matches!(err, ClientError::Relay { status: None, .. }), "got {:?}", err);
    assert!(!err.message().is_empty());
    assert!(!err.message().starts_with("Network error"), "got {:?}", err.message());
}

#[tokio::test]
async fn test_relay_runs_requests_concurrently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"users": [], "total": 0}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kol/get"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({"detail": "maintenance"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let api = FusionApi::new(relayed(&server));
    let started = Instant::now();
    let (users, kols) = tokio::join!(api.get_users(None), api.get_kols(None));
    let elapsed = started.elapsed();

    assert_eq!(users.expect("users resolve").total, 0);
    let err = kols.expect_err("kols fail on their own");
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.body(), Some(&json!({"detail": "maintenance"})));
    assert!(elapsed < Duration::from_millis(550), "relay serialized the calls: {:?}", elapsed);
}
