#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use std::time::Duration;

use fusion_client::{ClientConfig, ClientError, FusionApi, RequestDescriptor, TransportSelector};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn direct(server: &MockServer) -> TransportSelector {
    TransportSelector::direct(&ClientConfig::new(server.uri())).expect("client builds")
}

fn users_body() -> serde_json::Value {
    json!({
        "users": [{
            "id": 1,
            "username": "alice",
            "is_running": true,
            "followed_kols": [{"name": "whale", "is_active": true, "amount_mode": "FIXED"}]
        }],
        "total": 1
    })
}

#[tokio::test]
async fn test_not_found_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let err = direct(&server)
        .send(&RequestDescriptor::get("/user/get"))
        .await
        .expect_err("404 must fail");

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some(&json!({"message": "not found"})));
    assert_eq!(err.message(), "request failed with status code 404");
}

#[tokio::test]
async fn test_error_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/run"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = direct(&server)
        .send(&RequestDescriptor::post("/user/run").query("username", "alice"))
        .await
        .expect_err("500 must fail");

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), None);
}

#[tokio::test]
async fn test_big_integers_arrive_as_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kol/get"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"kols":[{"id":3,"name":"whale","dc_channel_id":1234567890123456789,"dc_author_ids":[987654321098765432,42]}],"max":9223372036854775807}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let selector = direct(&server);
    let raw = selector.send(&RequestDescriptor::get("/kol/get")).await.expect("200");
    assert_eq!(raw["max"], json!("9223372036854775807"));
    assert_eq!(raw["kols"][0]["id"], json!(3));
    assert_eq!(raw["kols"][0]["dc_author_ids"], json!(["987654321098765432", 42]));

    let kols = FusionApi::new(selector).get_kols(None).await.expect("typed decode");
    assert_eq!(kols.kols[0].dc_channel_id.as_str(), "1234567890123456789");
    assert_eq!(kols.kols[0].dc_author_ids[0].as_str(), "987654321098765432");
    assert_eq!(kols.kols[0].dc_author_ids[1].as_str(), "42");
}

#[tokio::test]
async fn test_request_shape_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/update"))
        .and(header("content-type", "application/json"))
        .and(query_param("username", "alice"))
        .and(body_json(json!({"min_balance": 50.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestDescriptor::post("/user/update")
        .query("username", "alice")
        .json(&json!({"min_balance": 50.0}))
        .expect("body encodes");
    let body = direct(&server).send(&request).await.expect("200");
    assert_eq!(body, json!({"status": "success"}));
}

#[tokio::test]
async fn test_malformed_body_is_returned_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let body = direct(&server).send(&RequestDescriptor::get("/user/get")).await.expect("200");
    assert_eq!(body, json!("<html>gateway</html>"));
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    let selector =
        TransportSelector::direct(&ClientConfig::new("http://127.0.0.1:1")).expect("client builds");
    let err = selector.send(&RequestDescriptor::get("/user/get")).await.expect_err("refused");

    assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(2500)))
        .mount(&server)
        .await;

    let config = ClientConfig { base_url: server.uri(), timeout_secs: 1 };
    let selector = TransportSelector::direct(&config).expect("client builds");
    let err = selector.send(&RequestDescriptor::get("/user/get")).await.expect_err("times out");

    assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
    assert!(err.message().contains("timeout of 1000ms exceeded"), "got {}", err);
}

#[tokio::test]
async fn test_base_url_switch_applies_to_later_calls() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/user/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(1)
            .mount(server)
            .await;
    }

    let api = FusionApi::new(direct(&first));
    api.get_users(None).await.expect("first server");

    api.set_base_url(&format!("{}/", second.uri())).await.expect("switch");
    assert_eq!(api.base_url().await.expect("address"), second.uri());
    api.get_users(None).await.expect("second server");
}

#[tokio::test]
async fn test_concurrent_calls_resolve_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_body())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kol/get"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "busy"})))
        .mount(&server)
        .await;

    let api = FusionApi::new(direct(&server));
    let (users, kols) = tokio::join!(api.get_users(None), api.get_kols(None));

    let users = users.expect("users succeed despite KOL failure");
    assert_eq!(users.users[0].username, "alice");
    assert_eq!(kols.expect_err("KOLs fail").status(), Some(503));
}
