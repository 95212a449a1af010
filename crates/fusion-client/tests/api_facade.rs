#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use fusion_client::{ClientConfig, ClientError, FusionApi, TransportSelector};
use fusion_types::{
    AmountMode, KolForm, KolType, TrackStatus, TradeMode, TrackConfigForm, UserForm, UserUpdate,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> FusionApi {
    FusionApi::new(TransportSelector::direct(&ClientConfig::new(server.uri())).expect("client builds"))
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": "success", "message": "done"}))
}

async fn expect_call(server: &MockServer, verb: &str, route: &str, params: &[(&str, &str)]) {
    let mut mock = Mock::given(method(verb)).and(path(route));
    for (key, value) in params {
        mock = mock.and(query_param(*key, *value));
    }
    mock.respond_with(ok()).expect(1).mount(server).await;
}

fn users_body() -> serde_json::Value {
    json!({
        "users": [
            {
                "id": 1,
                "username": "alice",
                "is_running": true,
                "is_monitoring": true,
                "followed_kols": [
                    {"name": "whale", "is_active": true, "futures": ["BTC"], "amount_mode": "FIXED", "fixed_amounts": {"BTC": 100.0}},
                    {"name": "shrimp", "is_active": false, "amount_mode": "LOSS_FIXED", "max_loss": 10.0}
                ]
            },
            {"id": 2, "username": "bob", "followed_kols": []}
        ],
        "total": 2
    })
}

#[tokio::test]
async fn test_user_lifecycle_endpoints() {
    let server = MockServer::start().await;
    for (verb, route) in [
        ("DELETE", "/user/remove"),
        ("POST", "/user/run"),
        ("POST", "/user/stop"),
        ("POST", "/user/monitor/run"),
        ("POST", "/user/monitor/stop"),
        ("POST", "/user/close_all"),
        ("POST", "/user/exporter/stop"),
    ] {
        expect_call(&server, verb, route, &[("username", "alice")]).await;
    }
    expect_call(
        &server,
        "POST",
        "/user/exporter/start",
        &[("username", "alice"), ("exporter_name", "prom")],
    )
    .await;

    let api = api(&server);
    assert!(api.remove_user("alice").await.expect("remove").is_success());
    api.run_user("alice").await.expect("run");
    api.stop_user("alice").await.expect("stop");
    api.run_monitor("alice").await.expect("monitor run");
    api.stop_monitor("alice").await.expect("monitor stop");
    api.close_all_positions("alice").await.expect("close all");
    api.start_exporter("alice", Some("prom")).await.expect("exporter start");
    api.stop_exporter("alice").await.expect("exporter stop");
}

#[tokio::test]
async fn test_get_users_filters_by_username() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .and(query_param("username", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .and(query_param_is_missing("username"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let filtered = api.get_users(Some("alice")).await.expect("filtered");
    assert_eq!(filtered.total, 2);
    let all = api.get_users(None).await.expect("all");
    assert_eq!(all.users[1].username, "bob");
}

#[tokio::test]
async fn test_add_and_update_user_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/add"))
        .and(body_json(json!({
            "username": "alice",
            "gate_api_key": "key",
            "gate_secret_key": "secret",
            "trade_mode": "SIMULATED",
            "enable_balance_monitor": true,
            "min_balance": 25.0
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user/update"))
        .and(query_param("username", "alice"))
        .and(body_json(json!({"trade_mode": "REAL"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let form = UserForm {
        username: "alice".to_string(),
        gate_api_key: "key".to_string(),
        gate_secret_key: "secret".to_string(),
        trade_mode: TradeMode::Simulated,
        enable_balance_monitor: true,
        min_balance: Some(25.0),
        ..Default::default()
    };
    assert_eq!(api.add_user(&form).await.expect("add").summary(), "done");

    let update = UserUpdate { trade_mode: Some(TradeMode::Real), ..Default::default() };
    api.update_user("alice", &update).await.expect("update");
}

#[tokio::test]
async fn test_kol_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kol/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kols": [{"id": 1, "name": "whale", "kol_type": "NORMAL", "dc_channel_id": "77", "followed_by": ["alice"]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/kol/add"))
        .and(body_json(json!({
            "name": "shrimp",
            "kol_type": "WWG",
            "dc_channel_id": "1234567890123456789",
            "dc_author_ids": ["1", "2"]
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    expect_call(&server, "DELETE", "/kol/remove", &[("name", "shrimp")]).await;

    let api = api(&server);
    let kols = api.get_kols(None).await.expect("wrapped list");
    assert_eq!(kols.kols[0].followed_by, vec!["alice".to_string()]);

    let form = KolForm {
        name: "shrimp".to_string(),
        kol_type: KolType::Wwg,
        dc_channel_id: "1234567890123456789".to_string(),
        dc_author_ids: vec!["1".to_string(), "2".to_string()],
    };
    api.add_kol(&form).await.expect("add");
    api.remove_kol("shrimp").await.expect("remove");
}

#[tokio::test]
async fn test_track_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kol/track/add"))
        .and(body_json(json!({
            "username": "alice",
            "kol_name": "whale",
            "is_reverse": false,
            "futures": ["BTC"],
            "amount_mode": "FIXED",
            "fixed_amounts": {"BTC": 100.0}
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    let pair = [("username", "alice"), ("kol_name", "whale")];
    expect_call(&server, "DELETE", "/kol/track/remove", &pair).await;
    expect_call(&server, "POST", "/kol/track/start", &pair).await;
    expect_call(&server, "POST", "/kol/track/stop", &pair).await;
    expect_call(&server, "POST", "/kol/track/restart", &pair).await;

    let mut form = TrackConfigForm::new("alice", "whale");
    form.add_future("btc");
    form.set_amount_mode(AmountMode::Fixed);
    form.set_fixed_amount("BTC", 100.0).expect("valid amount");
    form.validate().expect("valid form");

    let api = api(&server);
    api.add_track_config(&form).await.expect("add");
    api.remove_track_config("alice", "whale").await.expect("remove");
    api.start_track("alice", "whale").await.expect("start");
    api.stop_track("alice", "whale").await.expect("stop");
    api.restart_track("alice", "whale").await.expect("restart");
}

#[tokio::test]
async fn test_list_tracks_and_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kol/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "whale", "dc_channel_id": 1},
            {"id": 2, "name": "shrimp", "dc_channel_id": 2}
        ])))
        .mount(&server)
        .await;

    let api = api(&server);
    let tracks = api.list_tracks().await.expect("tracks");
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].kol_name, "whale");
    assert_eq!(tracks[0].status, TrackStatus::Running);
    assert_eq!(tracks[1].status, TrackStatus::Stopped);

    let stats = api.dashboard().await.expect("dashboard");
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.active_users, 1);
    assert_eq!(stats.monitored_users, 1);
    assert_eq!(stats.total_tracks, 2);
    assert_eq!(stats.running_tracks, 1);
    assert_eq!(stats.total_kols, 2);
}

#[tokio::test]
async fn test_shape_mismatch_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": "nope"})))
        .mount(&server)
        .await;

    let err = api(&server).get_users(None).await.expect_err("wrong shape");
    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {:?}", err);
    assert!(err.message().contains("/user/get"));
}

#[tokio::test]
async fn test_non_object_ack_is_kept_as_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/run"))
        .respond_with(ResponseTemplate::new(200).set_body_string("started"))
        .mount(&server)
        .await;

    let resp = api(&server).run_user("alice").await.expect("ack");
    assert!(resp.is_success());
    assert_eq!(resp.data, Some(json!("started")));
}
