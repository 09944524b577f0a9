//! System configuration integration tests
//!
//! Covers the get/set API with `NETWORK_BASE_PATH` normalization, the
//! immediate effect of a runtime config change on the synchronizer, and the
//! path probe endpoint.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use pretty_assertions::assert_eq;

use common::database::TestDatabase;
use common::fixtures;
use werkstatt::backend::netfolder::sync::ensure_order_folder;
use werkstatt::backend::routes::create_router;
use werkstatt::backend::server::state::AppState;
use werkstatt::backend::sysconfig::db as sysconfig_db;
use werkstatt::shared::orders::OrderType;
use werkstatt::shared::sysconfig::{GetConfigResponse, SetConfigResponse, NETWORK_BASE_PATH_KEY};

fn test_server(db: &TestDatabase) -> TestServer {
    let state = AppState {
        db: db.pool().clone(),
        uploads_root: std::env::temp_dir(),
    };
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_set_and_get_round_trip() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .put(&format!("/api/system-config/{}", NETWORK_BASE_PATH_KEY))
        .json(&serde_json::json!({
            "value": "/mnt/orders",
            "description": "network share",
            "updated_by": "admin"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: SetConfigResponse = response.json();
    assert!(body.success);
    assert_eq!(body.entry.value, "/mnt/orders");
    assert_eq!(body.entry.updated_by, "admin");

    let response = server
        .get(&format!("/api/system-config/{}", NETWORK_BASE_PATH_KEY))
        .await;
    let body: GetConfigResponse = response.json();
    assert!(body.configured);
    assert_eq!(body.value.as_deref(), Some("/mnt/orders"));
}

#[tokio::test]
async fn test_unknown_key_reads_as_not_configured() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server.get("/api/system-config/SOME_OTHER_KEY").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: GetConfigResponse = response.json();
    assert!(!body.configured);
    assert_eq!(body.value, None);
}

#[tokio::test]
async fn test_base_path_is_normalized_on_set() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let cases = [
        // Quotes stripped
        ("\"/mnt/orders\"", "/mnt/orders"),
        // UNC kept verbatim
        (r"\\fileserver\werkstatt", r"\\fileserver\werkstatt"),
        // Drive letter kept verbatim
        (r"C:\Orders", r"C:\Orders"),
        // Everything else: backslashes to forward slashes
        (r"shares\orders", "shares/orders"),
    ];

    for (raw, expected) in cases {
        let response = server
            .put(&format!("/api/system-config/{}", NETWORK_BASE_PATH_KEY))
            .json(&serde_json::json!({ "value": raw }))
            .await;
        let body: SetConfigResponse = response.json();
        assert_eq!(body.entry.value, expected, "input was {:?}", raw);
    }

    // Other keys are stored verbatim
    let response = server
        .put("/api/system-config/SOME_OTHER_KEY")
        .json(&serde_json::json!({ "value": r"keep\this" }))
        .await;
    let body: SetConfigResponse = response.json();
    assert_eq!(body.entry.value, r"keep\this");
}

#[tokio::test]
async fn test_config_change_takes_effect_without_restart() {
    let db = TestDatabase::new().await;
    let base_a = tempfile::tempdir().unwrap();
    let base_b = tempfile::tempdir().unwrap();
    let uploads = tempfile::tempdir().unwrap();

    sysconfig_db::set_entry(
        db.pool(),
        NETWORK_BASE_PATH_KEY,
        &base_a.path().to_string_lossy(),
        None,
        None,
        Utc::now(),
    )
    .await
    .unwrap();

    let first = fixtures::create_order(db.pool(), "Bracket", OrderType::Fertigung).await;
    let outcome = ensure_order_folder(db.pool(), uploads.path(), &first).await;
    assert!(outcome.success);
    assert!(base_a.path().join(&first.order_number).is_dir());

    // Runtime override: the next operation resolves the new base immediately
    sysconfig_db::set_entry(
        db.pool(),
        NETWORK_BASE_PATH_KEY,
        &base_b.path().to_string_lossy(),
        None,
        None,
        Utc::now(),
    )
    .await
    .unwrap();

    let second = fixtures::create_order(db.pool(), "Housing", OrderType::Fertigung).await;
    let outcome = ensure_order_folder(db.pool(), uploads.path(), &second).await;
    assert!(outcome.success);
    assert!(base_b.path().join(&second.order_number).is_dir());
    assert!(!base_a.path().join(&second.order_number).exists());
}

#[tokio::test]
async fn test_description_is_kept_when_omitted_on_update() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    server
        .put(&format!("/api/system-config/{}", NETWORK_BASE_PATH_KEY))
        .json(&serde_json::json!({
            "value": "/mnt/orders",
            "description": "network share"
        }))
        .await;

    let response = server
        .put(&format!("/api/system-config/{}", NETWORK_BASE_PATH_KEY))
        .json(&serde_json::json!({ "value": "/mnt/other" }))
        .await;
    let body: SetConfigResponse = response.json();
    assert_eq!(body.entry.value, "/mnt/other");
    assert_eq!(body.entry.description, "network share");
}

#[tokio::test]
async fn test_path_probe_endpoint() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let dir = tempfile::tempdir().unwrap();

    let response = server
        .post("/api/system-config/test-path")
        .json(&serde_json::json!({ "path": dir.path().to_string_lossy() }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["reachable"], serde_json::json!(true));
    assert_eq!(body["writable"], serde_json::json!(true));

    let response = server
        .post("/api/system-config/test-path")
        .json(&serde_json::json!({ "path": dir.path().join("missing").to_string_lossy() }))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["reachable"], serde_json::json!(false));
    assert_eq!(body["writable"], serde_json::json!(false));

    // Without a path in the body, the configured base path is probed
    server
        .put(&format!("/api/system-config/{}", NETWORK_BASE_PATH_KEY))
        .json(&serde_json::json!({ "value": dir.path().to_string_lossy() }))
        .await;
    let response = server
        .post("/api/system-config/test-path")
        .json(&serde_json::json!({}))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["reachable"], serde_json::json!(true));
}
