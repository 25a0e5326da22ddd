use api::{build_app, routes::RailwayState};
use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use config::RailwayEnv;
use std::{collections::HashMap, sync::Arc};

fn test_server(env: Option<RailwayEnv>) -> TestServer {
    let state = RailwayState {
        env: env.map(Arc::new),
    };
    TestServer::new(build_app(state)).unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = test_server(None);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_request_headers_are_echoed() {
    let server = test_server(None);

    let response = server
        .get("/v1/railway/request")
        .add_header(
            HeaderName::from_static("x-railway-request-id"),
            HeaderValue::from_static("abc123"),
        )
        .add_header(
            HeaderName::from_static("x-request-start"),
            HeaderValue::from_static("1700000000000"),
        )
        .add_header(
            HeaderName::from_static("x-forwarded-proto"),
            HeaderValue::from_static("https"),
        )
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["railway_request_id"], "abc123");
    assert_eq!(body["forwarded_proto"], "https");
    assert_eq!(body["request_start"], "2023-11-14T22:13:20Z");
    assert_eq!(body["real_ip"], "");
}

#[tokio::test]
async fn test_malformed_request_start_is_null() {
    let server = test_server(None);

    let response = server
        .get("/v1/railway/request")
        .add_header(
            HeaderName::from_static("x-request-start"),
            HeaderValue::from_static("not-a-number"),
        )
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert!(body["request_start"].is_null());
}

#[tokio::test]
async fn test_deployment_not_on_railway() {
    let server = test_server(None);

    server
        .get("/v1/railway/deployment")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_deployment_from_loaded_env() {
    let vars = HashMap::from([
        ("RAILWAY_PROJECT_ID", "proj1"),
        ("RAILWAY_PROJECT_NAME", "my-project"),
        ("RAILWAY_ENVIRONMENT_NAME", "production"),
        ("RAILWAY_SERVICE_NAME", "web"),
        ("RAILWAY_REPLICA_REGION", "us-west2"),
        ("RAILWAY_TCP_PROXY_PORT", "11105"),
    ]);
    let env = RailwayEnv::load_from(&vars).unwrap();
    let server = test_server(Some(env));

    let response = server.get("/v1/railway/deployment").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["project_name"], "my-project");
    assert_eq!(body["environment_name"], "production");
    assert_eq!(body["service_name"], "web");
    assert_eq!(body["replica_region"], "us-west2");
    assert!(body.get("public_url").is_none());
}
