//! Integration tests for the health endpoints.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["service"], "dulce-horno");
}

#[tokio::test]
async fn test_detailed_health_reports_database_up() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "up");
}
