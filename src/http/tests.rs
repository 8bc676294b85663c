//! Tests for the HTTP client module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .api_token("test-token")
        .build();
    HttpClient::with_config(&config).unwrap()
}

// ============================================================================
// ApiRequest Tests
// ============================================================================

#[test]
fn test_api_request_set_query_replaces() {
    let mut request = ApiRequest::get("projects/1/stories")
        .query("filter", "label:bug")
        .query("limit", "10");

    request.set_query("limit", "25");
    request.set_query("offset", "50");

    assert_eq!(request.query_value("filter"), Some("label:bug"));
    assert_eq!(request.query_value("limit"), Some("25"));
    assert_eq!(request.query_value("offset"), Some("50"));
    assert_eq!(request.query.len(), 3);
}

#[test]
fn test_api_request_with_body() {
    #[derive(serde::Serialize)]
    struct Body {
        name: &'static str,
    }

    let request = ApiRequest::new(Method::POST, "projects/1/stories")
        .with_body(&Body { name: "Ship it" })
        .unwrap();

    assert_eq!(request.method, Method::POST);
    assert_eq!(request.body, Some(json!({"name": "Ship it"})));
}

// ============================================================================
// PaginationInfo Tests
// ============================================================================

#[test]
fn test_pagination_info_from_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_HEADER, HeaderValue::from_static("35"));
    headers.insert(OFFSET_HEADER, HeaderValue::from_static("10"));
    headers.insert(LIMIT_HEADER, HeaderValue::from_static("10"));
    headers.insert(RETURNED_HEADER, HeaderValue::from_static("10"));

    let info = PaginationInfo::from_headers(&headers).unwrap();
    assert_eq!(info.total, 35);
    assert_eq!(info.offset, Some(10));
    assert_eq!(info.limit, Some(10));
    assert_eq!(info.returned, Some(10));
}

#[test]
fn test_pagination_info_requires_total() {
    let mut headers = HeaderMap::new();
    headers.insert(LIMIT_HEADER, HeaderValue::from_static("10"));
    assert!(PaginationInfo::from_headers(&headers).is_none());

    headers.insert(TOTAL_HEADER, HeaderValue::from_static("many"));
    assert!(PaginationInfo::from_headers(&headers).is_none());
}

#[test]
fn test_api_response_json_decode_error() {
    let response = ApiResponse::ok(r#"{"id": "not-a-list"}"#);
    let result: crate::Result<Vec<u64>> = response.json();
    assert!(matches!(result, Err(Error::Decode { .. })));
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[test]
fn test_http_client_rejects_invalid_base_url() {
    let config = ClientConfig::builder().base_url("::not-a-url::").build();
    assert!(HttpClient::with_config(&config).is_err());
}

#[tokio::test]
async fn test_http_client_sends_token_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7/stories"))
        .and(header(TOKEN_HEADER, "test-token"))
        .and(query_param("filter", "state:started owner:\"ab\""))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(TOTAL_HEADER, "42")
                .insert_header(OFFSET_HEADER, "0")
                .insert_header(LIMIT_HEADER, "10")
                .set_body_json(json!([{"id": 1}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ApiRequest::get("projects/7/stories")
        .query("filter", "state:started owner:\"ab\"")
        .query("limit", "10");

    let response = client.send(&request).await.unwrap();

    assert_eq!(response.status, 200);
    let pagination = response.pagination.unwrap();
    assert_eq!(pagination.total, 42);
    assert_eq!(pagination.limit, Some(10));

    let items: Vec<serde_json::Value> = response.json().unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_http_client_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/7/stories"))
        .and(body_json(json!({"name": "New story"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 99})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ApiRequest::new(Method::POST, "projects/7/stories")
        .json(json!({"name": "New story"}));

    let response = client.send(&request).await.unwrap();
    assert!(response.pagination.is_none());
    assert_eq!(response.json::<serde_json::Value>().unwrap()["id"], 99);
}

#[tokio::test]
async fn test_http_client_resolves_against_base_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/v5/projects/7/epics/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/services/v5", mock_server.uri()))
        .build();
    let client = HttpClient::with_config(&config).unwrap();

    let response = client
        .send(&ApiRequest::get("/projects/7/epics/3"))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7/stories/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"code":"unfound_resource","kind":"error","error":"The object you tried to access could not be found."}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send(&ApiRequest::get("projects/7/stories/404"))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("unfound_resource"));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7/stories"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send(&ApiRequest::get("projects/7/stories"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.is_transport());
}
