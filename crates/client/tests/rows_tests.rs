//! Row data endpoint tests.
//!
//! This module tests the row CRUD API:
//! - Listing rows with pagination/sort/filter query parameters
//! - Fetching a single row
//! - Creating, updating and deleting rows
//! - Error mapping and rate-limit retry behavior
//!
//! # Invariants
//! - List responses parse from both the count envelope and a bare array
//! - Mutating requests send the record as a JSON body
//! - 429 responses are retried with exponential backoff; other errors are
//!   returned immediately

mod common;

use common::*;
use crud6_client::ClientError;
use crud6_client::endpoints::ListParams;
use crud6_client::models::SortDirection;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_list_rows() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("rows/list_groups.json");

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_rows("groups", &ListParams::default()).await;

    assert!(result.is_ok());
    let listing = result.unwrap();
    assert_eq!(listing.count, 3);
    assert_eq!(listing.rows.len(), 3);
    assert_eq!(listing.rows[0]["name"], "Administrators");
    assert_eq!(listing.rows[2]["slug"], "users");
}

#[tokio::test]
async fn test_list_rows_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups"))
        .and(query_param("size", "10"))
        .and(query_param("page", "2"))
        .and(query_param("sorts[name]", "desc"))
        .and(query_param("filters[slug]", "admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&load_fixture("rows/list_groups.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListParams {
        size: Some(10),
        page: Some(2),
        sorts: vec![("name".to_string(), SortDirection::Desc)],
        filters: vec![("slug".to_string(), "admins".to_string())],
    };

    let result = client.fetch_rows("groups", &params).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_rows_accepts_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Administrators"}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let listing = client
        .fetch_rows("groups", &ListParams::default())
        .await
        .unwrap();

    assert_eq!(listing.count, 1);
    assert_eq!(listing.rows[0]["id"], 1);
}

#[tokio::test]
async fn test_get_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&load_fixture("rows/group.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let row = client.fetch_row("groups", "1").await.unwrap();

    assert_eq!(row["id"], 1);
    assert_eq!(row["slug"], "admins");
}

#[tokio::test]
async fn test_get_row_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Group not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_row("groups", "999").await;

    match result {
        Err(ClientError::ApiError {
            status, message, ..
        }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Group not found");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_row_sends_json_body() {
    let mock_server = MockServer::start().await;

    let record: crud6_client::RecordInstance = serde_json::from_value(serde_json::json!({
        "name": "Editors",
        "slug": "editors",
        "description": "Content editors"
    }))
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/api/crud6/groups"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "Group created"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.create_row("groups", &record).await.unwrap();

    assert_eq!(response.message, "Group created");
}

#[tokio::test]
async fn test_update_row() {
    let mock_server = MockServer::start().await;

    let record: crud6_client::RecordInstance = serde_json::from_value(serde_json::json!({
        "name": "Administrators",
        "description": "Renamed description"
    }))
    .unwrap();

    Mock::given(method("PUT"))
        .and(path("/api/crud6/groups/1"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Group updated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.update_row("groups", "1", &record).await.unwrap();

    assert_eq!(response.message, "Group updated");
}

#[tokio::test]
async fn test_delete_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/crud6/groups/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Group deleted"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.delete_row("groups", "1").await.unwrap();

    assert_eq!(response.message, "Group deleted");
}

#[tokio::test]
async fn test_rate_limited_request_retries_then_succeeds() {
    let mock_server = MockServer::start().await;

    // One 429, then success: the retry helper should back off once and
    // recover.
    Mock::given(method("GET"))
        .and(path("/api/crud6/groups"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&load_fixture("rows/list_groups.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let start = std::time::Instant::now();
    let result = client.fetch_rows("groups", &ListParams::default()).await;

    assert!(result.is_ok());
    // First backoff is one second.
    assert!(start.elapsed() >= std::time::Duration::from_secs(1));
}

#[tokio::test]
async fn test_rate_limited_request_exhausts_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crud6/groups"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_rows("groups", &ListParams::default()).await;

    assert!(matches!(result, Err(ClientError::MaxRetriesExceeded(_))));
}
