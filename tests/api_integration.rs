//! API Integration Tests for the ynr server
//!
//! Exercises the HTTP surface with axum-test against the sample dataset.

mod common;

use std::collections::BTreeSet;

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::{json, Value};
use url::Url;
use ynr::config::ApiConfig;
use ynr::serializers::{
    ElectionRepresentation, MinimalOrganizationRepresentation, OrganizationRepresentation,
    PersonRepresentation, PostRepresentation, Represent,
};
use ynr::store::Store;

use common::{build_test_server, build_test_server_with, sample_store};

fn keys(value: &Value) -> BTreeSet<String> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .cloned()
        .collect()
}

fn field_set(fields: &[&str]) -> BTreeSet<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

// ============================================================================
// Health & Root
// ============================================================================

#[tokio::test]
async fn test_health_check_returns_healthy() {
    let server = build_test_server(sample_store());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
    assert_eq!(body["records"]["people"], 3);
    assert_eq!(body["records"]["memberships"], 3);
}

#[tokio::test]
async fn test_api_root_lists_resources() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        keys(&body),
        field_set(&["areas", "elections", "organizations", "persons", "posts"])
    );
    assert!(body["elections"]
        .as_str()
        .unwrap()
        .ends_with("/api/v0.9/elections/"));
}

#[tokio::test]
async fn test_unsupported_version_is_not_found() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v2/persons/2009/").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNSUPPORTED_VERSION");
}

#[tokio::test]
async fn test_additional_versions_can_be_allowed() {
    let api_config = ApiConfig {
        allowed_versions: vec!["v0.9".into(), "v1.0".into()],
        ..ApiConfig::default()
    };
    let server = build_test_server_with(sample_store(), api_config);

    let response = server.get("/api/v1.0/posts/1/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["url"].as_str().unwrap().contains("/api/v1.0/posts/1/"));
    assert!(body["elections"][0]
        .as_str()
        .unwrap()
        .contains("/api/v0.9/elections/2017/"));
}

// ============================================================================
// People
// ============================================================================

#[tokio::test]
async fn test_get_person() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/persons/2009/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(keys(&body), field_set(PersonRepresentation::FIELDS));
    assert_eq!(body["id"], 2009);
    assert_eq!(body["name"], "Helen Hayes");
    assert_eq!(body["versions"][0]["version_id"], "a1b2c3d4");
    assert_eq!(body["images"][0]["image_url"], "/media/images/helen-hayes.png");

    let membership = &body["memberships"][0];
    assert_eq!(membership["role"], "Candidate");
    assert_eq!(membership["election"]["id"], "2017");
    assert!(membership["person"]
        .as_str()
        .unwrap()
        .ends_with("/api/v0.9/persons/2009/"));
}

#[tokio::test]
async fn test_hyperlinks_follow_host_header() {
    let server = build_test_server(sample_store());

    let response = server
        .get("/api/v0.9/persons/2009/")
        .add_header(header::HOST, HeaderValue::from_static("ynr.example.org"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["url"], "http://ynr.example.org/api/v0.9/persons/2009/");
}

#[tokio::test]
async fn test_get_unknown_person() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/persons/1/").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_id_is_json_not_found() {
    let server = build_test_server(sample_store());

    for path in ["/api/v0.9/persons/abc/", "/api/v0.9/posts/abc/", "/api/v0.9/areas/abc/"] {
        let response = server.get(path).await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_list_people_keeps_storage_order() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/persons/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2009, 3001, 4242]);
}

#[tokio::test]
async fn test_malformed_versions_surface_as_server_error() {
    let store = Store::from_json(
        r#"{"people": [{"id": 7, "name": "Broken", "extra": {"versions": "not json"}}]}"#,
    )
    .unwrap();
    let server = build_test_server(store);

    let response = server.get("/api/v0.9/persons/7/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MALFORMED_JSON");
}

// ============================================================================
// Organizations
// ============================================================================

#[tokio::test]
async fn test_get_organization_by_slug() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/organizations/joint-party:53-119/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(keys(&body), field_set(OrganizationRepresentation::FIELDS));
    assert_eq!(body["id"], "joint-party:53-119");
    assert_eq!(
        keys(&body["parent"]),
        field_set(MinimalOrganizationRepresentation::FIELDS)
    );
    assert_eq!(body["parent"]["name"], "Labour Party");
}

#[tokio::test]
async fn test_organization_links_resolve() {
    let server = build_test_server(sample_store());

    let body: Value = server.get("/api/v0.9/organizations/party:53/").await.json();
    let url = Url::parse(body["url"].as_str().unwrap()).unwrap();
    assert_eq!(url.path(), "/api/v0.9/organizations/party%3A53/");

    let response = server.get(url.path()).await;
    response.assert_status_ok();
    let again: Value = response.json();
    assert_eq!(again["id"], "party:53");
}

#[tokio::test]
async fn test_organizations_without_slug_are_not_listed() {
    let server = build_test_server(sample_store());

    let body: Value = server.get("/api/v0.9/organizations/").await.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec!["House of Commons", "Labour Party", "Labour and Co-operative Party"]
    );
}

// ============================================================================
// Elections
// ============================================================================

#[tokio::test]
async fn test_get_election_by_slug() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/elections/2017/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(keys(&body), field_set(ElectionRepresentation::FIELDS));
    assert_eq!(body["id"], "2017");
    assert!(body["url"]
        .as_str()
        .unwrap()
        .contains("/api/v0.9/elections/2017/"));
    assert_eq!(body["area_types"], json!([{"name": "WMC", "source": "MapIt"}]));
}

#[tokio::test]
async fn test_get_unknown_election() {
    let server = build_test_server(sample_store());

    server
        .get("/api/v0.9/elections/2019/")
        .await
        .assert_status_not_found();
}

// ============================================================================
// Posts & Areas
// ============================================================================

#[tokio::test]
async fn test_get_post() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/posts/1/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(keys(&body), field_set(PostRepresentation::FIELDS));
    assert_eq!(body["slug"], "65808");
    let elections = body["elections"].as_array().unwrap();
    assert_eq!(elections.len(), 1);
    assert!(elections[0]
        .as_str()
        .unwrap()
        .ends_with("/api/v0.9/elections/2017/"));
    assert_eq!(body["organization"]["id"], "commons");
    assert_eq!(body["memberships"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_post_without_elections() {
    let server = build_test_server(sample_store());

    let body: Value = server.get("/api/v0.9/posts/2/").await.json();

    assert_eq!(body["elections"], json!([]));
    assert!(body["area"].is_null());
}

#[tokio::test]
async fn test_get_area() {
    let server = build_test_server(sample_store());

    let response = server.get("/api/v0.9/areas/11/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["type"]["name"], "WMC");
    assert!(body["parent"]
        .as_str()
        .unwrap()
        .ends_with("/api/v0.9/areas/10/"));
}

#[tokio::test]
async fn test_dangling_reference_is_server_error() {
    let store = Store::from_json(
        r#"{
            "people": [{"id": 1, "name": "Orphan"}],
            "memberships": [{"id": 1, "person_id": 1, "post_id": 99, "extra": {"election_slug": "gone"}}]
        }"#,
    )
    .unwrap();
    let server = build_test_server(store);

    let response = server.get("/api/v0.9/persons/1/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_RELATED");
}

#[tokio::test]
async fn test_post_with_unknown_election_is_server_error() {
    let store = Store::from_json(
        r#"{
            "organizations": [{"id": 1, "name": "Council", "extra": {"slug": "council"}}],
            "posts": [{"id": 1, "label": "Ward", "organization_id": 1,
                       "extra": {"slug": "ward", "election_slugs": ["no-such-election"]}}]
        }"#,
    )
    .unwrap();
    let server = build_test_server(store);

    let response = server.get("/api/v0.9/posts/1/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_RELATED");
}
