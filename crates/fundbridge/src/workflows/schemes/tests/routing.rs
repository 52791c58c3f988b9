use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::schemes::router::scheme_router;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn response_ids(payload: &Value, key: &str) -> Vec<u64> {
    payload[key]
        .as_array()
        .expect("array of schemes")
        .iter()
        .map(|scheme| scheme["id"].as_u64().expect("numeric id"))
        .collect()
}

#[tokio::test]
async fn lists_the_whole_catalog_without_filters() {
    let response = scheme_router(shared_catalog())
        .oneshot(get("/api/v1/schemes"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 8);
    assert_eq!(response_ids(&payload, "schemes"), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn list_applies_category_and_search() {
    let response = scheme_router(shared_catalog())
        .oneshot(get("/api/v1/schemes?category=msme&search=CREDIT"))
        .await
        .expect("router responds");

    let payload = read_json_body(response).await;
    assert_eq!(response_ids(&payload, "schemes"), vec![2, 6, 7]);
    assert_eq!(payload["filter"]["category"], "msme");
    assert_eq!(payload["filter"]["searchTerm"], "CREDIT");
}

#[tokio::test]
async fn unknown_category_means_no_restriction() {
    let response = scheme_router(shared_catalog())
        .oneshot(get("/api/v1/schemes?category=space"))
        .await
        .expect("router responds");

    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 8);
    assert!(payload["filter"]["category"].is_null());
}

#[tokio::test]
async fn detail_returns_scheme_or_not_found() {
    let router = scheme_router(shared_catalog());

    let found = router
        .clone()
        .oneshot(get("/api/v1/schemes/4"))
        .await
        .expect("router responds");
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["title"], "Atal Innovation Mission");
    assert_eq!(payload["eligibility"]["existingSupport"], json!(["none"]));

    let missing = router
        .oneshot(get("/api/v1/schemes/42"))
        .await
        .expect("router responds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(missing).await;
    assert_eq!(payload["error"], "scheme 42 not found");
}

#[tokio::test]
async fn form_options_list_every_dimension() {
    let response = scheme_router(shared_catalog())
        .oneshot(get("/api/v1/schemes/form-options"))
        .await
        .expect("router responds");

    let payload = read_json_body(response).await;
    let fields: Vec<&str> = payload["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|field| field["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(
        fields,
        vec![
            "startupStage",
            "industryType",
            "annualRevenue",
            "employees",
            "registeredLocation",
            "existingSupport"
        ]
    );
    assert_eq!(payload["categories"][0]["value"], "");
    assert_eq!(payload["categories"][0]["label"], "All Categories");
    assert_eq!(payload["categories"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn eligibility_returns_matching_schemes() {
    let form = serde_json::to_value(seed_stage_form()).expect("form serializes");
    let response = scheme_router(shared_catalog())
        .oneshot(post_json("/api/v1/schemes/eligibility", form))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "matched");
    assert_eq!(payload["matchThreshold"], 5);
    assert_eq!(payload["evaluated"], 8);
    assert_eq!(response_ids(&payload, "matches"), vec![1, 4]);
    assert!(payload.get("assessments").is_none());
}

#[tokio::test]
async fn eligibility_breakdown_is_opt_in() {
    let mut form = serde_json::to_value(seed_stage_form()).expect("form serializes");
    form["includeBreakdown"] = json!(true);

    let response = scheme_router(shared_catalog())
        .oneshot(post_json("/api/v1/schemes/eligibility", form))
        .await
        .expect("router responds");

    let payload = read_json_body(response).await;
    let assessments = payload["assessments"].as_array().expect("breakdown");
    assert_eq!(assessments.len(), 8);
    assert_eq!(assessments[1]["schemeId"], 2);
    assert_eq!(assessments[1]["matchCount"], 4);
    assert_eq!(
        assessments[1]["unmatched"],
        json!(["startupStage", "industryType"])
    );
}

#[tokio::test]
async fn eligibility_with_no_matches_is_reported_as_such() {
    let payload = json!({
        "startupStage": "Established",
        "industryType": "FinTech",
        "annualRevenue": "More than ₹5 Crore",
        "employees": "More than 100 employees",
        "registeredLocation": "Metro City",
        "existingSupport": "tax",
    });
    let response = scheme_router(shared_catalog())
        .oneshot(post_json("/api/v1/schemes/eligibility", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "no_matches");
    assert_eq!(payload["matches"], json!([]));
}

#[tokio::test]
async fn incomplete_eligibility_form_is_unprocessable() {
    let payload = json!({
        "startupStage": "Ideation",
        "industryType": "",
        "employees": "1-5",
    });
    let response = scheme_router(shared_catalog())
        .oneshot(post_json("/api/v1/schemes/eligibility", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["missing"],
        json!([
            "industryType",
            "annualRevenue",
            "registeredLocation",
            "existingSupport"
        ])
    );
    assert!(payload["error"]
        .as_str()
        .expect("message")
        .starts_with("eligibility form is missing"));
}
