//! Unit tests for response envelopes

use scraped_data_gateway::api::envelope::{
    InternalErrorResponse, LoadFailureResponse, NotFoundResponse, RawErrorResponse,
    ScrapingFailedResponse, ENDPOINTS,
};
use scraped_data_gateway::LoadError;
use serde_json::json;

#[test]
fn test_load_failure_envelope() {
    let body = serde_json::to_value(LoadFailureResponse::new(LoadError::NotFound.to_string())).unwrap();

    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "File not found");
    assert_eq!(body["message"], "Failed to load scraped data");
    assert!(body["timestamp"].is_string());
    assert_eq!(body.as_object().unwrap().len(), 4);
}

#[test]
fn test_scraping_failed_envelope_embeds_document() {
    let doc = json!({"error": true, "errorMessage": "blocked", "url": "https://example.com"});
    let body = serde_json::to_value(ScrapingFailedResponse::new(json!("blocked"), doc.clone())).unwrap();

    assert_eq!(body["status"], "scraping_failed");
    assert_eq!(body["error"], "blocked");
    assert_eq!(body["details"], doc);
}

#[test]
fn test_raw_error_has_only_error_field() {
    let body = serde_json::to_value(RawErrorResponse {
        error: LoadError::Io("Permission denied (os error 13)".into()).to_string(),
    })
    .unwrap();

    assert_eq!(
        body,
        json!({"error": "Error reading file: Permission denied (os error 13)"})
    );
}

#[test]
fn test_not_found_lists_every_route() {
    let body = serde_json::to_value(NotFoundResponse::new()).unwrap();

    let listed: Vec<&str> = body["available_endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    let routes: Vec<&str> = ENDPOINTS.iter().map(|(path, _)| *path).collect();
    assert_eq!(listed, routes);
    assert_eq!(body["message"], "The requested endpoint does not exist");
}

#[test]
fn test_internal_error_envelope() {
    let body = serde_json::to_value(InternalErrorResponse::new("disk on fire")).unwrap();

    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "disk on fire");
}
