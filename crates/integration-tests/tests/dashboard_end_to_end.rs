//! Dashboard pages and JSON API served over real HTTP against a fake Holded
//! API.

use axum::http::StatusCode;
use contacts_dashboard_integration_tests::{FakeHolded, FakeResponse, spawn_dashboard};
use serde_json::{Value, json};

fn scenario() -> Value {
    json!({
        "data": [
            { "id": "1", "name": "Acme", "type": "client" },
            { "id": null, "name": "Bad" },
            { "id": "3", "name": "Beta", "type": "supplier" }
        ]
    })
}

async fn get(url: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_contacts_page_renders_valid_records() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client()).await;

    let (status, body) = get(&format!("{base}/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-contact-id=").count(), 2);

    let acme = body.find("data-contact-id=\"1\"").unwrap();
    let beta = body.find("data-contact-id=\"3\"").unwrap();
    assert!(acme < beta);

    let green = body.find("data-chip-color=\"green\">client<").unwrap();
    let yellow = body.find("data-chip-color=\"yellow\">supplier<").unwrap();
    assert!(acme < green && green < beta && beta < yellow);

    assert!(!body.contains(">Bad<"));
    assert!(body.contains("2 contacts"));
}

#[tokio::test]
async fn test_contacts_page_shows_empty_table_on_failure() {
    let fake = FakeHolded::start(FakeResponse::Status {
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: "down".to_string(),
        retry_after: None,
    })
    .await;
    let base = spawn_dashboard(fake.client()).await;

    let (status, body) = get(&format!("{base}/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-contact-id=").count(), 0);
    assert!(body.contains("No contacts found"));
    assert!(body.contains("0 contacts"));
}

#[tokio::test]
async fn test_api_contacts_returns_normalized_json() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client()).await;

    let (status, body) = get(&format!("{base}/api/contacts")).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        json!([
            { "id": "1", "name": "Acme", "type": "client" },
            { "id": "3", "name": "Beta", "type": "supplier" }
        ])
    );
}

#[tokio::test]
async fn test_api_contacts_reports_upstream_failure() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client_with_key("0a1b2c3d4e5f6a7b")).await;

    let (status, body) = get(&format!("{base}/api/contacts")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "External service error");
}

#[tokio::test]
async fn test_missing_api_key_renders_empty_table() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client_without_key()).await;

    let (status, body) = get(&format!("{base}/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-contact-id=").count(), 0);
    assert!(body.contains("No contacts found"));
    assert_eq!(fake.received_keys(), vec![None]);
}

#[tokio::test]
async fn test_missing_api_key_reports_upstream_failure() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client_without_key()).await;

    let (status, body) = get(&format!("{base}/api/contacts")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "External service error");
}

#[tokio::test]
async fn test_records_with_numeric_fields_are_listed() {
    let fake = FakeHolded::start(FakeResponse::Json(json!([
        { "id": "1", "name": "Acme", "mobile": 600_000_000 },
        { "id": "2", "name": "Beta", "type": 3 },
        { "id": "3", "name": "Gamma", "code": null }
    ])))
    .await;
    let base = spawn_dashboard(fake.client()).await;

    let (status, body) = get(&format!("{base}/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-contact-id=").count(), 3);
    assert!(body.contains(">600000000<"));
    assert!(body.contains("3 contacts"));
}

#[tokio::test]
async fn test_one_upstream_call_per_page_load() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client()).await;

    get(&format!("{base}/")).await;
    get(&format!("{base}/")).await;

    assert_eq!(fake.received_keys().len(), 2);
}

#[tokio::test]
async fn test_health() {
    let fake = FakeHolded::start(FakeResponse::Json(scenario())).await;
    let base = spawn_dashboard(fake.client()).await;

    let (status, body) = get(&format!("{base}/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    assert!(fake.received_keys().is_empty());
}
