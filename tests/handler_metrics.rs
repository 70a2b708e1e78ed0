mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

async fn create_link(app: &common::TestApp, code: &str) -> i64 {
    let response = app
        .server
        .post("/api/links")
        .json(&json!({ "code": code, "url": format!("https://{code}.example.com") }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["shortLinkId"].as_i64().unwrap()
}

#[tokio::test]
async fn test_metrics_counts_resolutions() {
    let mut app = common::spawn_app();
    let id = create_link(&app, "counted").await;

    for _ in 0..4 {
        app.server.get("/counted").await;
    }
    assert_eq!(app.flush_visits().await, 4);

    let response = app.server.get("/api/metrics").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([{ "shortLinkId": id, "clicks": 4 }])
    );
}

#[tokio::test]
async fn test_metrics_sorted_by_clicks_desc() {
    let app = common::spawn_app();
    app.counter.set_score(1, 3);
    app.counter.set_score(2, 10);
    app.counter.set_score(3, 7);

    let response = app.server.get("/api/metrics").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "shortLinkId": 2, "clicks": 10 },
            { "shortLinkId": 3, "clicks": 7 },
            { "shortLinkId": 1, "clicks": 3 },
        ])
    );
}

#[tokio::test]
async fn test_metrics_respects_score_ceiling() {
    let app = common::spawn_app_with_ceiling(5);
    app.counter.set_score(1, 5);
    app.counter.set_score(2, 6);

    let response = app.server.get("/api/metrics").await;

    assert_eq!(
        response.json::<Value>(),
        json!([{ "shortLinkId": 1, "clicks": 5 }])
    );
}

#[tokio::test]
async fn test_metrics_store_unavailable() {
    let app = common::spawn_app();
    app.counter.set_unavailable(true);

    let response = app.server.get("/api/metrics").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Internal server error" })
    );
}

#[tokio::test]
async fn test_create_redirect_metrics_scenario() {
    let mut app = common::spawn_app();

    let created = app
        .server
        .post("/api/links")
        .json(&json!({ "code": "abc", "url": "https://example.com" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<Value>()["shortLinkId"].as_i64().unwrap();

    let redirect = app.server.get("/abc").await;
    assert_eq!(redirect.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(redirect.header("location"), "https://example.com");
    app.flush_visits().await;

    let metrics = app.server.get("/api/metrics").await;
    let body = metrics.json::<Value>();
    assert!(
        body.as_array()
            .unwrap()
            .contains(&json!({ "shortLinkId": id, "clicks": 1 }))
    );

    let duplicate = app
        .server
        .post("/api/links")
        .json(&json!({ "code": "abc", "url": "https://example.com" }))
        .await;
    duplicate.assert_status_bad_request();
    assert_eq!(duplicate.json::<Value>(), json!({ "message": "Duplicated code!" }));

    let missing = app.server.get("/zzz").await;
    missing.assert_status_bad_request();
    assert_eq!(missing.json::<Value>(), json!({ "message": "Link not found" }));
}
