use axum::Router;
use chrono::Utc;
use logsink::{
    app::AppState,
    db::{LogStore, SqliteLogStore},
    http,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::task::JoinHandle;

async fn start_server() -> (String, JoinHandle<()>) {
    let store = SqliteLogStore::connect("sqlite::memory:", 1)
        .await
        .expect("connect memory sqlite");
    let state = AppState::new(Arc::new(store));
    let app: Router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

async fn post_log(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/logs", base))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn create_and_read_back_today() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let nested = json!({ "request": { "path": "/checkout", "ms": 412 }, "tags": ["slow", "db"] });
    for (level, value) in [("info", json!("booted")), ("warn", nested.clone()), ("error", json!(0))] {
        let res = post_log(&client, &base, json!({ "level": level, "value": value })).await;
        assert_eq!(res.status(), reqwest::StatusCode::CREATED);
        let v: Value = res.json().await.unwrap();
        assert_eq!(v, json!({ "message": "Log saved." }));
    }

    let res = client
        .get(format!("{}/logs/{}", base, today()))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "success");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);

    let levels: Vec<&str> = data.iter().map(|e| e["level"].as_str().unwrap()).collect();
    assert_eq!(levels, ["info", "warn", "error"]);
    assert_eq!(data[1]["value"], nested);
    assert_eq!(data[2]["value"], json!(0));
    for entry in data {
        let keys: Vec<&String> = entry.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3, "unexpected fields in {entry}");
    }

    let stamps: Vec<&str> = data
        .iter()
        .map(|e| e["timestamp"].as_str().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn rejects_incomplete_entries() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "level": "info" }), json!({ "value": "x" })] {
        let res = post_log(&client, &base, body.clone()).await;
        assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST, "body {body}");
        let v: Value = res.json().await.unwrap();
        assert_eq!(v["error"], "Both level and value are required.");
    }

    for value in [json!(0), json!(false)] {
        let res = post_log(&client, &base, json!({ "level": "info", "value": value })).await;
        assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/logs/{}", base, today()))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["value"], json!(0));
    assert_eq!(body["data"][1]["value"], json!(false));
}

#[tokio::test]
async fn empty_day_and_bad_dates() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    post_log(&client, &base, json!({ "level": "info", "value": "today" })).await;

    let res = client
        .get(format!("{}/logs/2001-09-09", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], json!([]));

    for token in ["2025-13-99", "abcd", "20250101"] {
        let res = client
            .get(format!("{}/logs/{}", base, token))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST, "token {token}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "error");
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn status_reports_connected_store() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", base)).send().await.unwrap();
    assert!(res.status().is_success());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dbConnection"], json!({ "code": 1, "status": "connected" }));
    assert_ne!(body["versions"]["sqlite"], "unknown");
    assert!(body["uptime"].as_str().unwrap().ends_with('s'));
    assert!(body["memory"]["rss"].as_str().unwrap().ends_with(" MB"));
}

#[tokio::test]
async fn status_survives_closed_store() {
    let store = Arc::new(
        SqliteLogStore::connect("sqlite::memory:", 1)
            .await
            .expect("connect memory sqlite"),
    );
    let app = http::build_router(AppState::new(store.clone()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let _srv = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    store.close().await;

    let client = reqwest::Client::new();
    let res = client.get(format!("{}/", base)).send().await.unwrap();
    assert!(res.status().is_success());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["dbConnection"], json!({ "code": 0, "status": "disconnected" }));

    let res = post_log(&client, &base, json!({ "level": "info", "value": "x" })).await;
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let v: Value = res.json().await.unwrap();
    assert_eq!(v, json!({ "error": "Failed to save log." }));
}

#[tokio::test]
async fn cors_headers_on_responses() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .request(reqwest::Method::OPTIONS, format!("{}/logs", base))
        .header("Origin", "https://dashboard.example.test")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    let res = client
        .get(format!("{}/logs/{}", base, today()))
        .header("Origin", "https://dashboard.example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
}
