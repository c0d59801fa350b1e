use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::{spawn_app, spawn_app_without_backend};

#[tokio::test]
async fn forwards_method_query_headers_and_body() -> Result<()> {
    let app = spawn_app().await;

    let response = app
        .http
        .patch(format!("{}/api/echo?userId=5&page=2", app.address))
        .header("content-type", "application/json")
        .header("authorization", "Bearer token")
        .header("cookie", "session=abc")
        .header("x-ignored", "dropped")
        .body(r#"{"hello":"world"}"#)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let echoed: Value = response.json().await?;
    assert_eq!(echoed["method"], "PATCH");
    assert_eq!(echoed["query"], "userId=5&page=2");
    assert_eq!(echoed["contentType"], "application/json");
    assert_eq!(echoed["authorization"], "Bearer token");
    assert_eq!(echoed["cookie"], "session=abc");
    assert_eq!(echoed["body"], r#"{"hello":"world"}"#);
    Ok(())
}

#[tokio::test]
async fn relays_backend_status_and_body() -> Result<()> {
    let app = spawn_app().await;

    let response = app
        .http
        .delete(format!("{}/api/files/missing", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await?, "파일을 찾을 수 없습니다");
    Ok(())
}

#[tokio::test]
async fn relays_set_cookie() -> Result<()> {
    let app = spawn_app().await;

    let response = app
        .http
        .post(format!("{}/api/v1/users/login", app.address))
        .json(&serde_json::json!({
            "loginId": "alice",
            "password": "correct-horse-1"
        }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie should be relayed")
        .to_str()?;
    assert!(cookie.starts_with("session=ok"));
    Ok(())
}

#[tokio::test]
async fn adds_permissive_cors_headers() -> Result<()> {
    let app = spawn_app().await;
    let origin = "http://localhost:8081";

    let response = app
        .http
        .get(format!("{}/api/category?userId=5", app.address))
        .header("origin", origin)
        .send()
        .await?;

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], origin);
    assert_eq!(headers["access-control-allow-credentials"], "true");
    Ok(())
}

#[tokio::test]
async fn answers_preflight_requests() -> Result<()> {
    let app = spawn_app().await;
    let origin = "http://localhost:8081";

    let response = app
        .http
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/users/5/location", app.address),
        )
        .header("origin", origin)
        .header("access-control-request-method", "PUT")
        .header("access-control-request-headers", "content-type")
        .send()
        .await?;

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], origin);
    let methods = headers["access-control-allow-methods"].to_str()?;
    assert!(methods.contains("PUT"));
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_bad_gateway() -> Result<()> {
    let app = spawn_app_without_backend().await;

    let response = app
        .http
        .get(format!("{}/api/category?userId=5", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Connection Refused");
    assert_eq!(
        body["targetUrl"],
        format!("{}/api/category?userId=5", app.backend_url)
    );
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn health_reports_unavailable_backend() -> Result<()> {
    let app = spawn_app_without_backend().await;

    let response = app.http.get(format!("{}/health", app.address)).send().await?;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "unavailable");
    Ok(())
}
