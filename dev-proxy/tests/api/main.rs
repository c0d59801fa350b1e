mod client;
mod helpers;
mod proxy;

use helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.http.get(format!("{}/health", app.address)).send().await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backendStatus"], 200);
    Ok(())
}
