//! Health and readiness probe tests.
//!
//! Run with: cargo test -p journal-service --test health_check

use journal_service::config::JournalConfig;
use journal_service::services::providers::TextProvider;
use journal_service::services::providers::mock::{FailingTextProvider, MockTextProvider};
use journal_service::startup::Application;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application with the given provider and return the port number.
async fn spawn_app(provider: Arc<dyn TextProvider>) -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__HOST", "127.0.0.1");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GOOGLE_API_KEY", "test-api-key");
    std::env::set_var("JOURNAL_TEXT_MODEL", "gemini-2.0-flash");

    let config = JournalConfig::load().expect("Failed to load config");
    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(Arc::new(MockTextProvider::new("ok"))).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "journal-service");
}

#[tokio::test]
async fn readiness_check_reflects_provider_health() {
    let port = spawn_app(Arc::new(MockTextProvider::new("ok"))).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn readiness_check_reports_unavailable_when_provider_is_down() {
    let port = spawn_app(Arc::new(FailingTextProvider)).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 503);
}
