use std::net::SocketAddr;

use axum::Router;
use bet_advisor::game::Street;
use bet_advisor::{Advice, AdvisorConfig, web};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::time::{Duration, sleep};

async fn spawn_app() -> anyhow::Result<(String, tokio::task::JoinHandle<()>)> {
    let app: Router = web::router(AdvisorConfig::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    sleep(Duration::from_millis(25)).await;
    Ok((format!("http://{}", addr), server))
}

#[tokio::test]
async fn web_api_returns_advice() -> anyhow::Result<()> {
    let (base_url, server) = spawn_app().await?;
    let client = Client::builder().build()?;

    let health = client.get(format!("{}/healthz", base_url)).send().await?;
    assert_eq!(health.text().await?, "ok");

    let advice: Advice = client
        .post(format!("{}/api/advice", base_url))
        .json(&json!({
            "hand": "Ah Kh",
            "board": "Qh 7h 2c",
            "pot": 30.0,
            "bet": 15.0,
            "in_position": true,
            "profile": "tight",
            "trials": 150,
            "seed": 3
        }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(advice.street, Street::Flop);
    assert_eq!(advice.equity.trials, 150);
    assert!((0.02..=0.98).contains(&advice.fold_chance));
    assert_eq!(advice.plan.evaluations.len(), 4);

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn web_api_rejects_invalid_requests() -> anyhow::Result<()> {
    let (base_url, server) = spawn_app().await?;
    let client = Client::builder().build()?;

    let response = client
        .post(format!("{}/api/advice", base_url))
        .json(&json!({
            "hand": "Ah Ah",
            "pot": 30.0,
            "bet": 15.0,
            "trials": 10
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert!(body["error"].as_str().unwrap_or_default().starts_with("invalid hand"));

    let response = client
        .post(format!("{}/api/advice", base_url))
        .json(&json!({ "hand": "Ah Kd", "pot": -1.0, "bet": 15.0 }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn web_api_caps_trial_count() -> anyhow::Result<()> {
    let (base_url, server) = spawn_app().await?;
    let client = Client::builder().build()?;

    let response = client
        .post(format!("{}/api/advice", base_url))
        .json(&json!({
            "hand": "Ah Kd",
            "pot": 30.0,
            "bet": 15.0,
            "trials": web::MAX_TRIALS + 1
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("trials must not exceed")
    );

    server.abort();
    let _ = server.await;
    Ok(())
}
