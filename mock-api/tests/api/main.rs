mod campaigns;
mod employees;
mod regions;

use payloads::requests::EmployeeQuery;
use reqwest::StatusCode;
use test_helpers::{mock::DevDataset, spawn_app};

#[tokio::test]
async fn dev_dataset_loads() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;

    let page = app.client.list_employees(&EmployeeQuery::default()).await?;
    assert_eq!(page.pagination.total, dataset.employees.len() as u64);
    assert_eq!(app.client.list_campaigns().await?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_bad_request_with_a_message() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{}/api/admin/campaigns", app.port))
        .header("Content-Type", "application/json")
        .body(r#"{"Name": 5}"#)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: payloads::Envelope<serde_json::Value> = response.json().await?;
    assert!(!body.success);
    assert!(body.message.is_some());
    Ok(())
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() -> anyhow::Result<()> {
    let client = payloads::APIClient {
        // nothing listens on port 9 locally
        address: "http://127.0.0.1:9".into(),
        inner_client: reqwest::Client::new(),
    };
    let error = client.list_campaigns().await.unwrap_err();
    assert!(matches!(error, payloads::ClientError::Network(_)));
    assert_eq!(
        error.message_or("Failed to fetch campaigns"),
        "Network error. Please check your connection."
    );
    Ok(())
}
