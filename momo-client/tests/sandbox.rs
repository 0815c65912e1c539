//! Sandbox user provisioning against a mock provider.

mod common;

use common::*;
use momo_client::ClientError;
use momo_types::ReferenceId;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_sandbox_user_returns_reference_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1_0/apiuser"))
        .and(header("Ocp-Apim-Subscription-Key", SUBSCRIPTION_KEY))
        .and(body_json(json!({"providerCallbackHost": "myapp.com"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let user_id = client
        .sandbox_users()
        .create_sandbox_user("myapp.com")
        .await
        .unwrap();

    assert_eq!(sent_reference_id(&server).await, user_id.to_string());
}

#[tokio::test]
async fn test_create_sandbox_user_conflict() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1_0/apiuser"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"code": "RESOURCE_ALREADY_EXIST"})),
        )
        .mount(&server)
        .await;

    let err = client
        .sandbox_users()
        .create_sandbox_user("myapp.com")
        .await
        .unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert!(body.contains("RESOURCE_ALREADY_EXIST"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_api_key() {
    let (server, client) = setup().await;
    let user_id: ReferenceId = TRANSACTION_ID.parse().unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/v1_0/apiuser/{TRANSACTION_ID}/apikey")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"apiKey": "c0d857dba3944ce3b6d436c04963e1ea"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let key = client
        .sandbox_users()
        .generate_api_key(&user_id)
        .await
        .unwrap();
    assert_eq!(key.api_key, "c0d857dba3944ce3b6d436c04963e1ea");
}

#[tokio::test]
async fn test_generate_api_key_requires_created() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/v1_0/apiuser/[0-9a-f-]+/apikey$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .sandbox_users()
        .generate_api_key(&ReferenceId::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_provision_creates_user_then_key() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1_0/apiuser"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1_0/apiuser/[0-9a-f-]+/apikey$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"apiKey": "generated"})))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.sandbox_users().provision("myapp.com").await.unwrap();
    assert_eq!(user.api_key, "generated");

    // The key is requested for the id the user was created with
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[1].url.path(),
        format!("/v1_0/apiuser/{}/apikey", user.user_id)
    );
}
