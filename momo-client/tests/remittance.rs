//! Remittance endpoints against a mock provider.

mod common;

use common::*;
use momo_types::{FailureReason, PaymentOrder, PaymentStatus};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_token() {
    let (server, mut client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/remittance/token/"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .remittance()
        .get_token(API_USER, API_KEY)
        .await
        .unwrap();
    assert_eq!(client.token(), Some("token"));
}

#[tokio::test]
async fn test_token_is_sent_on_later_calls() {
    let (server, mut client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/remittance/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/remittance/v1_0/account/balance"))
        .and(header("Authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut remittance = client.remittance();
    remittance.get_token(API_USER, API_KEY).await.unwrap();
    let balance = remittance.get_balance().await.unwrap();
    assert_eq!(balance.currency, "UGX");
}

#[tokio::test]
async fn test_transfer() {
    let (server, client) = setup().await;
    let mut client = client.with_token("t");

    Mock::given(method("POST"))
        .and(path("/remittance/v1_0/transfer"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let order = PaymentOrder::new("25678999720", 500, "UGX").with_external_id("34232");
    let transfer_id = client.remittance().transfer(&order).await.unwrap();
    assert_eq!(sent_reference_id(&server).await, transfer_id.to_string());
}

#[tokio::test]
async fn test_get_failed_transfer() {
    let (server, mut client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/remittance/v1_0/transfer/{TRANSACTION_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "amount": "500",
            "currency": "EUR",
            "externalId": "34232",
            "payee": {"partyIdType": "MSISDN", "partyId": "25678999720"},
            "status": "FAILED",
            "reason": {"code": "PAYEE_NOT_FOUND", "message": "Payee does not exist"}
        })))
        .mount(&server)
        .await;

    let status = client
        .remittance()
        .get_transfer(&TRANSACTION_ID.parse().unwrap())
        .await
        .unwrap();

    assert_eq!(status.status, PaymentStatus::Failed);
    assert_eq!(
        status.reason,
        Some(FailureReason::Detailed {
            code: "PAYEE_NOT_FOUND".into(),
            message: Some("Payee does not exist".into()),
        })
    );
}

#[tokio::test]
async fn test_is_payee_active_server_error() {
    let (server, mut client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/remittance/v1_0/accountholder/msisdn/256789997290/active"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client
        .remittance()
        .is_payee_active("256789997290")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}
