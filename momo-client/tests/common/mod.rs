//! Shared fixtures for the HTTP-level tests.

#![allow(dead_code)]

use momo_client::MomoClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const SUBSCRIPTION_KEY: &str = "0d31d966e5674a999c82772aa95f2cca";
pub const ENVIRONMENT: &str = "mtnuganda";
pub const API_USER: &str = "user";
pub const API_KEY: &str = "key";
/// `base64("user:key")`
pub const BASIC_AUTH: &str = "Basic dXNlcjprZXk=";
pub const TRANSACTION_ID: &str = "6c6eb16c-8b34-4d5d-bd41-2a9303f65075";

/// Starts a mock provider and a client pointed at it.
pub async fn setup() -> (MockServer, MomoClient) {
    let server = MockServer::start().await;
    let client = MomoClient::new(SUBSCRIPTION_KEY, ENVIRONMENT, &server.uri()).unwrap();
    (server, client)
}

pub fn token_body() -> Value {
    json!({"access_token": "token", "token_type": "access_token", "expires_in": 3600})
}

pub fn status_body(party_field: &str) -> Value {
    json!({
        "amount": "500",
        "currency": "UGX",
        "financialTransactionId": "2312",
        "externalId": "3232",
        party_field: {"partyIdType": "MSISDN", "partyId": "4656473839"},
        "status": "SUCCESSFUL"
    })
}

pub fn balance_body() -> Value {
    json!({"availableBalance": "500", "currency": "UGX"})
}

/// The `X-Reference-Id` of the only request the server received.
pub async fn sent_reference_id(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0]
        .headers
        .get("x-reference-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}
