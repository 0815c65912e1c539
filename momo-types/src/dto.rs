//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! These mirror the provider's JSON schema field for field. The provider uses
//! camelCase everywhere except the OAuth-style token response.

use serde::{Deserialize, Serialize};

use crate::domain::Party;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A payment to initiate, independent of which product carries it.
///
/// For collections the party is the payer; for disbursements and remittances
/// it is the payee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOrder {
    /// Mobile number of the counterparty
    pub msisdn: String,
    pub amount: i64,
    pub currency: String,
    /// Caller's own identifier, echoed back in status lookups
    pub external_id: String,
    pub payer_message: String,
    pub payee_note: String,
}

impl PaymentOrder {
    pub fn new(msisdn: impl Into<String>, amount: i64, currency: impl Into<String>) -> Self {
        Self {
            msisdn: msisdn.into(),
            amount,
            currency: currency.into(),
            external_id: String::new(),
            payer_message: String::new(),
            payee_note: String::new(),
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn with_payer_message(mut self, message: impl Into<String>) -> Self {
        self.payer_message = message.into();
        self
    }

    pub fn with_payee_note(mut self, note: impl Into<String>) -> Self {
        self.payee_note = note.into();
        self
    }
}

/// Body of a collection "request to pay".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Decimal amount. Sent as a string, the form the provider documents,
    /// rather than a JSON number.
    pub amount: String,
    pub currency: String,
    pub external_id: String,
    pub payer: Party,
    pub payer_message: String,
    pub payee_note: String,
}

impl From<&PaymentOrder> for PaymentRequest {
    fn from(order: &PaymentOrder) -> Self {
        Self {
            amount: order.amount.to_string(),
            currency: order.currency.clone(),
            external_id: order.external_id.clone(),
            payer: Party::msisdn(order.msisdn.clone()),
            payer_message: order.payer_message.clone(),
            payee_note: order.payee_note.clone(),
        }
    }
}

/// Body of a disbursement or remittance transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub amount: String,
    pub currency: String,
    pub external_id: String,
    pub payee: Party,
    pub payer_message: String,
    pub payee_note: String,
}

impl From<&PaymentOrder> for TransferRequest {
    fn from(order: &PaymentOrder) -> Self {
        Self {
            amount: order.amount.to_string(),
            currency: order.currency.clone(),
            external_id: order.external_id.clone(),
            payee: Party::msisdn(order.msisdn.clone()),
            payer_message: order.payer_message.clone(),
            payee_note: order.payee_note.clone(),
        }
    }
}

/// Lifecycle state of a payment as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Successful,
    Failed,
    Rejected,
    Timeout,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// Why a payment failed. The provider sends either a bare code or a
/// code/message object depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailureReason {
    Code(String),
    Detailed {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl FailureReason {
    pub fn code(&self) -> &str {
        match self {
            FailureReason::Code(code) => code,
            FailureReason::Detailed { code, .. } => code,
        }
    }
}

/// Status of a request to pay or a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    /// Empty when the provider omits it, as it may for failed payments
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
    /// Provider-side id, assigned once the payment completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Party>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub available_balance: String,
    pub currency: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Bearer token issued by a product's token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Sandbox DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a sandbox API user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUserRequest {
    /// Host the provider will send callbacks to, e.g. `myapp.com`
    pub provider_callback_host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
}
