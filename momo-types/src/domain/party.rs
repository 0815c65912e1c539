//! Parties to a payment: the payer of a collection or the payee of a transfer.

use serde::{Deserialize, Serialize};

/// How a party is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyIdType {
    /// Mobile number in international format without the leading `+`.
    Msisdn,
    Email,
    PartyCode,
}

impl PartyIdType {
    /// Path segment used by the account holder endpoints.
    pub fn path_segment(&self) -> &'static str {
        match self {
            PartyIdType::Msisdn => "msisdn",
            PartyIdType::Email => "email",
            PartyIdType::PartyCode => "party_code",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub party_id_type: PartyIdType,
    pub party_id: String,
}

impl Party {
    pub fn msisdn(number: impl Into<String>) -> Self {
        Self {
            party_id_type: PartyIdType::Msisdn,
            party_id: number.into(),
        }
    }
}
