//! Product areas of the MoMo API and their URL templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The money-moving products. Each lives under its own path prefix and
/// issues its own bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Collection,
    Disbursement,
    Remittance,
}

impl Product {
    /// Path prefix, relative to the API base URL.
    pub fn prefix(&self) -> &'static str {
        match self {
            Product::Collection => "collection",
            Product::Disbursement => "disbursement",
            Product::Remittance => "remittance",
        }
    }

    /// Resource that payments are created under: collections "request to
    /// pay", the others "transfer".
    pub fn payment_resource(&self) -> &'static str {
        match self {
            Product::Collection => "requesttopay",
            Product::Disbursement | Product::Remittance => "transfer",
        }
    }

    /// `POST` here with Basic auth to obtain a bearer token.
    pub fn token_path(&self) -> String {
        format!("{}/token/", self.prefix())
    }

    pub fn payment_path(&self) -> String {
        format!("{}/v1_0/{}", self.prefix(), self.payment_resource())
    }

    pub fn payment_status_path(&self, reference_id: impl fmt::Display) -> String {
        format!("{}/{}", self.payment_path(), reference_id)
    }

    pub fn balance_path(&self) -> String {
        format!("{}/v1_0/account/balance", self.prefix())
    }

    pub fn account_holder_active_path(&self, id_type: &str, id: &str) -> String {
        format!(
            "{}/v1_0/accountholder/{}/{}/active",
            self.prefix(),
            id_type,
            id
        )
    }

    pub fn all() -> &'static [Product] {
        &[Product::Collection, Product::Disbursement, Product::Remittance]
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl std::str::FromStr for Product {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collection" => Ok(Product::Collection),
            "disbursement" => Ok(Product::Disbursement),
            "remittance" => Ok(Product::Remittance),
            _ => Err(format!(
                "Unknown product: {}. Supported: collection, disbursement, remittance",
                s
            )),
        }
    }
}
