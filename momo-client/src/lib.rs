//! # MoMo Client SDK
//!
//! A typed Rust client for the MTN Mobile Money (MoMo) open API.
//!
//! ```no_run
//! use momo_client::MomoClient;
//! use momo_types::PaymentOrder;
//!
//! # async fn run() -> Result<(), momo_client::ClientError> {
//! let mut client = MomoClient::sandbox("subscription-key")?;
//! let mut collection = client.collection();
//! collection.get_token("api-user-id", "api-key").await?;
//!
//! let order = PaymentOrder::new("46733123453", 500, "EUR").with_external_id("2323");
//! let transaction_id = collection.request_to_pay(&order).await?;
//! let status = collection.get_transaction(&transaction_id).await?;
//! println!("{:?}", status.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod collection;
pub mod disbursement;
pub mod error;
pub mod product;
pub mod remittance;
pub mod sandbox;

pub use client::{
    ApiResponse, MomoClient, MomoRequest, SANDBOX_BASE_URL, SANDBOX_ENVIRONMENT,
};
pub use collection::Collection;
pub use disbursement::Disbursement;
pub use error::ClientError;
pub use product::ProductApi;
pub use remittance::Remittance;
pub use sandbox::{Sandbox, SandboxUser};
