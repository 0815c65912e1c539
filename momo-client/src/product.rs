//! Operations shared by Collections, Disbursements and Remittances.
//!
//! The three money products expose the same endpoints under different path
//! prefixes; only the payment body differs (collections name the payer,
//! transfers name the payee).

use momo_types::{
    BalanceResponse, Party, PaymentOrder, PaymentRequest, PaymentStatusResponse, Product,
    ReferenceId, TokenResponse, TransferRequest,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::client::MomoClient;
use crate::error::ClientError;

/// The only currency the sandbox accepts.
pub const SANDBOX_CURRENCY: &str = "EUR";

/// A money product bound to a client.
pub struct ProductApi<'a> {
    client: &'a mut MomoClient,
    product: Product,
}

impl<'a> ProductApi<'a> {
    pub(crate) fn new(client: &'a mut MomoClient, product: Product) -> Self {
        Self { client, product }
    }

    pub fn product(&self) -> Product {
        self.product
    }

    /// Exchanges API user credentials for a bearer token and stores it on the
    /// client, replacing any previous token.
    pub async fn get_token(
        &mut self,
        api_user: &str,
        api_key: &str,
    ) -> Result<TokenResponse, ClientError> {
        let response = self
            .client
            .request(Method::POST, &self.product.token_path())?
            .basic_auth(api_user, api_key)
            .send()
            .await?
            .expect_status(StatusCode::OK)?;

        let token: TokenResponse = response.json()?;
        self.client.set_token(token.access_token.clone());
        tracing::info!(
            product = %self.product,
            expires_in = token.expires_in,
            "stored bearer token"
        );
        Ok(token)
    }

    /// Initiates a payment and returns its reference id, which is the handle
    /// for [`ProductApi::payment_status`].
    ///
    /// The provider accepts asynchronously (`202 Accepted`); the outcome is
    /// only known from a later status lookup.
    pub async fn initiate(&self, order: &PaymentOrder) -> Result<ReferenceId, ClientError> {
        let order = self.localize(order);
        let request = self
            .client
            .request(Method::POST, &self.product.payment_path())?;
        let request = match self.product {
            Product::Collection => request.json(&PaymentRequest::from(&order))?,
            Product::Disbursement | Product::Remittance => {
                request.json(&TransferRequest::from(&order))?
            }
        };

        let response = request.send().await?.expect_status(StatusCode::ACCEPTED)?;
        tracing::info!(
            product = %self.product,
            reference_id = %response.reference_id,
            external_id = %order.external_id,
            "payment accepted"
        );
        Ok(response.reference_id)
    }

    pub async fn payment_status(
        &self,
        reference_id: &ReferenceId,
    ) -> Result<PaymentStatusResponse, ClientError> {
        self.get_json(&self.product.payment_status_path(reference_id))
            .await
    }

    pub async fn get_balance(&self) -> Result<BalanceResponse, ClientError> {
        self.get_json(&self.product.balance_path()).await
    }

    /// Checks that a mobile number belongs to a registered, active account.
    pub async fn is_payee_active(&self, msisdn: &str) -> Result<bool, ClientError> {
        self.is_account_holder_active(&Party::msisdn(msisdn)).await
    }

    /// `Ok(true)` on `200 OK`; any other status is an error.
    pub async fn is_account_holder_active(&self, party: &Party) -> Result<bool, ClientError> {
        let path = self
            .product
            .account_holder_active_path(party.party_id_type.path_segment(), &party.party_id);
        self.client
            .request(Method::GET, &path)?
            .send()
            .await?
            .expect_status(StatusCode::OK)?;
        Ok(true)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.client
            .request(Method::GET, path)?
            .send()
            .await?
            .expect_status(StatusCode::OK)?
            .json()
    }

    /// The sandbox only settles in EUR, whatever currency was asked for.
    fn localize(&self, order: &PaymentOrder) -> PaymentOrder {
        let mut order = order.clone();
        if self.client.is_sandbox() && order.currency != SANDBOX_CURRENCY {
            tracing::debug!(
                requested = %order.currency,
                "sandbox environment, sending {SANDBOX_CURRENCY}"
            );
            order.currency = SANDBOX_CURRENCY.to_string();
        }
        order
    }
}
