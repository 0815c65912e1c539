//! Remittances: cross-border transfers to a payee's account.

use momo_types::{
    BalanceResponse, PaymentOrder, PaymentStatusResponse, Product, ReferenceId, TokenResponse,
};

use crate::client::MomoClient;
use crate::error::ClientError;
use crate::product::ProductApi;

/// Shares its endpoint shapes with [`crate::disbursement::Disbursement`].
pub struct Remittance<'a> {
    api: ProductApi<'a>,
}

impl<'a> Remittance<'a> {
    pub(crate) fn new(client: &'a mut MomoClient) -> Self {
        Self {
            api: ProductApi::new(client, Product::Remittance),
        }
    }

    pub async fn get_token(
        &mut self,
        api_user: &str,
        api_key: &str,
    ) -> Result<TokenResponse, ClientError> {
        self.api.get_token(api_user, api_key).await
    }

    /// Remits to the payee named in `order`; returns the transfer id.
    pub async fn transfer(&self, order: &PaymentOrder) -> Result<ReferenceId, ClientError> {
        self.api.initiate(order).await
    }

    pub async fn get_transfer(
        &self,
        transfer_id: &ReferenceId,
    ) -> Result<PaymentStatusResponse, ClientError> {
        self.api.payment_status(transfer_id).await
    }

    pub async fn get_balance(&self) -> Result<BalanceResponse, ClientError> {
        self.api.get_balance().await
    }

    pub async fn is_payee_active(&self, msisdn: &str) -> Result<bool, ClientError> {
        self.api.is_payee_active(msisdn).await
    }
}
