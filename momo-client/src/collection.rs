//! Collections: request payments from consumers (bills, fees, taxes).

use momo_types::{
    BalanceResponse, PaymentOrder, PaymentStatusResponse, Product, ReferenceId, TokenResponse,
};

use crate::client::MomoClient;
use crate::error::ClientError;
use crate::product::ProductApi;

pub struct Collection<'a> {
    api: ProductApi<'a>,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(client: &'a mut MomoClient) -> Self {
        Self {
            api: ProductApi::new(client, Product::Collection),
        }
    }

    /// Obtains a Collections bearer token and stores it on the client.
    pub async fn get_token(
        &mut self,
        api_user: &str,
        api_key: &str,
    ) -> Result<TokenResponse, ClientError> {
        self.api.get_token(api_user, api_key).await
    }

    /// Requests a payment from the payer named in `order`.
    ///
    /// Returns the transaction id to poll with [`Collection::get_transaction`].
    pub async fn request_to_pay(&self, order: &PaymentOrder) -> Result<ReferenceId, ClientError> {
        self.api.initiate(order).await
    }

    pub async fn get_transaction(
        &self,
        transaction_id: &ReferenceId,
    ) -> Result<PaymentStatusResponse, ClientError> {
        self.api.payment_status(transaction_id).await
    }

    pub async fn get_balance(&self) -> Result<BalanceResponse, ClientError> {
        self.api.get_balance().await
    }

    pub async fn is_payee_active(&self, msisdn: &str) -> Result<bool, ClientError> {
        self.api.is_payee_active(msisdn).await
    }
}
