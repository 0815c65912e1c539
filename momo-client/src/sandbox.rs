//! Sandbox API user provisioning.
//!
//! Creating a user and generating its key are two calls: the user id is the
//! reference id of the creation request, and the key is fetched for that id.

use momo_types::{ApiKeyResponse, ApiUserRequest, ReferenceId};
use reqwest::{Method, StatusCode};

use crate::client::MomoClient;
use crate::error::ClientError;

const API_USER_PATH: &str = "v1_0/apiuser";

/// Credentials of a freshly provisioned sandbox user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxUser {
    pub user_id: ReferenceId,
    pub api_key: String,
}

pub struct Sandbox<'a> {
    client: &'a MomoClient,
}

impl<'a> Sandbox<'a> {
    pub(crate) fn new(client: &'a MomoClient) -> Self {
        Self { client }
    }

    /// Creates an API user whose callbacks go to `callback_host`.
    ///
    /// Returns the new user's id.
    pub async fn create_sandbox_user(
        &self,
        callback_host: &str,
    ) -> Result<ReferenceId, ClientError> {
        let body = ApiUserRequest {
            provider_callback_host: callback_host.to_string(),
        };
        let response = self
            .client
            .request(Method::POST, API_USER_PATH)?
            .json(&body)?
            .send()
            .await?
            .expect_status(StatusCode::CREATED)?;

        tracing::info!(user_id = %response.reference_id, "created sandbox user");
        Ok(response.reference_id)
    }

    /// Generates an API key for an existing sandbox user.
    pub async fn generate_api_key(
        &self,
        user_id: &ReferenceId,
    ) -> Result<ApiKeyResponse, ClientError> {
        self.client
            .request(Method::POST, &format!("{}/{}/apikey", API_USER_PATH, user_id))?
            .send()
            .await?
            .expect_status(StatusCode::CREATED)?
            .json()
    }

    /// Creates a user and generates its key.
    pub async fn provision(&self, callback_host: &str) -> Result<SandboxUser, ClientError> {
        let user_id = self.create_sandbox_user(callback_host).await?;
        let key = self.generate_api_key(&user_id).await?;
        Ok(SandboxUser {
            user_id,
            api_key: key.api_key,
        })
    }
}
