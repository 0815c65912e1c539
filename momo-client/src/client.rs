//! The shared request builder and response decoder.

use momo_types::{Product, ReferenceId};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::collection::Collection;
use crate::disbursement::Disbursement;
use crate::error::ClientError;
use crate::product::ProductApi;
use crate::remittance::Remittance;
use crate::sandbox::Sandbox;

/// Host of the provider's sandbox.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.momodeveloper.mtn.com/";

/// Target environment name of the sandbox.
pub const SANDBOX_ENVIRONMENT: &str = "sandbox";

pub const REFERENCE_ID_HEADER: HeaderName = HeaderName::from_static("x-reference-id");
pub const SUBSCRIPTION_KEY_HEADER: HeaderName =
    HeaderName::from_static("ocp-apim-subscription-key");
pub const TARGET_ENVIRONMENT_HEADER: HeaderName =
    HeaderName::from_static("x-target-environment");

const MEDIA_TYPE: &str = "application/json";

/// MoMo API client.
///
/// Owns the credentials every request carries. The bearer token is replaced
/// by each successful token exchange, which is why the product accessors
/// borrow the client mutably.
#[derive(Debug, Clone)]
pub struct MomoClient {
    base_url: Url,
    subscription_key: String,
    token: Option<String>,
    environment: Option<String>,
    http: Client,
}

impl MomoClient {
    /// Creates a new client.
    ///
    /// An empty `environment` omits the `X-Target-Environment` header.
    pub fn new(
        subscription_key: impl Into<String>,
        environment: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        // Normalize to a single trailing slash so relative paths join under it
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized).map_err(|source| ClientError::UrlParse {
            context: "Failed to parse base url",
            source,
        })?;
        let environment = environment.into();

        Ok(Self {
            base_url,
            subscription_key: subscription_key.into(),
            token: None,
            environment: (!environment.is_empty()).then_some(environment),
            http: Client::new(),
        })
    }

    /// Creates a client for the provider's sandbox.
    pub fn sandbox(subscription_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(subscription_key, SANDBOX_ENVIRONMENT, SANDBOX_BASE_URL)
    }

    /// Sets the bearer token up front, e.g. one cached from an earlier run.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Uses a preconfigured reqwest client (proxies, timeouts, TLS roots).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn is_sandbox(&self) -> bool {
        self.environment() == Some(SANDBOX_ENVIRONMENT)
    }

    /// Collections: request payments from consumers.
    pub fn collection(&mut self) -> Collection<'_> {
        Collection::new(self)
    }

    /// Disbursements: pay out to many accounts.
    pub fn disbursement(&mut self) -> Disbursement<'_> {
        Disbursement::new(self)
    }

    /// Remittances: cross-border transfers.
    pub fn remittance(&mut self) -> Remittance<'_> {
        Remittance::new(self)
    }

    /// Operations common to every money product, selected at runtime.
    pub fn product(&mut self, product: Product) -> ProductApi<'_> {
        ProductApi::new(self, product)
    }

    /// Sandbox API user provisioning.
    pub fn sandbox_users(&self) -> Sandbox<'_> {
        Sandbox::new(self)
    }

    /// Builds a request for `path`, relative to the base URL, carrying the
    /// standard headers and a fresh reference id.
    pub fn request(&self, method: Method, path: &str) -> Result<MomoRequest, ClientError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ClientError::UrlParse {
                context: "Failed to construct request URL",
                source,
            })?;
        let reference_id = ReferenceId::new();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        insert_header(&mut headers, REFERENCE_ID_HEADER, &reference_id.to_string())?;
        insert_header(&mut headers, SUBSCRIPTION_KEY_HEADER, &self.subscription_key)?;
        if let Some(environment) = &self.environment {
            insert_header(&mut headers, TARGET_ENVIRONMENT_HEADER, environment)?;
        }

        Ok(MomoRequest {
            http: self.http.clone(),
            method,
            url,
            reference_id,
            headers,
            auth: self.token.clone().map(Auth::Bearer),
            body: None,
        })
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: &str,
) -> Result<(), ClientError> {
    let value = HeaderValue::from_str(value).map_err(|source| ClientError::InvalidHeader {
        name: name.clone(),
        source,
    })?;
    headers.insert(name, value);
    Ok(())
}

#[derive(Debug, Clone)]
enum Auth {
    Bearer(String),
    Basic { user: String, key: String },
}

/// A request ready to send. Its reference id is fixed at build time.
#[derive(Debug)]
pub struct MomoRequest {
    http: Client,
    method: Method,
    url: Url,
    reference_id: ReferenceId,
    headers: HeaderMap,
    auth: Option<Auth>,
    body: Option<Vec<u8>>,
}

impl MomoRequest {
    pub fn reference_id(&self) -> ReferenceId {
        self.reference_id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Serializes `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Authenticates with Basic credentials instead of the bearer token.
    pub fn basic_auth(mut self, user: impl Into<String>, key: impl Into<String>) -> Self {
        self.auth = Some(Auth::Basic {
            user: user.into(),
            key: key.into(),
        });
        self
    }

    /// Sends the request and buffers the whole response.
    ///
    /// Any status is returned as `Ok`; classifying it is up to the caller.
    pub async fn send(self) -> Result<ApiResponse, ClientError> {
        tracing::debug!(
            method = %self.method,
            url = %self.url,
            reference_id = %self.reference_id,
            "sending MoMo request"
        );

        let mut req = self
            .http
            .request(self.method, self.url)
            .headers(self.headers);
        req = match self.auth {
            Some(Auth::Bearer(token)) => req.bearer_auth(token),
            Some(Auth::Basic { user, key }) => req.basic_auth(user, Some(key)),
            None => req,
        };
        if let Some(body) = self.body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        tracing::debug!(%status, reference_id = %self.reference_id, "MoMo response received");

        Ok(ApiResponse {
            status,
            body,
            headers,
            reference_id: self.reference_id,
        })
    }
}

/// A buffered response together with the reference id of the request that
/// produced it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
    pub reference_id: ReferenceId,
}

impl ApiResponse {
    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Passes the response through if its status is `expected`, otherwise
    /// turns it into [`ClientError::UnexpectedStatus`].
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, ClientError> {
        if self.status == expected {
            return Ok(self);
        }
        let body = self.text();
        tracing::warn!(
            status = %self.status,
            %expected,
            reference_id = %self.reference_id,
            body = %body,
            "unexpected status from MoMo"
        );
        Err(ClientError::UnexpectedStatus {
            status: self.status,
            body,
        })
    }
}
