use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, LnPayError};
use crate::types::{LnTx, Wal};
use crate::wallet::Wallet;

/// Production API origin. Override with [`Client::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://api.lnpay.co/v1";

/// LNPay API client.
///
/// Holds the caller's API key and the base URL; every operation is one HTTP
/// round trip. Construction never touches the network and performs no key
/// validation. `Clone` is cheap (the underlying `reqwest::Client` is shared),
/// and a `Client` can be used from concurrent tasks.
///
/// The client sets no request timeout and never retries; wrap the supplied
/// `reqwest::Client` (see [`Client::with_http_client`]) to layer either.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Create a client for the production API. Pass your main API key
    /// (`sak_...` / `pak_...`) from the LNPay developer dashboard.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default API origin.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Create a client with a caller-configured `reqwest::Client` (timeouts,
    /// proxies, pooling).
    pub fn with_http_client(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a Lightning transaction by id.
    ///
    /// `GET /lntx/{id}`
    pub async fn transaction(&self, lntx_id: &str) -> Result<LnTx, LnPayError> {
        let url = format!("{}/lntx/{}", self.base_url, lntx_id);
        self.request(Method::GET, &url, None::<&()>).await
    }

    /// Create a new wallet with a descriptive label, returning its metadata
    /// snapshot including the freshly issued access keys. Pass one of those
    /// keys to [`Client::wallet`] to operate on it.
    ///
    /// `POST /wallet`
    pub async fn create_wallet(&self, label: &str) -> Result<Wal, LnPayError> {
        let url = format!("{}/wallet", self.base_url);
        let body = serde_json::json!({ "user_label": label });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Handle on an existing wallet. `key` may be the admin, invoice or
    /// read-only key; privilege is enforced server-side. Pure construction,
    /// no network I/O.
    pub fn wallet(&self, key: &str) -> Wallet {
        Wallet::new(self.clone(), key)
    }

    /// One round trip: send, check status, decode.
    ///
    /// Status < 300 decodes the body into `T`; anything else decodes the body
    /// into [`ApiError`] and returns it as the failure.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, LnPayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut req = self
            .http
            .request(method.clone(), url)
            .header("X-Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(%method, url, %status, "lnpay response");

        if status.as_u16() >= 300 {
            let bytes = resp.bytes().await?;
            return Err(LnPayError::Api(ApiError::from_body(status.as_u16(), &bytes)));
        }

        Ok(resp.json().await?)
    }
}
