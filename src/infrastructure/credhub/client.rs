use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, info, instrument, warn};

use super::token_cache::{AuthToken, TokenCache};
use super::types::{DataResponse, FindResponse, InfoResponse, SetCredentialRequest, TokenResponse};
use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::{CredHubConfig, Credential, CredentialSummary, VALUE_TYPE};
use crate::domain::ports::CredentialStore;
use crate::infrastructure::logging::redact;

const DATA_PATH: &str = "/api/v1/data";

/// Configuration for the CredHub client
#[derive(Clone)]
pub struct CredHubClientConfig {
    /// Store base URL, or a bare `host:port` which implies HTTPS
    pub base_url: String,

    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Total request timeout in seconds
    pub timeout_secs: u64,

    /// Accept invalid TLS certificates
    pub skip_tls_validation: bool,

    /// Re-authenticate and replay once when the store rejects a cached token
    pub reauth_on_unauthorized: bool,
}

impl Default for CredHubClientConfig {
    fn default() -> Self {
        Self::from(&CredHubConfig::default())
    }
}

impl From<&CredHubConfig> for CredHubClientConfig {
    fn from(config: &CredHubConfig) -> Self {
        Self {
            base_url: config.addr.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            timeout_secs: config.timeout_secs,
            skip_tls_validation: config.skip_tls_validation,
            reauth_on_unauthorized: config.reauth_on_unauthorized,
        }
    }
}

impl std::fmt::Debug for CredHubClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredHubClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("timeout_secs", &self.timeout_secs)
            .field("skip_tls_validation", &self.skip_tls_validation)
            .field("reauth_on_unauthorized", &self.reauth_on_unauthorized)
            .finish()
    }
}

/// Turn a configured store address into a base URL.
///
/// `host:port` gets `https://` prepended; anything with a scheme is used as is.
pub fn normalize_base_url(addr: &str) -> String {
    let addr = addr.trim().trim_end_matches('/');
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("https://{addr}")
    }
}

/// HTTP client for a CredHub-compatible credential store
///
/// One instance per process. The discovered authorization-server URL and the
/// bearer token live in the instance's [`TokenCache`]; nothing is persisted.
pub struct CredHubClient {
    http_client: ReqwestClient,
    base_url: String,
    client_id: String,
    client_secret: String,
    reauth_on_unauthorized: bool,
    tokens: TokenCache,
}

impl CredHubClient {
    /// Create a new client. No network traffic happens until the first call.
    pub fn new(config: CredHubClientConfig) -> StoreResult<Self> {
        let base_url = normalize_base_url(&config.base_url);

        info!(
            base_url = %base_url,
            client_id = %config.client_id,
            timeout_secs = config.timeout_secs,
            skip_tls_validation = config.skip_tls_validation,
            "initializing credhub client"
        );

        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = ReqwestClient::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .danger_accept_invalid_certs(config.skip_tls_validation)
            .user_agent(concat!("cfs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            client_id: config.client_id,
            client_secret: config.client_secret,
            reauth_on_unauthorized: config.reauth_on_unauthorized,
            tokens: TokenCache::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_cache(&self) -> &TokenCache {
        &self.tokens
    }

    /// Ask the store where its authorization server lives.
    async fn discover_auth_server(&self) -> StoreResult<String> {
        let url = format!("{}/info", self.base_url);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let body = expect_success(response).await?;
        let info: InfoResponse = serde_json::from_str(&body)?;

        let auth_url = info.auth_server.url.trim_end_matches('/').to_string();
        if auth_url.is_empty() {
            return Err(StoreError::malformed("info response has no auth-server url"));
        }

        info!(auth_server = %auth_url, "discovered authorization server");
        Ok(auth_url)
    }

    /// Client-credentials grant against the authorization server.
    async fn exchange_client_credentials(&self, auth_url: &str) -> StoreResult<AuthToken> {
        let url = format!("{auth_url}/oauth/token");
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(%status, client_id = %self.client_id, "token exchange rejected");
                return Err(StoreError::Unauthorized(format!(
                    "authorization server rejected client '{}': {}",
                    self.client_id, body
                )));
            }
            _ => return Err(StoreError::TokenExchangeFailed { status, body }),
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        if token.access_token.is_empty() {
            return Err(StoreError::malformed("token response has no access_token"));
        }

        debug!(token = %redact(&token.access_token), "acquired bearer token");
        Ok(AuthToken::new(token.access_token))
    }

    /// Cached token, or a fresh one (discovering the authorization server first
    /// if needed).
    async fn bearer_token(&self) -> StoreResult<AuthToken> {
        if let Some(token) = self.tokens.token().await {
            return Ok(token);
        }

        let auth_url = self
            .tokens
            .auth_server_url(|| self.discover_auth_server())
            .await?;
        let token = self.exchange_client_credentials(auth_url).await?;
        Ok(self.tokens.store(token).await)
    }

    fn data_request(
        &self,
        method: &Method,
        query: Option<(&str, &str)>,
        body: Option<&SetCredentialRequest<'_>>,
        token: &AuthToken,
    ) -> RequestBuilder {
        let mut request = self
            .http_client
            .request(method.clone(), format!("{}{}", self.base_url, DATA_PATH))
            .bearer_auth(token.secret());
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }

    /// Send an authorized request to the data endpoint.
    ///
    /// If the store rejects a token that came from the cache, the token is
    /// dropped and the request replayed once with a fresh one.
    async fn send_authorized(
        &self,
        method: Method,
        query: Option<(&str, &str)>,
        body: Option<&SetCredentialRequest<'_>>,
    ) -> StoreResult<Response> {
        let was_cached = self.tokens.token().await.is_some();
        let token = self.bearer_token().await?;

        debug!(%method, ?query, "{}{}", self.base_url, DATA_PATH);
        let response = self.data_request(&method, query, body, &token).send().await?;

        if response.status() != StatusCode::UNAUTHORIZED
            || !was_cached
            || !self.reauth_on_unauthorized
        {
            return Ok(response);
        }

        warn!("store rejected cached token, re-authenticating once");
        self.tokens.invalidate(&token).await;
        let token = self.bearer_token().await?;
        Ok(self.data_request(&method, query, body, &token).send().await?)
    }
}

/// Read the body of a response, failing on any non-2xx status.
async fn expect_success(response: Response) -> StoreResult<String> {
    let status = response.status();
    let body = response.text().await?;
    check_status(status, body)
}

fn check_status(status: StatusCode, body: String) -> StoreResult<String> {
    if status.is_success() {
        return Ok(body);
    }

    warn!(%status, "unexpected response status");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized(
            format!("got {status}: {body}"),
        )),
        _ => Err(StoreError::ServerError { status, body }),
    }
}

/// Like [`expect_success`], but a 404 means the named credential does not exist.
async fn expect_found(response: Response, name: &str) -> StoreResult<String> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound {
            name: name.to_string(),
        });
    }
    expect_success(response).await
}

#[async_trait]
impl CredentialStore for CredHubClient {
    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> StoreResult<Credential> {
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let response = self
            .send_authorized(Method::GET, Some(("name", name)), None)
            .await?;
        let body = expect_found(response, name).await?;
        let payload: DataResponse = serde_json::from_str(&body)?;

        let mut data = payload.data.unwrap_or_default();
        match data.len() {
            0 => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(data.remove(0)),
            count => Err(StoreError::Ambiguous {
                name: name.to_string(),
                count,
            }),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_path(&self, path: &str) -> StoreResult<Vec<CredentialSummary>> {
        let response = self
            .send_authorized(Method::GET, Some(("path", path)), None)
            .await?;
        let body = expect_found(response, path).await?;
        let payload: FindResponse = serde_json::from_str(&body)?;

        let mut credentials = payload.credentials.unwrap_or_default();
        credentials.retain(|credential| credential.name != path);
        debug!(count = credentials.len(), "path search complete");
        Ok(credentials)
    }

    #[instrument(skip(self))]
    async fn delete_by_name(&self, name: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let response = self
            .send_authorized(Method::DELETE, Some(("name", name)), None)
            .await?;
        expect_found(response, name).await?;
        info!("deleted credential");
        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn set_by_name(&self, name: &str, value: &str) -> StoreResult<Credential> {
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        if value.is_empty() {
            return Err(StoreError::InvalidValue);
        }

        let request = SetCredentialRequest {
            name,
            credential_type: VALUE_TYPE,
            value,
        };
        let response = self
            .send_authorized(Method::PUT, None, Some(&request))
            .await?;
        let body = expect_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
