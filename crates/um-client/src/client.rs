//! Core HTTP client: GET and authenticated POST against the configured
//! base URL, including secret-key acquisition.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::endpoint::EndpointConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::params::ParamSet;
use crate::response::ApiResponse;
use crate::{AUTH_PATH, SECRET_KEY_PARAM};

/// Fixed Authorization value sent on the `auth` call.
///
/// The remote service expects this static stub scheme on the auth endpoint
/// while the real username/password travel in the form body. Deriving the
/// header from the configured credentials would change the wire contract.
const BASIC_AUTH_PLACEHOLDER: &str = "Basic Og==";

/// HTTP client for the user-management API.
///
/// Holds one shared connection pool for its whole lifetime; cloning is
/// cheap and clones share the pool. Write operations acquire a fresh
/// secret key per call and inject it under the reserved `secretKey`
/// parameter before dispatch.
///
/// # Example
///
/// ```rust,ignore
/// use um_client::{EndpointConfig, HttpApiClient, ParamSet};
///
/// let endpoint = EndpointConfig::new("http://localhost:8080", "admin", "pw")?;
/// let client = HttpApiClient::new(endpoint)?;
///
/// let response = client.get("user/42").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    inner: reqwest::Client,
    endpoint: EndpointConfig,
    config: ClientConfig,
}

impl HttpApiClient {
    /// Create a new client with default configuration.
    pub fn new(endpoint: EndpointConfig) -> Result<Self> {
        Self::with_config(endpoint, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(endpoint: EndpointConfig, config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            endpoint,
            config,
        })
    }

    /// Get the endpoint configuration.
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET request against `base_url` joined with `path`.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint.url(path);
        let request = self.inner.get(&url);
        self.dispatch(request, &url).await
    }

    /// Issue an authenticated POST: fetch a secret key, inject it into the
    /// parameter set under `secretKey`, and submit the form-encoded body.
    ///
    /// A credential-acquisition failure propagates unchanged.
    #[instrument(skip(self, params), fields(params = params.len()))]
    pub async fn post_authenticated(
        &self,
        path: &str,
        mut params: ParamSet,
    ) -> Result<ApiResponse> {
        let secret_key = self.fetch_secret_key().await?;
        params.insert(SECRET_KEY_PARAM, secret_key);
        self.post_form(path, &params, None).await
    }

    /// Acquire a secret key from the `auth` endpoint.
    ///
    /// Fetched fresh on every authenticated write; no caching or expiry
    /// tracking. A non-success auth response is an authentication error,
    /// never a credential.
    #[instrument(skip(self))]
    pub(crate) async fn fetch_secret_key(&self) -> Result<String> {
        let params: ParamSet = [
            ("username", self.endpoint.username()),
            ("password", self.endpoint.password()),
        ]
        .into_iter()
        .collect();

        let response = self
            .post_form(AUTH_PATH, &params, Some(("Authorization", BASIC_AUTH_PLACEHOLDER)))
            .await?;

        if !response.is_success() {
            return Err(Error::new(ErrorKind::Authentication {
                status: response.status(),
                body: response.into_body(),
            }));
        }

        Ok(response.into_body())
    }

    /// POST a form-encoded parameter set, optionally with one extra header.
    async fn post_form(
        &self,
        path: &str,
        params: &ParamSet,
        extra_header: Option<(&str, &str)>,
    ) -> Result<ApiResponse> {
        let url = self.endpoint.url(path);
        let body = params.encode()?;

        let mut request = self
            .inner
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);

        if let Some((name, value)) = extra_header {
            request = request.header(name, value);
        }

        self.dispatch(request, &url).await
    }

    /// Send a request and buffer the outcome, wrapping network-level
    /// failures with the target URL.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<ApiResponse> {
        if self.config.enable_tracing {
            debug!(url, "sending request");
        }

        let transport = |e: reqwest::Error| {
            Error::with_source(
                ErrorKind::Transport {
                    url: url.to_string(),
                },
                e,
            )
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        if self.config.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, "response received");
            } else {
                info!(status, "non-success response");
            }
        }

        Ok(ApiResponse::new(status, body))
    }
}
