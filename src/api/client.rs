use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::classify::{self, BodyShape};
use super::endpoints::EndpointMap;
use super::error::ApiError;
use super::response::ApiResponse;
use crate::config::PortalConfig;

/// Budget for a whole call, from connect to the last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of the bearer token attached to outgoing requests.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Never authenticates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoToken;

impl TokenStore for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenStore for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Token kept in memory, e.g. after a successful login.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

impl TokenStore for InMemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }
}

/// Default headers for a JSON call, with `Authorization` when a token exists.
pub fn auth_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => log::warn!("Ignoring stored token that is not a valid header: {}", e),
        }
    }
    headers
}

/// Method, extra headers and encoded body of a single call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// JSON-encode `payload` as the body.
    pub fn json<B: Serialize + ?Sized>(method: Method, payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_vec(payload).map_err(|e| {
            ApiError::malformed_request(format!("Could not encode request body: {e}"))
        })?;
        Ok(Self {
            method,
            headers: HeaderMap::new(),
            body: Some(body),
        })
    }

    pub fn post<B: Serialize + ?Sized>(payload: &B) -> Result<Self, ApiError> {
        Self::json(Method::POST, payload)
    }

    /// Add a header that overrides the defaults.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Gateway through which every backend call goes.
///
/// Cheap to clone; clones share the connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Arc<EndpointMap>,
    tokens: Arc<dyn TokenStore>,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(endpoints: EndpointMap) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent(concat!("filemyrti-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::request_failed)?;
        Ok(Self::with_http_client(http, endpoints))
    }

    pub fn from_config(config: &PortalConfig) -> Result<Self, ApiError> {
        Self::new(EndpointMap::new(&config.api_base_url))
    }

    pub fn with_http_client(http: reqwest::Client, endpoints: EndpointMap) -> Self {
        Self {
            http,
            endpoints: Arc::new(endpoints),
            tokens: Arc::new(NoToken),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Override [`REQUEST_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Execute one call and normalize its outcome.
    ///
    /// The call future is dropped, and the request with it, when the timeout
    /// elapses first.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        let result = self
            .within_budget(endpoint, self.dispatch(endpoint, options))
            .await;
        if let Err(error) = &result {
            report_failure(endpoint, error);
        }
        result
    }

    pub(crate) async fn within_budget<F, R>(&self, endpoint: &str, call: F) -> Result<R, ApiError>
    where
        F: std::future::Future<Output = Result<R, ApiError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                log::debug!("Call to {} exceeded {:?}", endpoint, self.timeout);
                Err(ApiError::timeout())
            }
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        let mut headers = auth_headers(self.tokens.token().as_deref());
        headers.extend(options.headers);

        let mut request = self.http.request(options.method, endpoint).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify::classify_transport(&e, endpoint))?;
        read_response(response, BodyShape::Enveloped, endpoint).await
    }
}

/// Read a response fully and classify it according to `shape`.
pub(crate) async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
    shape: BodyShape,
    endpoint: &str,
) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let content_type = classify::content_type(response.headers()).map(str::to_string);
    let request_id = classify::request_id(response.headers());

    let text = response
        .text()
        .await
        .map_err(|e| classify::classify_transport(&e, endpoint))?;
    let body = shape.parse(content_type.as_deref(), text)?;

    if !status.is_success() {
        return Err(classify::classify_rejection(shape, status, request_id, body));
    }
    classify::into_api_response(body)
}

#[cfg(feature = "dev-diagnostics")]
pub(crate) fn report_failure(endpoint: &str, error: &ApiError) {
    log::error!(
        "API Error: endpoint={} status={} kind={:?} message={:?} errors={:?} request_id={:?}",
        endpoint,
        error.status_code,
        error.kind,
        error.message,
        error.errors,
        error.request_id
    );
}

#[cfg(not(feature = "dev-diagnostics"))]
pub(crate) fn report_failure(_endpoint: &str, _error: &ApiError) {}
