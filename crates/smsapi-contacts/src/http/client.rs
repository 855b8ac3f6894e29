/*
[INPUT]:  HTTP configuration (server URL, timeouts) and the shared session
[OUTPUT]: Authenticated reqwest requests and decoded JSON responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing response handling
*/

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{Session, SessionManager};
use crate::http::{Result, SmsapiError};

/// Default SMSAPI server
const DEFAULT_SERVER: &str = "https://api.smsapi.pl/";
const DEFAULT_USER_AGENT: &str = concat!("smsapi-contacts/", env!("CARGO_PKG_VERSION"));
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;
const ERROR_BODY_LOG_MAX_BYTES: usize = 512;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another server
    pub fn with_server(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Self::default()
        }
    }
}

/// How an endpoint expects credentials and reports errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStyle {
    /// REST resources (`contacts/...`, `profile`): auth via header
    Rest,
    /// `*.do` endpoints: credentials as params, errors in a 200 body
    Legacy,
}

/// Main HTTP client for the SMSAPI contacts API
///
/// Clones share the connection pool and the session, so logging in through
/// one clone authenticates every other.
#[derive(Debug, Clone)]
pub struct SmsapiClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
    session: SessionManager,
}

impl SmsapiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.server)?,
            timeout: config.timeout,
            session: SessionManager::new(),
        })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Shared session state
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Build full URL from endpoint path segments (percent-encoded)
    fn endpoint_url<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url> {
        if segments.is_empty() || segments.iter().any(|s| s.as_ref().trim().is_empty()) {
            return Err(SmsapiError::InvalidParams(
                "endpoint path segments must not be empty".to_string(),
            ));
        }
        // Dot segments would be collapsed and retarget the request
        if let Some(dot) = segments
            .iter()
            .map(AsRef::as_ref)
            .find(|s| matches!(s.trim(), "." | ".."))
        {
            return Err(SmsapiError::InvalidParams(format!(
                "endpoint path segment {dot:?} is not allowed"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SmsapiError::Config("server URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments.iter().map(AsRef::as_ref));
        Ok(url)
    }

    /// Build a request using the current session
    pub(crate) fn build_request<S: AsRef<str>>(
        &self,
        method: Method,
        endpoint: &[S],
        style: ApiStyle,
        params: Vec<(String, String)>,
    ) -> Result<RequestBuilder> {
        let session = self.session.get().ok_or_else(SmsapiError::not_logged_in)?;
        self.build_request_with_session(&session, method, endpoint, style, params)
    }

    /// Build a request authenticated with an explicit session
    ///
    /// Query string for GET/DELETE, form body otherwise.
    pub(crate) fn build_request_with_session<S: AsRef<str>>(
        &self,
        session: &Session,
        method: Method,
        endpoint: &[S],
        style: ApiStyle,
        mut params: Vec<(String, String)>,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        let mut builder = self.http_client.request(method.clone(), url);

        match (session, style) {
            (
                Session::Password {
                    username,
                    password_hash,
                },
                ApiStyle::Rest,
            ) => {
                builder = builder.basic_auth(username, Some(password_hash));
            }
            (
                Session::Password {
                    username,
                    password_hash,
                },
                ApiStyle::Legacy,
            ) => {
                params.insert(0, ("password".to_string(), password_hash.clone()));
                params.insert(0, ("username".to_string(), username.clone()));
            }
            (Session::OAuth { token }, _) => {
                builder = builder.bearer_auth(token);
            }
        }

        if method == Method::GET || method == Method::DELETE {
            if !params.is_empty() {
                builder = builder.query(&params);
            }
        } else {
            builder = builder.form(&params);
        }

        Ok(builder)
    }

    /// Execute a request and decode its JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        style: ApiStyle,
    ) -> Result<T> {
        self.send_optional_json(builder, style).await?.ok_or_else(|| {
            SmsapiError::InvalidResponse("expected JSON body, got empty response".to_string())
        })
    }

    /// Execute a request whose JSON body may be absent (204 or empty 2xx)
    pub(crate) async fn send_optional_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        style: ApiStyle,
    ) -> Result<Option<T>> {
        let body = self.send_checked(builder, style).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Execute a request whose body carries nothing of interest
    pub(crate) async fn send_empty(&self, builder: RequestBuilder, style: ApiStyle) -> Result<()> {
        self.send_checked(builder, style).await.map(|_| ())
    }

    async fn send_checked(&self, builder: RequestBuilder, style: ApiStyle) -> Result<String> {
        let request = builder.build()?;
        debug!(method = %request.method(), path = request.url().path(), "sending request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|err| self.map_transport_error(err))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let body = response
            .text()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        if let Err(err) = check_response(style, status, retry_after, &body) {
            warn!(
                status = status.as_u16(),
                error = %err,
                body = truncate(&body, ERROR_BODY_LOG_MAX_BYTES),
                "request failed"
            );
            return Err(err);
        }

        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(body)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SmsapiError {
        if err.is_timeout() {
            SmsapiError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            SmsapiError::Http(err)
        }
    }
}

fn parse_base_url(server: &str) -> Result<Url> {
    let server = server.trim();
    if server.is_empty() {
        return Err(SmsapiError::Config("server URL is empty".to_string()));
    }

    let mut url = Url::parse(server)
        .map_err(|e| SmsapiError::Config(format!("invalid server URL {server}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(SmsapiError::Config(format!(
            "server URL {server} cannot be used as a base"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Map status and body onto the crate error type
fn check_response(
    style: ApiStyle,
    status: StatusCode,
    retry_after: Option<u64>,
    body: &str,
) -> Result<()> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok();

    if status.is_success() {
        if style != ApiStyle::Legacy {
            return Ok(());
        }
        // Legacy endpoints answer 200 with {"error": code, "message": ...}
        if let Some(code) = json
            .as_ref()
            .and_then(|value| value.get("error"))
            .and_then(|value| value.as_i64())
        {
            return Err(SmsapiError::legacy_error(
                code,
                error_message(json.as_ref(), body),
            ));
        }
        return Ok(());
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SmsapiError::RateLimit {
            retry_after: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        });
    }

    Err(SmsapiError::api_error(status, error_message(json.as_ref(), body)))
}

fn error_message(json: Option<&serde_json::Value>, body: &str) -> String {
    json.and_then(|value| value.get("message"))
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
