//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiErrorBody, BaseUrl, ClientConfig, MessageResource, SendSms, ValidationError,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url.clone()).json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwilioClient`].
///
/// [`TwilioError::Transport`] and [`TwilioError::HttpStatus`] are transport-class
/// failures (see [`TwilioError::is_transport`]); [`TwilioError::Decode`] means the
/// server answered 2xx with a body that is not a message resource.
pub enum TwilioError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus {
        status: u16,
        body: Option<String>,
        api_error: Option<ApiErrorBody>,
    },

    /// Response body could not be decoded as a message resource.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TwilioError {
    /// `true` for network failures and non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// HTTP status of a non-2xx response, if that is what this error is.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TwilioClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TwilioClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwilioClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            timeout: None,
            user_agent: None,
        }
    }

    /// Point the client at a different API root (a proxy or a local test server).
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.config.set_base_url(base_url);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TwilioClient`].
    pub fn build(self) -> Result<TwilioClient, TwilioError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TwilioError::Transport(Box::new(err)))?;

        Ok(TwilioClient::with_transport(
            self.config,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// High-level client for the Messages endpoint.
///
/// Each [`TwilioClient::send_sms`] call issues exactly one
/// `POST {base_url}/Accounts/{account_sid}/Messages.json` with a JSON body
/// `{"from", "to", "body"}`. Nothing is retried or cached, and clones share the
/// underlying HTTP connection pool.
pub struct TwilioClient {
    config: ClientConfig,
    messages_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioClient")
            .field("config", &self.config)
            .field("messages_url", &self.messages_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TwilioClient {
    /// Create a client with a default HTTP client.
    ///
    /// For more customization, use [`TwilioClient::builder`].
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(
            config,
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    pub fn builder(config: ClientConfig) -> TwilioClientBuilder {
        TwilioClientBuilder::new(config)
    }

    fn with_transport(config: ClientConfig, http: Arc<dyn HttpTransport>) -> Self {
        let messages_url = config.messages_url();
        Self {
            config,
            messages_url,
            http,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `body` from `from` to `to`.
    ///
    /// The three strings are forwarded verbatim; the remote service decides whether
    /// they are acceptable. Every call issues exactly one request.
    ///
    /// Errors:
    /// - [`TwilioError::Transport`] / [`TwilioError::HttpStatus`] for network failures and
    ///   non-2xx responses,
    /// - [`TwilioError::Decode`] when a 2xx body is not a message resource.
    pub async fn send_sms(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<MessageResource, TwilioError> {
        self.send(SendSms::from_parts(from, to, body)).await
    }

    /// Send a prebuilt [`SendSms`] request.
    pub async fn send(&self, request: SendSms) -> Result<MessageResource, TwilioError> {
        tracing::debug!(
            url = %self.messages_url,
            account_sid = self.config.account_sid().as_str(),
            to = request.to(),
            "sending message"
        );

        let payload = crate::transport::encode_send_sms_json(&request);
        let response = self
            .http
            .post_json(&self.messages_url, payload)
            .await
            .map_err(TwilioError::Transport)?;

        tracing::debug!(status = response.status, "received response");

        if !(200..=299).contains(&response.status) {
            let api_error = crate::transport::decode_api_error_json(&response.body);
            tracing::warn!(
                status = response.status,
                code = ?api_error.as_ref().and_then(|it| it.code),
                "message request rejected"
            );
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(TwilioError::HttpStatus {
                status: response.status,
                body,
                api_error,
            });
        }

        crate::transport::decode_message_json_response(&response.body)
            .map_err(|err| TwilioError::Decode(Box::new(err)))
    }
}
