//! HTTP transport layer for the Twitter/X API.
//!
//! This module defines the [`Transport`] trait the facade talks through,
//! the [`ApiResponse`] wrapper around JSON response bodies, and
//! [`OAuthTransport`], the production implementation that signs every
//! request with OAuth 1.0a and issues it over a pooled HTTP client.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::{mask_token, Credentials};
use crate::oauth;

/// Base URL that bare endpoint names resolve against.
pub const API_BASE: &str = "https://api.twitter.com/1.1";

/// Default request timeout applied to the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API endpoints used by the facade.
///
/// Bare names resolve to `{api_base}/{name}.json`; the search endpoint is a
/// full URL because the legacy search service lives on its own host.
pub mod endpoints {
    /// Identity verification for the held credentials.
    pub const VERIFY_CREDENTIALS: &str = "account/verify_credentials";
    /// Keyword search over recent posts.
    pub const SEARCH: &str = "https://search.twitter.com/search.json";
    /// Post a new status.
    pub const STATUS_UPDATE: &str = "statuses/update";
    /// Friendship existence check between two screen names.
    pub const FRIENDSHIP_EXISTS: &str = "friendships/exists";
    /// Follow an account.
    pub const FRIENDSHIP_CREATE: &str = "friendships/create";
    /// List pending direct messages.
    pub const DIRECT_MESSAGES: &str = "direct_messages";
    /// Delete one direct message by id.
    pub const DIRECT_MESSAGE_DESTROY: &str = "direct_messages/destroy";
    /// Bulk profile lookup by screen name.
    pub const USERS_LOOKUP: &str = "users/lookup";
}

/// Authenticated GET/POST access to the API.
///
/// The facade is generic over this trait so tests can substitute a scripted
/// transport. Endpoint strings are either bare names (resolved against the
/// API base by the implementation) or full URLs; params are ordered
/// key/value pairs that travel as the query string (GET) or form body
/// (POST).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues an authenticated GET request.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>>;

    /// Issues an authenticated POST request.
    async fn post(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>>;
}

/// A parsed JSON response body.
///
/// The API reports failures two ways: an `error` string field, or an
/// `errors` list. Successful payloads are endpoint-specific: a `results`
/// sequence for search, a bare top-level array for direct messages and
/// lookups, a bare boolean for the friendship check. This wrapper exposes
/// each shape without committing callers to a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    body: Value,
}

impl ApiResponse {
    /// Wraps an already-parsed JSON body.
    pub fn new(body: Value) -> Self {
        ApiResponse { body }
    }

    /// Returns the raw JSON body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Returns the error reported by the body, if any.
    ///
    /// Checks the `error` string field first, then the `errors` field
    /// (either a list of objects carrying `message`, or a bare value). An
    /// absent or empty `errors` list is not an error.
    pub fn error_message(&self) -> Option<String> {
        match self.body.get("error") {
            Some(Value::String(message)) => return Some(message.clone()),
            Some(Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }

        match self.body.get("errors") {
            Some(Value::Array(errors)) => {
                let first = errors.first()?;
                Some(
                    first
                        .get("message")
                        .and_then(|v| v.as_str())
                        .map(String::from)
                        .unwrap_or_else(|| first.to_string()),
                )
            }
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    /// Returns true when the body carries an error indicator.
    pub fn has_error(&self) -> bool {
        self.error_message().is_some()
    }

    /// Returns the `results` sequence, for search responses.
    pub fn results(&self) -> Option<&Vec<Value>> {
        self.body.get("results").and_then(|v| v.as_array())
    }

    /// Returns the body as a top-level array, for list responses.
    pub fn items(&self) -> Option<&Vec<Value>> {
        self.body.as_array()
    }

    /// Returns the body as a bare boolean, for the friendship check.
    pub fn as_bool(&self) -> Option<bool> {
        self.body.as_bool()
    }
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    // Replace control characters and newlines to prevent log injection
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' => ' ',
            '\r' => ' ',
            '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let cut: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", cut, text.len())
    } else {
        sanitized
    }
}

/// Production transport: OAuth 1.0a signed requests over a pooled client.
///
/// Holds the credentials and one `reqwest::Client` built with a request
/// timeout, so a hung call cannot block an operation indefinitely. The API
/// base is overridable, mainly so a relay or a local stand-in can be pointed
/// at during development.
pub struct OAuthTransport {
    client: Client,
    credentials: Credentials,
    api_base: String,
}

impl OAuthTransport {
    /// Creates a transport with the default request timeout.
    ///
    /// # Parameters
    ///
    /// - `credentials`: The OAuth 1.0a credentials used to sign every request
    ///
    /// # Returns
    ///
    /// - `Ok(OAuthTransport)`: Ready to issue requests
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If the HTTP client cannot be built
    pub fn new(credentials: Credentials) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_timeout(credentials, DEFAULT_TIMEOUT)
    }

    /// Creates a transport with an explicit request timeout.
    pub fn with_timeout(
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "Building API transport (timeout: {:?}, consumer key: {})",
            timeout,
            mask_token(&credentials.consumer_key)
        );
        let client = Client::builder().timeout(timeout).build()?;
        Ok(OAuthTransport {
            client,
            credentials,
            api_base: API_BASE.to_string(),
        })
    }

    /// Replaces the API base URL that bare endpoint names resolve against.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Resolves an endpoint to the URL to request.
    ///
    /// Full URLs pass through unchanged; bare names become
    /// `{api_base}/{name}.json`.
    fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}/{}.json", self.api_base, endpoint)
        }
    }

    /// Reads a response body, rejecting non-success statuses before parsing.
    async fn read_response(
        &self,
        verb: &str,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let status = response.status();
        info!("Received response with status: {} for {} {}", status, verb, endpoint);

        let response_text = response.text().await?;
        debug!("Response body: {}", sanitize_for_logging(&response_text, 200));

        if !status.is_success() {
            error!("{} {} failed - Status: {}", verb, endpoint, status);
            return Err(format!("Twitter API error for '{}' ({})", endpoint, status).into());
        }

        let body: Value = serde_json::from_str(&response_text)?;
        Ok(ApiResponse::new(body))
    }
}

#[async_trait]
impl Transport for OAuthTransport {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = self.endpoint_url(endpoint);
        let auth_header = oauth::authorization_header(&self.credentials, "GET", &url, params);

        let request_url = if params.is_empty() {
            url
        } else {
            let query = params
                .iter()
                .map(|(k, v)| {
                    format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", url, query)
        };

        debug!("GET {}", request_url);
        let response = self
            .client
            .get(&request_url)
            .header("Authorization", auth_header)
            .send()
            .await?;

        self.read_response("GET", endpoint, response).await
    }

    async fn post(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = self.endpoint_url(endpoint);
        let auth_header = oauth::authorization_header(&self.credentials, "POST", &url, params);

        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", auth_header)
            .form(params)
            .send()
            .await?;

        self.read_response("POST", endpoint, response).await
    }
}
