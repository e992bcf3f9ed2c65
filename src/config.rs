//! Configuration module for the retweeter bot.
//!
//! This module contains the credential and bot-setting structures and the
//! environment variable handling for the Twitter/X API integration.

use log::{debug, error, info, warn};
use std::env;

use crate::twitter::{REPOST_PREFIX, STATUS_CHAR_LIMIT};

/// OAuth 1.0a credentials for the Twitter/X API.
///
/// This struct holds the four opaque strings required to sign user-context
/// requests. The values are forwarded to the transport at construction and
/// never validated beyond being non-empty; the API itself is the authority
/// on whether they work.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// The application's Consumer Key (API Key)
    pub consumer_key: String,
    /// The application's Consumer Secret (API Secret)
    pub consumer_secret: String,
    /// The Access Token identifying the acting account
    pub access_token: String,
    /// The Access Token Secret paired with the access token
    pub access_token_secret: String,
}

impl Credentials {
    /// Creates a `Credentials` value from already-loaded strings.
    ///
    /// # Parameters
    ///
    /// - `consumer_key`: The application's Consumer Key
    /// - `consumer_secret`: The application's Consumer Secret
    /// - `access_token`: The Access Token for the acting account
    /// - `access_token_secret`: The Access Token Secret
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Creates a new `Credentials` instance by loading all four values from
    /// environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_consumer_key`: Consumer Key (API Key)
    /// - `xapi_consumer_secret`: Consumer Secret (API Secret)
    /// - `xapi_access_token`: Access Token for the acting account
    /// - `xapi_access_token_secret`: Access Token Secret
    ///
    /// # Returns
    ///
    /// - `Ok(Credentials)`: If all four environment variables are present and non-empty
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: naming the first missing variable
    ///
    /// # Example
    ///
    /// ```rust
    /// use retweeter::Credentials;
    ///
    /// std::env::set_var("xapi_consumer_key", "your_consumer_key");
    /// std::env::set_var("xapi_consumer_secret", "your_consumer_secret");
    /// std::env::set_var("xapi_access_token", "your_access_token");
    /// std::env::set_var("xapi_access_token_secret", "your_access_token_secret");
    ///
    /// let credentials = Credentials::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading Twitter credentials from environment variables");

        let consumer_key = load_credential("xapi_consumer_key")?;
        let consumer_secret = load_credential("xapi_consumer_secret")?;
        let access_token = load_credential("xapi_access_token")?;
        let access_token_secret = load_credential("xapi_access_token_secret")?;

        info!("Twitter credentials loaded successfully");

        Ok(Credentials {
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
        })
    }
}

/// Loads a single credential from the named environment variable.
///
/// The value is logged masked. An unset or empty variable is an error that
/// names the variable, so a misconfigured deployment fails with a message
/// that says what to set.
fn load_credential(name: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match env::var(name) {
        Ok(value) => {
            info!(
                "Found {} environment variable with length: {}",
                name,
                value.len()
            );
            debug!("{} (masked): {}", name, mask_token(&value));

            if value.is_empty() {
                error!("{} is empty", name);
                return Err(format!("{} cannot be empty", name).into());
            }

            if value.len() < 10 {
                warn!("{} seems unusually short ({} characters)", name, value.len());
            }

            Ok(value)
        }
        Err(e) => {
            error!("Failed to load {} from environment: {}", name, e);
            error!("Make sure the {} environment variable is set", name);
            Err(format!("Missing {} environment variable: {}", name, e).into())
        }
    }
}

/// Masks a token for logging, keeping only the first and last few characters.
///
/// # Parameters
///
/// - `token`: The token to mask
///
/// # Returns
///
/// A masked string safe to include in log output.
pub(crate) fn mask_token(token: &str) -> String {
    let token_length = token.len();

    let token_prefix = if token_length > 8 { &token[..8] } else { token };
    let token_suffix = if token_length > 16 {
        &token[token_length - 8..]
    } else {
        ""
    };

    if token_length > 16 {
        format!("{}...{}", token_prefix, token_suffix)
    } else {
        format!("{}...", token_prefix)
    }
}

/// Bot-level settings: who the bot is and what it reposts.
///
/// These steer the runner binary; the facade itself only sees the values
/// passed into its method calls.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// The bot's own screen name, without the leading `@`
    pub handle: String,
    /// The search query whose first hit gets reposted
    pub search_query: String,
    /// Prefix prepended to reposted text (defaults to `RT`)
    pub repost_prefix: String,
    /// Character budget for outgoing statuses (defaults to 140)
    pub char_limit: usize,
}

impl BotConfig {
    /// Creates a new `BotConfig` instance from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `BOT_HANDLE`: the bot's screen name, without the leading `@`
    /// - `SEARCH_QUERY`: the search query to repost from (exclude the bot's
    ///   own posts with a `-@handle` clause, or it will repost itself)
    ///
    /// # Optional Environment Variables
    ///
    /// - `REPOST_PREFIX`: prefix for reposted text, defaults to `RT`
    /// - `STATUS_CHAR_LIMIT`: character budget for statuses, defaults to 140
    ///
    /// # Returns
    ///
    /// - `Ok(BotConfig)`: If the required environment variables are present
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If one is missing
    ///
    /// # Panics
    ///
    /// Panics if `STATUS_CHAR_LIMIT` is set to a value that cannot be parsed
    /// as an integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retweeter::BotConfig;
    ///
    /// std::env::set_var("BOT_HANDLE", "mybot");
    /// std::env::set_var("SEARCH_QUERY", "rustlang -@mybot");
    ///
    /// let bot = BotConfig::from_env().unwrap();
    /// assert_eq!(bot.repost_prefix, "RT");
    /// assert_eq!(bot.char_limit, 140);
    /// ```
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading bot settings from environment variables");

        let handle = match env::var("BOT_HANDLE") {
            Ok(handle) if !handle.is_empty() => handle.trim_start_matches('@').to_string(),
            _ => {
                error!("Make sure the BOT_HANDLE environment variable is set");
                return Err("Missing BOT_HANDLE environment variable".into());
            }
        };

        let search_query = match env::var("SEARCH_QUERY") {
            Ok(query) if !query.is_empty() => query,
            _ => {
                error!("Make sure the SEARCH_QUERY environment variable is set");
                return Err("Missing SEARCH_QUERY environment variable".into());
            }
        };

        let repost_prefix =
            env::var("REPOST_PREFIX").unwrap_or_else(|_| REPOST_PREFIX.to_string());

        let char_limit = env::var("STATUS_CHAR_LIMIT")
            .unwrap_or_else(|_| STATUS_CHAR_LIMIT.to_string())
            .parse()
            .expect("STATUS_CHAR_LIMIT must be a valid number");

        info!(
            "Bot settings loaded: handle=@{}, prefix={:?}, char_limit={}",
            handle, repost_prefix, char_limit
        );
        debug!("Search query: {}", search_query);

        Ok(BotConfig {
            handle,
            search_query,
            repost_prefix,
            char_limit,
        })
    }
}
