//! # Retweeter Library
//!
//! A Rust automation helper that wraps the Twitter/X API behind a
//! search-and-act facade. The facade covers credential verification,
//! keyword search, reposting a found item with a prefix, following
//! accounts that mention a handle, and bulk direct message cleanup, all
//! over OAuth 1.0a signed requests.
//!
//! ## Features
//!
//! - Search-and-act facade with uniform success/failure semantics
//! - OAuth 1.0a request signing (HMAC-SHA1)
//! - Pluggable transport trait, so tests run against a scripted transport
//! - Character-budget truncation and HTML entity decoding for outgoing text
//! - Structured logging
//!
//! ## Configuration
//!
//! The following environment variables are required:
//! - `xapi_consumer_key`: Consumer Key (API Key)
//! - `xapi_consumer_secret`: Consumer Secret (API Secret)
//! - `xapi_access_token`: Access Token for the acting account
//! - `xapi_access_token_secret`: Access Token Secret
//!
//! The runner binary additionally reads:
//! - `BOT_HANDLE`: the bot's screen name, without the leading `@`
//! - `SEARCH_QUERY`: the search query whose first hit gets reposted
//! - `REPOST_PREFIX`: prefix for reposted text (defaults to `RT`)
//! - `STATUS_CHAR_LIMIT`: character budget for statuses (defaults to 140)

pub mod config;
pub mod oauth;
pub mod transport;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{BotConfig, Credentials};
pub use oauth::{authorization_header, percent_encode};
pub use transport::{ApiResponse, OAuthTransport, Transport};
pub use twitter::{
    decode_html_entities, truncate_text, DeletionReport, Retweeter, SearchResult, UserProfile,
    MENTION_SAMPLE_SIZE, STATUS_CHAR_LIMIT,
};

#[cfg(test)]
mod tests;
