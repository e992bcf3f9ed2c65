//! Twitter/X API integration module.
//!
//! This module contains the search-and-act facade for the Twitter/X API:
//! credential verification, keyword search, prefixed reposting, following
//! accounts that mention a handle, and bulk direct message cleanup, all
//! issued through an injected [`Transport`].

mod api;
mod direct_messages;
mod following;
mod search;
mod text;
mod tweets;

pub use direct_messages::DeletionReport;
pub use text::{decode_html_entities, truncate_text};

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::transport::Transport;

/// Default character budget for outgoing statuses.
pub const STATUS_CHAR_LIMIT: usize = 140;

/// Suffix appended when a status is cut to fit the budget.
pub const TRUNCATION_SUFFIX: &str = "...";

/// Default prefix prepended to reposted text.
pub const REPOST_PREFIX: &str = "RT";

/// Default self-throttle before a repost search, for tight invocation loops.
pub const REPOST_DELAY: Duration = Duration::from_secs(2);

/// Default number of mentions fetched when looking for accounts to follow.
pub const MENTION_SAMPLE_SIZE: usize = 3;

/// Number of direct messages fetched per cleanup pass.
pub const DM_FETCH_BATCH: usize = 200;

/// One search hit: who said what, and the id to act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Screen name of the author, without the leading `@`
    pub author: String,
    /// Id of the found item, normalized to a string
    pub id: String,
    /// The text of the found item, as the API returned it
    pub text: String,
}

/// One profile from the user-lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub handle: String,
    pub name: String,
}

/// The search-and-act facade.
///
/// Holds a configured transport and translates high-level intents into
/// authenticated API calls, flattening remote failures into booleans or
/// empty sentinels. Stateless across calls; the transport is the only thing
/// kept for the facade's lifetime.
///
/// # Example
///
/// ```rust
/// use retweeter::{Credentials, OAuthTransport, Retweeter};
///
/// let credentials = Credentials::new("ck", "cs", "token", "token_secret");
/// let transport = OAuthTransport::new(credentials).unwrap();
/// let bot = Retweeter::new(transport);
/// ```
pub struct Retweeter<T: Transport> {
    transport: T,
    char_limit: usize,
    repost_delay: Duration,
}

impl<T: Transport> Retweeter<T> {
    /// Creates a facade with the default character budget and repost delay.
    pub fn new(transport: T) -> Self {
        Retweeter {
            transport,
            char_limit: STATUS_CHAR_LIMIT,
            repost_delay: REPOST_DELAY,
        }
    }

    /// Replaces the character budget applied to outgoing statuses.
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    /// Replaces the delay waited before a repost search.
    ///
    /// Pass `Duration::ZERO` to disable the throttle (tests do).
    pub fn with_repost_delay(mut self, repost_delay: Duration) -> Self {
        self.repost_delay = repost_delay;
        self
    }

    /// Returns the held transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Normalizes an item id to its string form.
///
/// Prefers `id_str` when the payload carries one; otherwise accepts `id` as
/// either a JSON string or a number.
pub(crate) fn id_string(item: &Value) -> Option<String> {
    if let Some(id) = item.get("id_str").and_then(|v| v.as_str()) {
        return Some(id.to_string());
    }
    match item.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}
