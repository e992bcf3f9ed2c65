//! Posting statuses and the search-and-repost composite.

use log::{debug, error, info, warn};

use super::text::{decode_html_entities, truncate_text};
use super::{Retweeter, TRUNCATION_SUFFIX};
use crate::transport::{endpoints, sanitize_for_logging, Transport};

impl<T: Transport> Retweeter<T> {
    /// Posts a status.
    ///
    /// The text is HTML-entity-decoded first, then truncated to the
    /// facade's character budget, so the payload handed to the transport
    /// never exceeds the budget and never carries escape sequences.
    ///
    /// # Parameters
    ///
    /// - `text`: The status text, possibly entity-escaped and over-length
    ///
    /// # Returns
    ///
    /// `true` iff the post call reported no error. Failures are logged and
    /// flattened to `false`; this never raises.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use retweeter::{Credentials, OAuthTransport, Retweeter};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let credentials = Credentials::from_env().unwrap();
    ///     let transport = OAuthTransport::new(credentials).unwrap();
    ///     let bot = Retweeter::new(transport);
    ///
    ///     if bot.post_tweet("Hello from Rust!").await {
    ///         println!("posted");
    ///     }
    /// }
    /// ```
    pub async fn post_tweet(&self, text: &str) -> bool {
        info!("Posting status");

        let decoded = decode_html_entities(text);
        let status = truncate_text(&decoded, self.char_limit, TRUNCATION_SUFFIX);
        debug!(
            "Status to post ({} chars): {}",
            status.chars().count(),
            sanitize_for_logging(&status, 200)
        );

        match self
            .transport
            .post(endpoints::STATUS_UPDATE, &[("status", status.as_str())])
            .await
        {
            Ok(response) => {
                if let Some(message) = response.error_message() {
                    error!("Post rejected: {}", message);
                    false
                } else {
                    info!("Status posted");
                    true
                }
            }
            Err(e) => {
                error!("Post request failed: {}", e);
                false
            }
        }
    }

    /// Finds the first hit for `query` and reposts it with a prefix.
    ///
    /// Waits the facade's repost delay, searches for a single result, and
    /// posts `"{prefix} @{author}: {text}"`. Entity decoding and
    /// truncation happen inside the post, on the composed message.
    ///
    /// # Parameters
    ///
    /// - `query`: The search query; exclude the bot's own posts here
    ///   (e.g. `-@handle`) or it will repost itself
    /// - `prefix`: Marker prepended to the repost, `RT` by convention
    ///
    /// # Returns
    ///
    /// `true` iff a hit was found and the post reported no error. Returns
    /// `false` without posting when the search comes back empty.
    pub async fn search_and_repost(&self, query: &str, prefix: &str) -> bool {
        info!("Reposting first hit for: {}", query);

        // Brief delay so repeated invocations do not hammer the search endpoint
        if !self.repost_delay.is_zero() {
            tokio::time::sleep(self.repost_delay).await;
        }

        let hit = match self.search_tweet(query).await {
            Some(hit) => hit,
            None => {
                warn!("Nothing to repost for: {}", query);
                return false;
            }
        };

        debug!("Reposting {} by @{}", hit.id, hit.author);
        let status = format!("{} @{}: {}", prefix, hit.author, hit.text);
        self.post_tweet(&status).await
    }
}
