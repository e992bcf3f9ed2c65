//! Following accounts that mention the bot.

use log::{debug, error, info};

use super::Retweeter;
use crate::transport::{endpoints, Transport};

impl<T: Transport> Retweeter<T> {
    /// Follows an account that recently mentioned `@{handle}`.
    ///
    /// Fetches up to `sample_size` mentions and walks them in result order,
    /// skipping the bot's own posts. Only the first candidate that is not
    /// the bot itself is ever considered: whatever the friendship check and
    /// follow attempt produce for that account is the result of the whole
    /// call, and later mentions are not tried. An account already followed
    /// counts as success.
    ///
    /// # Parameters
    ///
    /// - `handle`: The bot's screen name, without the leading `@`
    /// - `sample_size`: How many mentions to fetch
    ///
    /// # Returns
    ///
    /// `true` when the candidate is already followed or was followed now.
    /// `false` when there is no eligible candidate, the friendship lookup
    /// fails, or the follow attempt is rejected.
    pub async fn follow_mentioners(&self, handle: &str, sample_size: usize) -> bool {
        info!("Looking for accounts mentioning @{}", handle);

        let query = format!("@{}", handle);
        let mentions = match self.search_tweets(&query, sample_size).await {
            Some(mentions) => mentions,
            None => {
                info!("No mentions of @{} found", handle);
                return false;
            }
        };

        for mention in &mentions {
            if mention.author == handle {
                debug!("Skipping self-mention");
                continue;
            }

            // The first non-self candidate decides the whole call; later
            // mentions are fetched but never reached.
            return match self.friendship_exists(handle, &mention.author).await {
                Some(true) => {
                    info!("Already following @{}", mention.author);
                    true
                }
                Some(false) => self.create_friendship(&mention.author).await,
                None => false,
            };
        }

        info!("No eligible accounts to follow for @{}", handle);
        false
    }

    /// Checks whether `handle` already follows `author`.
    ///
    /// `None` means the check itself failed and the caller should treat the
    /// follow attempt as failed.
    async fn friendship_exists(&self, handle: &str, author: &str) -> Option<bool> {
        debug!("Checking friendship between @{} and @{}", handle, author);

        let response = match self
            .transport
            .get(
                endpoints::FRIENDSHIP_EXISTS,
                &[("user_a", handle), ("user_b", author)],
            )
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Friendship check failed: {}", e);
                return None;
            }
        };

        match response.as_bool() {
            Some(exists) => Some(exists),
            None => {
                match response.error_message() {
                    Some(message) => error!("Friendship check reported an error: {}", message),
                    None => error!("Friendship check returned an unexpected body"),
                }
                None
            }
        }
    }

    /// Issues the follow request for `author`.
    async fn create_friendship(&self, author: &str) -> bool {
        info!("Following @{}", author);

        match self
            .transport
            .post(endpoints::FRIENDSHIP_CREATE, &[("id", author)])
            .await
        {
            Ok(response) => {
                if let Some(message) = response.error_message() {
                    error!("Follow request rejected: {}", message);
                    false
                } else {
                    info!("Now following @{}", author);
                    true
                }
            }
            Err(e) => {
                error!("Follow request failed: {}", e);
                false
            }
        }
    }
}
