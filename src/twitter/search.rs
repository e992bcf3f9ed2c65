//! Keyword search against the legacy search endpoint.

use log::{debug, error, info, warn};

use super::{id_string, Retweeter, SearchResult};
use crate::transport::{endpoints, Transport};

impl<T: Transport> Retweeter<T> {
    /// Searches for `query` and returns up to `count` results.
    ///
    /// Results come back in the order the search returned them ("first N"),
    /// with no re-ranking or filtering beyond what the endpoint applies.
    /// Entries missing an author, id, or text are skipped.
    ///
    /// # Parameters
    ///
    /// - `query`: The search query, as the search endpoint understands it
    /// - `count`: Maximum number of results to return
    ///
    /// # Returns
    ///
    /// - `Some(results)`: A non-empty list of up to `count` results
    /// - `None`: Transport failure, an error response, a zero `count`, or
    ///   no matches. The sentinel is always `None`, never an empty `Some`
    pub async fn search_tweets(&self, query: &str, count: usize) -> Option<Vec<SearchResult>> {
        info!("Searching for: {}", query);

        let response = match self.transport.get(endpoints::SEARCH, &[("q", query)]).await {
            Ok(response) => response,
            Err(e) => {
                error!("Search request failed: {}", e);
                return None;
            }
        };

        if let Some(message) = response.error_message() {
            error!("Search reported an error: {}", message);
            return None;
        }

        let results = match response.results() {
            Some(results) => results,
            None => {
                warn!("Search response carried no results field");
                return None;
            }
        };

        // A zero ask still issues the search; the result is discarded after.
        if count == 0 {
            debug!("Requested zero results for query: {}", query);
            return None;
        }

        let hits: Vec<SearchResult> = results
            .iter()
            .take(count)
            .filter_map(|item| {
                let author = item.get("from_user").and_then(|v| v.as_str())?;
                let id = id_string(item)?;
                let text = item.get("text").and_then(|v| v.as_str())?;
                Some(SearchResult {
                    author: author.to_string(),
                    id,
                    text: text.to_string(),
                })
            })
            .collect();

        if hits.is_empty() {
            info!("No results for query: {}", query);
            return None;
        }

        info!("Found {} result(s) for query: {}", hits.len(), query);
        Some(hits)
    }

    /// Searches for `query` and returns the first result, if any.
    pub async fn search_tweet(&self, query: &str) -> Option<SearchResult> {
        self.search_tweets(query, 1).await?.into_iter().next()
    }
}
