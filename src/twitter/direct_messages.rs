//! Bulk cleanup of the direct message inbox.

use log::{debug, error, info};
use serde::Serialize;

use super::{id_string, Retweeter, DM_FETCH_BATCH};
use crate::transport::{endpoints, Transport};

/// Outcome of one cleanup pass over the inbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    /// How many messages the fetch returned
    pub fetched: usize,
    /// How many destroy calls reported no error
    pub deleted: usize,
    /// Ids whose destroy call failed or was rejected
    pub failed: Vec<String>,
}

impl<T: Transport> Retweeter<T> {
    /// Deletes every pending direct message.
    ///
    /// Fetches one batch of up to 200 messages and destroys them one by
    /// one, in fetch order. Individual failures are logged at debug level
    /// and otherwise dropped; callers that want to see them use
    /// [`delete_all_direct_messages_report`](Self::delete_all_direct_messages_report).
    pub async fn delete_all_direct_messages(&self) {
        let report = self.delete_all_direct_messages_report().await;
        info!(
            "Direct message cleanup done: {} of {} deleted",
            report.deleted, report.fetched
        );
    }

    /// Deletes every pending direct message and reports per-message outcomes.
    ///
    /// Same pass as [`delete_all_direct_messages`](Self::delete_all_direct_messages);
    /// the report carries the fetch count, the number of successful
    /// destroys, and the ids that failed.
    pub async fn delete_all_direct_messages_report(&self) -> DeletionReport {
        info!("Deleting all pending direct messages");

        let mut report = DeletionReport::default();

        let batch = DM_FETCH_BATCH.to_string();
        let response = match self
            .transport
            .get(endpoints::DIRECT_MESSAGES, &[("count", batch.as_str())])
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Direct message fetch failed: {}", e);
                return report;
            }
        };

        let ids: Vec<String> = match response.items() {
            Some(items) => items.iter().filter_map(id_string).collect(),
            None => {
                match response.error_message() {
                    Some(message) => error!("Direct message fetch reported an error: {}", message),
                    None => error!("Direct message list had an unexpected shape"),
                }
                return report;
            }
        };

        report.fetched = ids.len();
        if ids.is_empty() {
            info!("Inbox is already empty");
            return report;
        }

        // One destroy per message, in fetch order; failures do not stop the pass.
        for id in ids {
            match self
                .transport
                .post(endpoints::DIRECT_MESSAGE_DESTROY, &[("id", id.as_str())])
                .await
            {
                Ok(response) => match response.error_message() {
                    Some(message) => {
                        debug!("Destroy rejected for {}: {}", id, message);
                        report.failed.push(id);
                    }
                    None => report.deleted += 1,
                },
                Err(e) => {
                    debug!("Destroy failed for {}: {}", id, e);
                    report.failed.push(id);
                }
            }
        }

        info!(
            "Deleted {} of {} direct messages",
            report.deleted, report.fetched
        );
        report
    }
}
