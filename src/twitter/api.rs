//! Identity verification, profile lookup, and raw endpoint access.

use log::{error, info, warn};

use super::{id_string, Retweeter, UserProfile};
use crate::transport::{endpoints, ApiResponse, Transport};

impl<T: Transport> Retweeter<T> {
    /// Verifies that the held credentials authenticate.
    ///
    /// This is the startup gate: run it once before any other action and
    /// stop on `Err`. Unlike every other operation, failure here is a
    /// distinguished fatal result rather than a flattened boolean; the
    /// calling layer decides whether that means a process exit. The facade
    /// itself never terminates anything.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The credentials authenticate
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: Transport failure
    ///   or an error response from the verification endpoint
    pub async fn verify_access(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Verifying API credentials");

        let response = self
            .transport
            .get(endpoints::VERIFY_CREDENTIALS, &[])
            .await?;

        if let Some(message) = response.error_message() {
            error!("Credential verification rejected: {}", message);
            return Err(format!("credential verification rejected: {}", message).into());
        }

        info!("Credentials verified");
        Ok(())
    }

    /// Looks up the profile(s) registered for a screen name.
    ///
    /// # Parameters
    ///
    /// - `handle`: The screen name to look up, without the leading `@`
    ///
    /// # Returns
    ///
    /// - `Some(profiles)`: A non-empty list of matching profiles
    /// - `None`: Transport failure, an error response, or no matches
    pub async fn lookup_users(&self, handle: &str) -> Option<Vec<UserProfile>> {
        info!("Looking up profiles for @{}", handle);

        let response = match self
            .transport
            .get(endpoints::USERS_LOOKUP, &[("screen_name", handle)])
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("User lookup failed: {}", e);
                return None;
            }
        };

        if let Some(message) = response.error_message() {
            error!("User lookup reported an error: {}", message);
            return None;
        }

        let items = match response.items() {
            Some(items) => items,
            None => {
                warn!("User lookup returned no profile list");
                return None;
            }
        };

        let profiles: Vec<UserProfile> = items
            .iter()
            .filter_map(|item| {
                let id = id_string(item)?;
                let handle = item.get("screen_name").and_then(|v| v.as_str())?;
                let name = item.get("name").and_then(|v| v.as_str())?;
                Some(UserProfile {
                    id,
                    handle: handle.to_string(),
                    name: name.to_string(),
                })
            })
            .collect();

        if profiles.is_empty() {
            warn!("No profiles found for @{}", handle);
            return None;
        }

        info!("Found {} profile(s) for @{}", profiles.len(), handle);
        Some(profiles)
    }

    /// Issues a GET against an endpoint the facade does not wrap.
    ///
    /// The transport result comes back unchanged; no flattening applies.
    pub async fn raw_get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.transport.get(endpoint, params).await
    }

    /// Issues a POST against an endpoint the facade does not wrap.
    pub async fn raw_post(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.transport.post(endpoint, params).await
    }
}
