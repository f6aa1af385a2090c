//! Contact operations for the Holded API.

use serde_json::Value;
use tracing::instrument;

use super::{ContactsPayload, HoldedClient, HoldedError};

impl HoldedClient {
    /// List contacts.
    ///
    /// Single call without pagination or filter parameters; whatever the
    /// first page holds is returned, in API order. Records are returned
    /// undecoded so the caller can drop malformed ones individually.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API key is rejected, or the
    /// body is not a contact list.
    #[instrument(skip(self), fields(base_url = %self.base_url()))]
    pub async fn list_contacts(&self) -> Result<Vec<Value>, HoldedError> {
        let payload: ContactsPayload = self.get("/contacts").await?;
        let records = payload.into_values();
        tracing::debug!(count = records.len(), "Fetched contact records");
        Ok(records)
    }
}
