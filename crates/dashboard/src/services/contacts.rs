//! Contact fetching and normalization.
//!
//! Fetches the remote contact list once, drops records without a usable
//! identifier, and projects the rest into [`DisplayContact`]s in API order.
//!
//! Two entry points exist because a failed fetch and an empty contact list
//! are different facts:
//! - [`ContactService::fetch`] masks failures as an empty list (HTML page)
//! - [`ContactService::try_fetch`] returns the error (JSON API)

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use crate::holded::{DecodedRecord, HoldedClient, HoldedError, decode_records};
use crate::models::DisplayContact;

/// Source of raw contact records ("list contacts" call).
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Return the raw records of the first (and only) page, in API order.
    async fn list_contacts(&self) -> Result<Vec<Value>, HoldedError>;
}

#[async_trait]
impl ContactSource for HoldedClient {
    async fn list_contacts(&self) -> Result<Vec<Value>, HoldedError> {
        Self::list_contacts(self).await
    }
}

/// Drop invalid records and project the rest, preserving order.
///
/// A record is kept exactly when it is a JSON object whose `id` is a
/// non-empty string; other fields never cause a drop. Dropped records are logged, never reported to callers.
#[must_use]
pub fn normalize_contacts(records: Vec<Value>) -> Vec<DisplayContact> {
    let total = records.len();

    let contacts: Vec<DisplayContact> = decode_records(records)
        .into_iter()
        .enumerate()
        .filter_map(|(index, decoded)| match decoded {
            DecodedRecord::Valid(record) => {
                let contact = DisplayContact::from_record(record);
                if contact.is_none() {
                    tracing::debug!(index, "Dropping contact record without id");
                }
                contact
            }
            DecodedRecord::Malformed { index, reason } => {
                tracing::warn!(index, %reason, "Dropping malformed contact record");
                None
            }
        })
        .inspect(|contact| {
            if let Some(contact_type) = contact.contact_type.as_ref().filter(|t| !t.is_known()) {
                tracing::debug!(
                    contact_id = %contact.id,
                    contact_type = %contact_type,
                    "Contact has unrecognized type"
                );
            }
        })
        .collect();

    if contacts.len() < total {
        tracing::info!(
            kept = contacts.len(),
            dropped = total - contacts.len(),
            "Filtered contact records"
        );
    }

    contacts
}

/// Fetches and normalizes contacts from an injected source.
#[derive(Clone)]
pub struct ContactService {
    source: Arc<dyn ContactSource>,
}

impl ContactService {
    /// Create a service over the given source.
    #[must_use]
    pub fn new(source: Arc<dyn ContactSource>) -> Self {
        Self { source }
    }

    /// Fetch contacts, returning the error on failure.
    ///
    /// # Errors
    ///
    /// Returns error if the source fails (network, auth, response shape).
    #[instrument(skip(self))]
    pub async fn try_fetch(&self) -> Result<Vec<DisplayContact>, HoldedError> {
        let records = self.source.list_contacts().await?;
        Ok(normalize_contacts(records))
    }

    /// Fetch contacts, masking any failure as an empty list.
    ///
    /// The error is logged; callers cannot tell a failed fetch from an empty
    /// contact list. Use [`Self::try_fetch`] when the difference matters.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Vec<DisplayContact> {
        self.try_fetch().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch contacts");
            Vec::new()
        })
    }
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use contacts_dashboard_core::ContactType;
    use serde_json::json;

    use super::*;

    /// Source returning a fixed list of records.
    pub struct StaticSource(pub Vec<Value>);

    #[async_trait]
    impl ContactSource for StaticSource {
        async fn list_contacts(&self) -> Result<Vec<Value>, HoldedError> {
            Ok(self.0.clone())
        }
    }

    /// Source that always fails, counting calls.
    #[derive(Default)]
    pub struct FailingSource {
        pub calls: Mutex<usize>,
    }

    #[async_trait]
    impl ContactSource for FailingSource {
        async fn list_contacts(&self) -> Result<Vec<Value>, HoldedError> {
            *self.calls.lock().unwrap() += 1;
            Err(HoldedError::Unauthorized)
        }
    }

    fn ids(contacts: &[DisplayContact]) -> Vec<&str> {
        contacts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_normalize_keeps_only_string_ids_in_order() {
        let contacts = normalize_contacts(vec![
            json!({ "id": "a" }),
            json!({ "name": "missing id" }),
            json!({ "id": "b" }),
            json!({ "id": null }),
            json!({ "id": 42 }),
            json!({ "id": "" }),
            json!({ "id": ["c"] }),
            json!("garbage"),
            json!({ "id": "c" }),
        ]);

        assert_eq!(ids(&contacts), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_keeps_records_with_odd_field_types() {
        let contacts = normalize_contacts(vec![
            json!({ "id": "1", "mobile": 600_000_000 }),
            json!({ "id": "2", "type": 3 }),
            json!({ "id": "3", "code": null }),
            json!({ "id": "4", "phone": { "number": "1" } }),
        ]);

        assert_eq!(ids(&contacts), vec!["1", "2", "3", "4"]);
        assert_eq!(contacts[0].mobile.as_deref(), Some("600000000"));
        assert_eq!(contacts[1].contact_type, None);
        assert_eq!(contacts[2].code, None);
        assert_eq!(contacts[3].phone, None);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_contacts(Vec::new()).is_empty());
    }

    #[test]
    fn test_normalize_passthrough() {
        let contacts = normalize_contacts(vec![json!({
            "id": "1",
            "name": "Acme",
            "email": "a@acme.test",
            "type": "creditor"
        })]);

        let contact = &contacts[0];
        assert_eq!(contact.name.as_deref(), Some("Acme"));
        assert_eq!(contact.email.as_deref(), Some("a@acme.test"));
        assert_eq!(contact.contact_type, Some(ContactType::Creditor));
        assert_eq!(contact.phone, None);
        assert_eq!(contact.trade_name, None);
    }

    #[tokio::test]
    async fn test_fetch_scenario() {
        let source = StaticSource(vec![
            json!({ "id": "1", "name": "Acme", "type": "client" }),
            json!({ "id": null, "name": "Bad" }),
            json!({ "id": "3", "name": "Beta", "type": "supplier" }),
        ]);
        let service = ContactService::new(Arc::new(source));

        let contacts = service.fetch().await;

        assert_eq!(ids(&contacts), vec!["1", "3"]);
        assert_eq!(contacts[0].name.as_deref(), Some("Acme"));
        assert_eq!(contacts[0].contact_type, Some(ContactType::Client));
        assert_eq!(contacts[1].name.as_deref(), Some("Beta"));
        assert_eq!(contacts[1].contact_type, Some(ContactType::Supplier));
    }

    #[tokio::test]
    async fn test_fetch_masks_failure() {
        let source = Arc::new(FailingSource::default());
        let service = ContactService::new(source.clone());

        assert!(service.fetch().await.is_empty());
        assert_eq!(*source.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_try_fetch_surfaces_failure() {
        let service = ContactService::new(Arc::new(FailingSource::default()));

        let result = service.try_fetch().await;
        assert!(matches!(result, Err(HoldedError::Unauthorized)));
    }
}
