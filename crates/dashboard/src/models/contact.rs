//! UI-ready contact model.

use contacts_dashboard_core::{ContactId, ContactType};
use serde::Serialize;

use crate::holded::ContactRecord;

/// A remote contact normalized for display.
///
/// Built fresh from the API response on every page load and dropped once the
/// page is rendered. Serializes with the remote field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayContact {
    pub id: ContactId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
}

impl DisplayContact {
    /// Create a contact with only an identifier set.
    #[must_use]
    pub const fn new(id: ContactId) -> Self {
        Self {
            id,
            custom_id: None,
            name: None,
            code: None,
            trade_name: None,
            email: None,
            mobile: None,
            phone: None,
            contact_type: None,
        }
    }

    /// Project a remote record, or `None` if it has no usable identifier.
    ///
    /// Optional fields are copied unchanged. An empty or blank `type` counts
    /// as absent; any other value goes through [`ContactType::parse`].
    #[must_use]
    pub fn from_record(record: ContactRecord) -> Option<Self> {
        let id = ContactId::try_from(record.id?).ok()?;

        let contact_type = record
            .contact_type
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(ContactType::parse);

        Some(Self {
            id,
            custom_id: record.custom_id,
            name: record.name,
            code: record.code,
            trade_name: record.trade_name,
            email: record.email,
            mobile: record.mobile,
            phone: record.phone,
            contact_type,
        })
    }
}
