//! Contact type (business relationship category).

use serde::{Deserialize, Serialize};

use super::chip::ChipColor;

/// Business relationship category of a contact.
///
/// Maps to the remote API's `type` values. Parsing is total: values the
/// dashboard does not recognize are kept in [`ContactType::Unknown`] with the
/// original string, so data-quality issues stay visible instead of being
/// coerced into a known category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactType {
    Client,
    Supplier,
    Lead,
    Debtor,
    Creditor,
    /// A value outside the known set, kept verbatim.
    Unknown(String),
}

impl ContactType {
    /// All recognized contact types, in display order.
    pub const KNOWN: [Self; 5] = [
        Self::Client,
        Self::Supplier,
        Self::Lead,
        Self::Debtor,
        Self::Creditor,
    ];

    /// Parse a remote `type` value.
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Anything else
    /// becomes `Unknown` with the input string unchanged.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Unknown(s.to_owned()))
    }

    /// Wire value of the type (the original string for `Unknown`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Client => "client",
            Self::Supplier => "supplier",
            Self::Lead => "lead",
            Self::Debtor => "debtor",
            Self::Creditor => "creditor",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether the type is one of the recognized categories.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Chip color used for this type in the contacts table.
    #[must_use]
    pub const fn chip_color(&self) -> ChipColor {
        match self {
            Self::Client => ChipColor::Success,
            Self::Supplier => ChipColor::Warning,
            Self::Lead => ChipColor::Primary,
            Self::Debtor => ChipColor::Danger,
            Self::Creditor => ChipColor::Secondary,
            Self::Unknown(_) => ChipColor::Default,
        }
    }

    /// Chip color for an optional type; absent types get the default color.
    #[must_use]
    pub fn chip_color_for(contact_type: Option<&Self>) -> ChipColor {
        contact_type.map_or(ChipColor::Default, Self::chip_color)
    }
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ContactType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for ContactType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ContactType> for String {
    fn from(contact_type: ContactType) -> Self {
        match contact_type {
            ContactType::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}
