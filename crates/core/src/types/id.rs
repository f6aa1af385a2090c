//! Contact identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ContactId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactIdError {
    /// The input string is empty.
    #[error("contact id cannot be empty")]
    Empty,
}

/// Identifier of a remote contact.
///
/// Remote records arrive loosely typed; this wrapper guarantees that every
/// contact that reaches the dashboard carries a usable identifier. It is also
/// the row key of the contacts table.
///
/// ## Constraints
///
/// - Must not be empty
/// - No other format is enforced (the remote API owns the format)
///
/// ## Examples
///
/// ```
/// use contacts_dashboard_core::ContactId;
///
/// assert!(ContactId::parse("5ab3910f2e1d9300251d6f0e").is_ok());
/// assert!(ContactId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Parse a `ContactId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ContactIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, ContactIdError> {
        if s.is_empty() {
            return Err(ContactIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ContactId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ContactId {
    type Err = ContactIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContactId {
    type Error = ContactIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(ContactIdError::Empty);
        }
        Ok(Self(s))
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = ContactId::parse("abc123").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ContactId::parse(""), Err(ContactIdError::Empty));
        assert!("".parse::<ContactId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ContactId::parse("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let back: ContactId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<ContactId>("\"\"").is_err());
    }
}
