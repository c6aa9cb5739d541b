//! Contact record types and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a contact within a snapshot.
///
/// Opaque and stable: whatever the source store uses as its row or record
/// identifier. Uniqueness is only guaranteed within a single snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Creates a new contact ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single contact as captured in a snapshot.
///
/// Field availability depends entirely on what the source store chose to
/// include; detection must not assume anything beyond `id`. A missing
/// display name arrives as an empty string, a missing phone list as an
/// empty vector, and both degrade to "cannot match on that axis" rather
/// than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Unique identifier within the snapshot.
    pub id: ContactId,

    /// Human-readable display name. May be empty.
    #[serde(default, rename = "displayName")]
    pub display_name: String,

    /// Raw phone-number strings as stored by the source, in source order.
    /// No formatting normalization is guaranteed.
    #[serde(default, rename = "phones")]
    pub phone_numbers: Vec<String>,

    /// Email addresses, when the source includes them. Ignored by the
    /// baseline match predicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
}

impl ContactRecord {
    /// Creates a contact record with a name and phone numbers.
    #[must_use]
    pub fn new<I, S>(id: impl Into<ContactId>, display_name: impl Into<String>, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            phone_numbers: phones.into_iter().map(Into::into).collect(),
            emails: Vec::new(),
        }
    }

    /// Returns true if this record has a usable display name.
    ///
    /// A name that is empty or all whitespace cannot participate in name
    /// matching; treating two such names as "equal" would pair every
    /// nameless contact with every other.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        !self.display_name.trim().is_empty()
    }

    /// Returns true if this record carries at least one phone number.
    #[must_use]
    pub fn has_phone_numbers(&self) -> bool {
        !self.phone_numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_preserves_string() {
        let id = ContactId::new("raw-42");
        assert_eq!(id.as_str(), "raw-42");
        assert_eq!(id.to_string(), "raw-42");
    }

    #[test]
    fn test_contact_id_ordering_is_lexicographic() {
        assert!(ContactId::new("10") < ContactId::new("9"));
        assert!(ContactId::new("a") < ContactId::new("b"));
    }

    #[test]
    fn test_new_collects_phones() {
        let record = ContactRecord::new("1", "Jane Doe", ["555-1111", "555-2222"]);
        assert_eq!(record.phone_numbers.len(), 2);
        assert!(record.has_display_name());
        assert!(record.has_phone_numbers());
    }

    #[test]
    fn test_blank_name_is_not_usable() {
        let record = ContactRecord::new("1", "   ", Vec::<String>::new());
        assert!(!record.has_display_name());
        assert!(!record.has_phone_numbers());
    }

    #[test]
    fn test_deserializes_source_field_names() {
        let json = r#"{"id":"7","displayName":"Ada","phones":["111"],"emails":["a@b.c"]}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.display_name, "Ada");
        assert_eq!(record.phone_numbers, vec!["111"]);
        assert_eq!(record.emails, vec!["a@b.c"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"id":"7"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert!(record.display_name.is_empty());
        assert!(record.phone_numbers.is_empty());
        assert!(record.emails.is_empty());
    }
}
