//! Persons and their identity keys.
//!
//! Two persons are the same individual exactly when their trimmed,
//! case-folded (given name, family name) pairs are equal. Qualification
//! and note never contribute to identity. A person with both names
//! empty is a placeholder: never compared, never a conflict subject.

use serde::{Deserialize, Serialize};

use crate::qualification::Qualification;

/// Derived identity of a person: `lower(family) + "_" + lower(given)`.
///
/// All duplicate and conflict checks go through this key, so identity
/// comparison is case- and whitespace-insensitive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey(pub String);

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A technician or director as entered on the submission.
///
/// String fields are trimmed at construction; `normalize` is the only
/// construction path in practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub given_name: String,
    pub family_name: String,
    pub qualification: Option<Qualification>,
    pub note: String,
}

impl Person {
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        qualification: Option<Qualification>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into().trim().to_string(),
            family_name: family_name.into().trim().to_string(),
            qualification,
            note: note.into().trim().to_string(),
        }
    }

    /// Both names empty: a retained-but-not-entered slot.
    pub fn is_placeholder(&self) -> bool {
        self.given_name.is_empty() && self.family_name.is_empty()
    }

    /// The identity key, or `None` for a placeholder.
    pub fn identity_key(&self) -> Option<IdentityKey> {
        if self.is_placeholder() {
            return None;
        }
        Some(IdentityKey(format!(
            "{}_{}",
            self.family_name.to_lowercase(),
            self.given_name.to_lowercase()
        )))
    }

    /// "Family Given", as violation messages name people.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.family_name, self.given_name)
            .trim()
            .to_string()
    }
}
