//! The fixed vocabulary of federal qualifications.
//!
//! Which qualifications are restricted where is the evaluator's
//! business, not this module's: the vocabulary only names the values
//! and their federation spellings. D-Level is part of the fixed set
//! and happens to be unrestricted by every rule.

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// A federal qualification, coaching pathway first, highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "Uefa A")]
    UefaA,
    #[serde(rename = "Uefa B")]
    UefaB,
    #[serde(rename = "Uefa C")]
    UefaC,
    #[serde(rename = "D-Level")]
    DLevel,
    #[serde(rename = "E-Level")]
    ELevel,
    /// Sports-science university degree, treated as a
    /// qualification-equivalent by the federation.
    #[serde(rename = "Scienze Motorie")]
    ScienzeMotorie,
}

impl Qualification {
    pub const ALL: [Qualification; 6] = [
        Qualification::UefaA,
        Qualification::UefaB,
        Qualification::UefaC,
        Qualification::DLevel,
        Qualification::ELevel,
        Qualification::ScienzeMotorie,
    ];

    /// The federation spelling of this qualification.
    pub fn as_str(self) -> &'static str {
        match self {
            Qualification::UefaA => "Uefa A",
            Qualification::UefaB => "Uefa B",
            Qualification::UefaC => "Uefa C",
            Qualification::DLevel => "D-Level",
            Qualification::ELevel => "E-Level",
            Qualification::ScienzeMotorie => "Scienze Motorie",
        }
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Qualification {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Qualification::ALL
            .into_iter()
            .find(|qualification| qualification.as_str() == s)
            .ok_or_else(|| VocabularyError::UnknownQualification(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_federation_spelling() {
        assert_eq!(
            "Scienze Motorie".parse::<Qualification>().unwrap(),
            Qualification::ScienzeMotorie
        );
        assert_eq!("E-Level".parse::<Qualification>().unwrap(), Qualification::ELevel);
        assert!("Uefa Pro".parse::<Qualification>().is_err());
    }

    #[test]
    fn serde_uses_federation_spelling() {
        let json = serde_json::to_string(&Qualification::DLevel).unwrap();
        assert_eq!(json, "\"D-Level\"");
        let back: Qualification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Qualification::DLevel);
    }
}
