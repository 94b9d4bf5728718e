//! The fixed vocabulary of youth categories.
//!
//! Categories are a closed set shared with the collection layer. The
//! declaration order is the federation's, senior to youngest, and is
//! also the `Ord` order, so ordered maps over categories iterate
//! senior-first.

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// A youth category, senior to youngest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Allievi,
    Giovanissimi,
    Esordienti,
    Pulcini,
    #[serde(rename = "Primi Calci")]
    PrimiCalci,
    #[serde(rename = "Piccoli Amici")]
    PiccoliAmici,
}

impl Category {
    /// Every category, senior to youngest.
    pub const ALL: [Category; 6] = [
        Category::Allievi,
        Category::Giovanissimi,
        Category::Esordienti,
        Category::Pulcini,
        Category::PrimiCalci,
        Category::PiccoliAmici,
    ];

    /// The two most senior youth categories. All of their teams fall
    /// under the exclusivity and qualification restrictions.
    pub const SENIOR: [Category; 2] = [Category::Allievi, Category::Giovanissimi];

    /// The four base categories, subject to the first-team rules.
    pub const BASE: [Category; 4] = [
        Category::Esordienti,
        Category::Pulcini,
        Category::PrimiCalci,
        Category::PiccoliAmici,
    ];

    /// The federation spelling of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Allievi => "Allievi",
            Category::Giovanissimi => "Giovanissimi",
            Category::Esordienti => "Esordienti",
            Category::Pulcini => "Pulcini",
            Category::PrimiCalci => "Primi Calci",
            Category::PiccoliAmici => "Piccoli Amici",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| VocabularyError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_senior_first() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert!(Category::Allievi < Category::PiccoliAmici);
    }

    #[test]
    fn parse_federation_spelling() {
        assert_eq!("Primi Calci".parse::<Category>().unwrap(), Category::PrimiCalci);
        assert_eq!("Allievi".parse::<Category>().unwrap(), Category::Allievi);
        assert!("Juniores".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_federation_spelling() {
        let json = serde_json::to_string(&Category::PiccoliAmici).unwrap();
        assert_eq!(json, "\"Piccoli Amici\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::PiccoliAmici);
    }
}
