//! The submission boundary and the roster normalizer.
//!
//! The collection layer hands over raw strings grouped by category; the
//! normalizer trims them and assembles the immutable structure the
//! evaluator consumes. Placeholder slots (both names empty) are
//! retained so exports can show every configured team, but carry no
//! identity.
//!
//! Normalization has no error conditions: absent input yields empty
//! sequences, never a failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::person::Person;
use crate::qualification::Qualification;

/// One technician slot as it arrives from the collection layer,
/// strings untrimmed. The qualification is already vocabulary-checked
/// at collection time; `None` means not entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTechnician {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub qualification: Option<Qualification>,
    #[serde(default)]
    pub note: String,
}

impl RawTechnician {
    fn into_person(self) -> Person {
        Person::new(self.given_name, self.family_name, self.qualification, self.note)
    }
}

/// A complete raw submission: the director plus, per category, the
/// ordered technician slots (slot order = team index order).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub director: RawTechnician,
    #[serde(default)]
    pub teams: BTreeMap<Category, Vec<RawTechnician>>,
}

/// A technician bound to a category and a 1-based team index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAssignment {
    pub category: Category,
    pub team_index: usize,
    pub technician: Person,
}

/// The normalized staff assignment: per category, teams in index order.
///
/// A category that is absent simply has zero teams. The first team of a
/// category is always the assignment at team index 1.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: BTreeMap<Category, Vec<CategoryAssignment>>,
}

impl Roster {
    /// All teams of a category, in team-index order. Empty if the
    /// category was not configured.
    pub fn teams(&self, category: Category) -> &[CategoryAssignment] {
        self.teams.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The assignment at team index 1, if the category has any team.
    pub fn first_team(&self, category: Category) -> Option<&CategoryAssignment> {
        self.teams(category).first()
    }

    /// Every assignment, categories senior to youngest, placeholders
    /// included. This is the stable row shape the export layer iterates.
    pub fn rows(&self) -> impl Iterator<Item = &CategoryAssignment> {
        self.teams.values().flatten()
    }
}

/// The single technical-sector supervisor, distinct from any coach.
#[derive(Debug, Clone)]
pub struct Director(pub Person);

/// Canonicalize a raw submission into the evaluator's input structure.
///
/// Trims every string field, passes qualifications through unchanged,
/// and retains placeholder slots. Pure; no error path.
pub fn normalize(submission: Submission) -> (Director, Roster) {
    let Submission { director, teams } = submission;

    let director = Director(director.into_person());

    let teams = teams
        .into_iter()
        .map(|(category, slots)| {
            let assignments = slots
                .into_iter()
                .enumerate()
                .map(|(i, slot)| CategoryAssignment {
                    category,
                    team_index: i + 1,
                    technician: slot.into_person(),
                })
                .collect();
            (category, assignments)
        })
        .collect();

    (director, Roster { teams })
}
