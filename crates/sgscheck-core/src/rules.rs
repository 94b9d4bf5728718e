//! The eligibility-rule evaluator.
//!
//! `evaluate` runs a fixed battery of nine checks over the director and
//! the normalized roster, in this order:
//!
//! 1. Director completeness
//! 2. Director qualification restriction
//! 3. Senior-category (Allievi/Giovanissimi) exclusivity and
//!    qualification restriction, over all teams
//! 4. Esordienti/Pulcini qualification restriction, over all teams
//! 5. First-team completeness for each base category with teams
//! 6. First-team mutual exclusivity
//! 7. Senior-group / first-team cross exclusivity
//! 8. First-team qualification restrictions
//! 9. Director / first-team identity conflict
//!
//! Every triggered violation is accumulated; no check short-circuits
//! another. Report order is battery order, never input order. The
//! evaluator is total: malformed-but-well-typed input degrades to
//! violations or silent exclusion, never a panic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::person::{IdentityKey, Person};
use crate::qualification::Qualification;
use crate::roster::{CategoryAssignment, Director, Roster};

/// Which check a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    DirectorIncomplete,
    DirectorQualification,
    SeniorRepeated,
    SeniorQualification,
    YouthQualification,
    FirstTeamUnassigned,
    FirstTeamRepeated,
    CrossGroupConflict,
    FirstTeamQualification,
    DirectorCoachesFirstTeam,
}

/// One failed rule instance: the rule plus its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// The evaluation outcome. Empty violations ⇔ submission accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub violations: Vec<Violation>,
}

impl EligibilityReport {
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

/// A non-placeholder assignment together with its identity key.
type Keyed<'a> = (IdentityKey, &'a CategoryAssignment);

/// Run the full rule battery. Pure and total.
pub fn evaluate(director: &Director, roster: &Roster) -> EligibilityReport {
    let mut violations = Vec::new();
    let director = &director.0;

    check_director_completeness(director, &mut violations);
    check_director_qualification(director, &mut violations);

    let senior = collect_group(roster, &Category::SENIOR);
    check_senior_group(&senior, &mut violations);
    check_youth_qualifications(roster, &mut violations);

    let first_teams = collect_first_teams(roster, &mut violations);
    check_first_team_repeats(&first_teams, &mut violations);
    check_cross_group_conflicts(&senior, &first_teams, &mut violations);
    check_first_team_qualifications(&first_teams, &mut violations);
    check_director_conflict(director, &first_teams, &mut violations);

    EligibilityReport { violations }
}

fn check_director_completeness(director: &Person, violations: &mut Vec<Violation>) {
    if director.given_name.is_empty()
        || director.family_name.is_empty()
        || director.qualification.is_none()
    {
        violations.push(Violation::new(
            Rule::DirectorIncomplete,
            "Responsabile Tecnico is not fully completed (name, surname, or qualification missing).",
        ));
    }
}

fn check_director_qualification(director: &Person, violations: &mut Vec<Violation>) {
    if matches!(
        director.qualification,
        Some(Qualification::ELevel | Qualification::ScienzeMotorie)
    ) {
        violations.push(Violation::new(
            Rule::DirectorQualification,
            "Responsabile Tecnico cannot hold qualification E-Level or Scienze Motorie.",
        ));
    }
}

/// All non-placeholder assignments across the given categories, over
/// all their teams, each paired with its identity key.
fn collect_group<'a>(roster: &'a Roster, categories: &[Category]) -> Vec<Keyed<'a>> {
    let mut group = Vec::new();
    for &category in categories {
        for assignment in roster.teams(category) {
            if let Some(key) = assignment.technician.identity_key() {
                group.push((key, assignment));
            }
        }
    }
    group
}

/// Checks 3a and 3b: one repeated-technician violation for the whole
/// senior group, plus a per-person violation for restricted
/// qualifications.
fn check_senior_group(senior: &[Keyed], violations: &mut Vec<Violation>) {
    if has_repeats(senior) {
        violations.push(Violation::new(
            Rule::SeniorRepeated,
            "Allievi and Giovanissimi have repeated technicians (same name and surname).",
        ));
    }

    for (_, assignment) in senior {
        if let Some(
            q @ (Qualification::ScienzeMotorie | Qualification::ELevel),
        ) = assignment.technician.qualification
        {
            violations.push(Violation::new(
                Rule::SeniorQualification,
                format!(
                    "{} in {} holds a disallowed qualification ({}).",
                    assignment.technician.full_name(),
                    assignment.category,
                    q
                ),
            ));
        }
    }
}

/// Check 4: no Esordienti or Pulcini technician, on any team, may hold
/// Scienze Motorie. E-Level is restricted only for first teams.
fn check_youth_qualifications(roster: &Roster, violations: &mut Vec<Violation>) {
    for category in [Category::Esordienti, Category::Pulcini] {
        for assignment in roster.teams(category) {
            let technician = &assignment.technician;
            if technician.is_placeholder() {
                continue;
            }
            if technician.qualification == Some(Qualification::ScienzeMotorie) {
                violations.push(Violation::new(
                    Rule::YouthQualification,
                    format!(
                        "{} in {} holds the disallowed qualification Scienze Motorie.",
                        technician.full_name(),
                        category
                    ),
                ));
            }
        }
    }
}

/// Check 5: for each base category with at least one team, the first
/// team must be staffed. A placeholder first team is reported and
/// excluded from checks 6–8.
fn collect_first_teams<'a>(
    roster: &'a Roster,
    violations: &mut Vec<Violation>,
) -> Vec<Keyed<'a>> {
    let mut first_teams = Vec::new();
    for category in Category::BASE {
        let Some(assignment) = roster.first_team(category) else {
            continue;
        };
        match assignment.technician.identity_key() {
            Some(key) => first_teams.push((key, assignment)),
            None => violations.push(Violation::new(
                Rule::FirstTeamUnassigned,
                format!("First team of {category} has no technician assigned."),
            )),
        }
    }
    first_teams
}

/// Check 6: one violation if any two first teams share a technician.
fn check_first_team_repeats(first_teams: &[Keyed], violations: &mut Vec<Violation>) {
    if has_repeats(first_teams) {
        violations.push(Violation::new(
            Rule::FirstTeamRepeated,
            "Base-category first teams repeat a technician among themselves.",
        ));
    }
}

/// Check 7: one violation per identity present in both the senior
/// group and the first-team group. The name is resolved from the first
/// match across the combined senior + first-team list.
fn check_cross_group_conflicts(
    senior: &[Keyed],
    first_teams: &[Keyed],
    violations: &mut Vec<Violation>,
) {
    let senior_keys: HashSet<&IdentityKey> = senior.iter().map(|(key, _)| key).collect();
    let mut reported: HashSet<IdentityKey> = HashSet::new();

    for (key, _) in first_teams {
        if !senior_keys.contains(key) || !reported.insert(key.clone()) {
            continue;
        }
        let name = senior
            .iter()
            .chain(first_teams)
            .find(|entry| entry.0 == *key)
            .map(|entry| entry.1.technician.full_name())
            .unwrap_or_default();
        violations.push(Violation::new(
            Rule::CrossGroupConflict,
            format!(
                "Technician {name} appears both in Allievi/Giovanissimi and as a base-category first-team coach."
            ),
        ));
    }
}

/// Check 8: Esordienti/Pulcini first teams forbid Scienze Motorie and
/// E-Level; Primi Calci/Piccoli Amici first teams forbid E-Level only.
fn check_first_team_qualifications(first_teams: &[Keyed], violations: &mut Vec<Violation>) {
    for (_, assignment) in first_teams {
        let Some(qualification) = assignment.technician.qualification else {
            continue;
        };
        match assignment.category {
            Category::Esordienti | Category::Pulcini
                if matches!(
                    qualification,
                    Qualification::ScienzeMotorie | Qualification::ELevel
                ) =>
            {
                violations.push(Violation::new(
                    Rule::FirstTeamQualification,
                    format!(
                        "{} in {} (first team) holds a disallowed qualification ({}).",
                        assignment.technician.full_name(),
                        assignment.category,
                        qualification
                    ),
                ));
            }
            Category::PrimiCalci | Category::PiccoliAmici
                if qualification == Qualification::ELevel =>
            {
                violations.push(Violation::new(
                    Rule::FirstTeamQualification,
                    format!(
                        "{} in {} (first team) holds qualification E-Level, which is not permitted (Scienze Motorie is allowed).",
                        assignment.technician.full_name(),
                        assignment.category
                    ),
                ));
            }
            _ => {}
        }
    }
}

/// Check 9: the director may not coach any base-category first team.
/// One violation, first match only.
fn check_director_conflict(
    director: &Person,
    first_teams: &[Keyed],
    violations: &mut Vec<Violation>,
) {
    let Some(key) = director.identity_key() else {
        return;
    };
    if first_teams.iter().any(|(k, _)| *k == key) {
        violations.push(Violation::new(
            Rule::DirectorCoachesFirstTeam,
            "Responsabile Tecnico cannot coach the first team of Esordienti, Pulcini, Primi Calci, or Piccoli Amici.",
        ));
    }
}

fn has_repeats(group: &[Keyed]) -> bool {
    let mut seen = HashSet::new();
    group.iter().any(|(key, _)| !seen.insert(key.clone()))
}
