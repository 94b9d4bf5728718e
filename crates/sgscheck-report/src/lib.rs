//! Output collaborator for sgscheck: tabular roster snapshots and the
//! rendering of evaluation outcomes.
//!
//! Nothing here affects eligibility. The core exposes the roster in a
//! stable row shape; this crate flattens it for display or download
//! (CSV, JSON records) and renders the violation list as plain text.

use std::io;

use serde::{Deserialize, Serialize};
use sgscheck_core::{EligibilityReport, Qualification, Roster};

/// One row of the roster snapshot: category, team index, and the
/// technician's fields, exactly as the export table shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub category: String,
    pub team_index: usize,
    pub given_name: String,
    pub family_name: String,
    pub qualification: Option<Qualification>,
    pub note: String,
}

impl RosterRow {
    fn from_assignment(assignment: &sgscheck_core::CategoryAssignment) -> Self {
        Self {
            category: assignment.category.to_string(),
            team_index: assignment.team_index,
            given_name: assignment.technician.given_name.clone(),
            family_name: assignment.technician.family_name.clone(),
            qualification: assignment.technician.qualification,
            note: assignment.technician.note.clone(),
        }
    }
}

/// Every assignment as a flat row, categories senior to youngest,
/// placeholder slots included.
pub fn snapshot(roster: &Roster) -> Vec<RosterRow> {
    roster.rows().map(RosterRow::from_assignment).collect()
}

/// Like [`snapshot`], but without placeholder slots. This is the shape
/// exported when a submission passes.
pub fn completed_snapshot(roster: &Roster) -> Vec<RosterRow> {
    roster
        .rows()
        .filter(|assignment| !assignment.technician.is_placeholder())
        .map(RosterRow::from_assignment)
        .collect()
}

/// Write the rows as CSV with a header record.
pub fn write_csv<W: io::Write>(rows: &[RosterRow], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// The rows as pretty-printed JSON records.
pub fn to_json_pretty(rows: &[RosterRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Render the evaluation outcome: a fixed success line, or the
/// bulleted violation list in report order.
pub fn render_text(report: &EligibilityReport) -> String {
    if report.is_accepted() {
        return "OK: the submission satisfies all technical-staff requirements.\n".to_string();
    }
    let mut out = String::from("Violations found:\n");
    for message in report.messages() {
        out.push_str("- ");
        out.push_str(message);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgscheck_core::{Category, RawTechnician, Submission, evaluate, normalize};
    use std::collections::BTreeMap;

    fn sample_roster() -> Roster {
        let submission = Submission {
            director: RawTechnician {
                given_name: "Luca".to_string(),
                family_name: "Bianchi".to_string(),
                qualification: Some(Qualification::UefaA),
                note: String::new(),
            },
            teams: BTreeMap::from([
                (
                    Category::Esordienti,
                    vec![
                        RawTechnician {
                            given_name: "Marco".to_string(),
                            family_name: "Russo".to_string(),
                            qualification: Some(Qualification::UefaC),
                            note: "second year".to_string(),
                        },
                        RawTechnician::default(),
                    ],
                ),
                (
                    Category::Allievi,
                    vec![RawTechnician {
                        given_name: "Mario".to_string(),
                        family_name: "Rossi".to_string(),
                        qualification: Some(Qualification::UefaB),
                        note: String::new(),
                    }],
                ),
            ]),
        };
        normalize(submission).1
    }

    #[test]
    fn snapshot_keeps_placeholders_and_category_order() {
        let rows = snapshot(&sample_roster());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "Allievi");
        assert_eq!(rows[1].category, "Esordienti");
        assert_eq!(rows[1].team_index, 1);
        assert_eq!(rows[2].team_index, 2);
        assert!(rows[2].family_name.is_empty());
    }

    #[test]
    fn completed_snapshot_drops_placeholders() {
        let rows = completed_snapshot(&sample_roster());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !row.family_name.is_empty()));
    }

    #[test]
    fn csv_has_header_and_federation_spellings() {
        let rows = completed_snapshot(&sample_roster());
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "category,team_index,given_name,family_name,qualification,note"
        );
        assert_eq!(lines.next().unwrap(), "Allievi,1,Mario,Rossi,Uefa B,");
        assert_eq!(
            lines.next().unwrap(),
            "Esordienti,1,Marco,Russo,Uefa C,second year"
        );
    }

    #[test]
    fn json_round_trips_rows() {
        let rows = snapshot(&sample_roster());
        let json = to_json_pretty(&rows).unwrap();
        let back: Vec<RosterRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn render_text_success_line() {
        let report = EligibilityReport::default();
        assert_eq!(
            render_text(&report),
            "OK: the submission satisfies all technical-staff requirements.\n"
        );
    }

    #[test]
    fn render_text_lists_violations_in_order() {
        let submission = Submission {
            director: RawTechnician {
                given_name: "Luca".to_string(),
                family_name: "Bianchi".to_string(),
                qualification: Some(Qualification::ScienzeMotorie),
                note: String::new(),
            },
            teams: BTreeMap::new(),
        };
        let (director, roster) = normalize(submission);
        let report = evaluate(&director, &roster);
        let text = render_text(&report);
        assert!(text.starts_with("Violations found:\n- Responsabile Tecnico cannot hold"));
    }
}
