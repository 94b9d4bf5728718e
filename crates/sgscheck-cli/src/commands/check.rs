use crate::support::{load_submission_or_exit, write_file_or_exit};
use serde_json::json;
use sgscheck_core::{evaluate, normalize};
use sgscheck_report::{completed_snapshot, render_text, snapshot, write_csv};

pub fn run(submission: String, csv: Option<String>, json_output: bool) {
    let submission = load_submission_or_exit(&submission);
    let (director, roster) = normalize(submission);
    let report = evaluate(&director, &roster);

    if json_output {
        let payload = json!({
            "accepted": report.is_accepted(),
            "violations": report.violations,
            "roster": snapshot(&roster),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        print!("{}", render_text(&report));
    }

    if !report.is_accepted() {
        std::process::exit(1);
    }

    if let Some(path) = csv {
        let rows = completed_snapshot(&roster);
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap_or_else(|e| {
            eprintln!("error: failed to serialize csv: {e}");
            std::process::exit(1);
        });
        write_file_or_exit(&path, &buffer);
    }
}
