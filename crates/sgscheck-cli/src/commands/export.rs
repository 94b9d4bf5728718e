use crate::support::{load_submission_or_exit, write_file_or_exit};
use sgscheck_core::normalize;
use sgscheck_report::{completed_snapshot, snapshot, to_json_pretty, write_csv};

pub fn run(submission: String, all: bool, out: Option<String>, json_output: bool) {
    let submission = load_submission_or_exit(&submission);
    let (_, roster) = normalize(submission);

    let rows = if all {
        snapshot(&roster)
    } else {
        completed_snapshot(&roster)
    };

    let contents = if json_output {
        let mut text = to_json_pretty(&rows).expect("json serialization");
        text.push('\n');
        text.into_bytes()
    } else {
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap_or_else(|e| {
            eprintln!("error: failed to serialize csv: {e}");
            std::process::exit(1);
        });
        buffer
    };

    match out {
        Some(path) => write_file_or_exit(&path, &contents),
        None => print!("{}", String::from_utf8_lossy(&contents)),
    }
}
