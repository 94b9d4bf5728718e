use sgscheck_core::Submission;
use std::fs;
use std::path::Path;

pub fn load_submission_or_exit(path: &str) -> Submission {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {path}: {e}");
        std::process::exit(1);
    });
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {path}: {e}");
        std::process::exit(1);
    })
}

pub fn write_file_or_exit(path: &str, contents: &[u8]) {
    if let Err(e) = fs::write(Path::new(path), contents) {
        eprintln!("error: failed to write {path}: {e}");
        std::process::exit(1);
    }
}
