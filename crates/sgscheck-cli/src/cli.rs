use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sgscheck",
    about = "Eligibility checks for SGS youth-club technical staff submissions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the eligibility rule battery over a submission
    ///
    /// Exits 1 when the submission is rejected.
    Check {
        /// Path to the submission JSON
        submission: String,

        /// When accepted, also write the completed-roster CSV here
        #[arg(long)]
        csv: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the normalized roster snapshot without evaluating
    Export {
        /// Path to the submission JSON
        submission: String,

        /// Keep placeholder rows (the full configured grid)
        #[arg(long)]
        all: bool,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<String>,

        /// JSON records instead of CSV
        #[arg(long)]
        json: bool,
    },
}
