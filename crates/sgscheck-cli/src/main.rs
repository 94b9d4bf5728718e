//! sgscheck CLI: the `sgscheck` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            submission,
            csv,
            json,
        } => commands::check::run(submission, csv, json),

        Commands::Export {
            submission,
            all,
            out,
            json,
        } => commands::export::run(submission, all, out, json),
    }
}
