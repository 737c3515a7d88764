//! CLI entry point for the themed thumbnail batch

use clap::Parser;
use placard::io::cli::{BatchRunner, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut runner = BatchRunner::new(Cli::parse());
    runner.init_tracing();

    match runner.process() {
        Ok(report) if report.has_failures() => {
            for (item, error) in report.failures() {
                tracing::error!(file = %item.filename, %error, "not written");
            }
            ExitCode::from(2)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "batch could not start");
            ExitCode::FAILURE
        }
    }
}
