use std::process::ExitCode;

use tally_core::cli::run_cli;

fn main() -> ExitCode {
    tally_core::init();

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
