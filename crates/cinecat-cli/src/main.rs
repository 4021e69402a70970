use cinecat_core::logging;

mod cli;

use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> ExitCode {
    // File logging when the state dir is writable, stderr otherwise.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match Cli::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("cinecat error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
