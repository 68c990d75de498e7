//! Gear CLI - personal inventory organizer

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = gear_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
