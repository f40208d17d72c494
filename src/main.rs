//! Binary entrypoint for the `unalias` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match unalias::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(unalias::Error::Cli(err)) => {
            // clap formats help and version output itself, and picks the exit code.
            let _ = err.print();
            if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
