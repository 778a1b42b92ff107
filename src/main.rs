use std::process::ExitCode;

use clap::Parser;
use exprlox::cli::{Cli, repl, run_file};

/// clap's own default exit code for a usage error is 2; this language's
/// external-interface contract (spec.md §6) calls for 64, so usage
/// errors are intercepted here rather than left to `Cli::parse`.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.exit_code() == 0 {
                print!("{e}");
                return ExitCode::SUCCESS;
            }
            eprint!("{e}");
            return ExitCode::from(64);
        }
    };

    match cli.path {
        Some(path) => run_file(&path),
        None => {
            repl();
            ExitCode::SUCCESS
        }
    }
}
