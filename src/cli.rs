//! Drives the interpreter from the command line: a REPL when invoked
//! with no arguments, or a single source file when given a path.
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as ClapParser;

use crate::vm::{errors::VMError, interpret};

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to run. Omit to start the REPL.
    pub path: Option<PathBuf>,
}

/// Reads one line at a time and interprets it on its own; a line that
/// fails to compile or run just prints its error and leaves the REPL
/// running for the next one.
pub fn repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        if let Err(e) = stdout.flush() {
            eprintln!("Error flushing stdout: {e}");
            break;
        }

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                if let Err(e) = interpret(&line) {
                    eprint!("{e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading line: {e}");
                break;
            }
        }
    }
}

/// Reads `path`, interprets it, and returns the exit code the process
/// should terminate with: 0 on success, 65 on a compile error, 70 on a
/// runtime error, 74 if the file can't be read.
pub fn run_file(path: &PathBuf) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not open file \"{}\": {e}.", path.display());
            return ExitCode::from(74);
        }
    };

    match interpret(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(VMError::CompileError(e)) => {
            eprint!("{e}");
            ExitCode::from(65)
        }
        Err(e @ VMError::RuntimeError(_)) => {
            eprint!("{e}");
            ExitCode::from(70)
        }
    }
}
