//! Appends a named seed to an example catalogue seed registry.
//!
//! Parsing and the update live in `example_data::registry_update`; this
//! binary only wires them to the process and its exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use example_data::registry_update::{AddSeedArgs, add_seed};

fn main() -> ExitCode {
    let args = AddSeedArgs::parse();
    match add_seed(&args) {
        Ok(added) => {
            emit(&mut io::stdout().lock(), &format!("{added} to {}", args.registry_path));
            ExitCode::SUCCESS
        }
        Err(err) => {
            emit(&mut io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn emit(out: &mut impl Write, line: &str) {
    // Nothing useful remains to be done if the terminal is gone.
    drop(writeln!(out, "{line}"));
}
