// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use fixgen::{Args, exit_code, logging, run};

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
