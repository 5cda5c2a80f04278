// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::generator::generate;
use crate::error::FixtureError;
use crate::models::Fixture;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Fixture directory containing an `in/` folder of .txt files
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

/// Generates `<root>/<root>-out-expected.txt` for the given arguments.
///
/// # Errors
///
/// Returns [`FixtureError::MissingArgument`] when no root was given, and a
/// filesystem error (with the root as context) when generation fails.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let root = args.root.ok_or(FixtureError::MissingArgument)?;
    let fixture = Fixture::from_root(&root)?;

    generate(&fixture)
        .with_context(|| format!("Failed to generate fixture for: {}", root.display()))?;

    Ok(())
}

/// Picks the process exit code for an error returned by [`run`].
#[inline]
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<FixtureError>()
        .map_or(1, FixtureError::exit_code)
}
