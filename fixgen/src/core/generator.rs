// src/core/generator.rs
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{debug, info};

use crate::core::input::input_files;
use crate::error::{FixtureError, Result};
use crate::models::{Fixture, GenerateReport, WordCounts};

/// Counts the tokens of every input file of `fixture`.
///
/// Each file is read completely and closed before the next one is opened.
/// Returns the combined counts together with the number of files read.
///
/// # Errors
///
/// This function may return an error if:
/// * The input directory is missing or cannot be listed
/// * An input file cannot be read or is not valid UTF-8
#[inline]
pub fn count_inputs(fixture: &Fixture) -> Result<(WordCounts, usize)> {
    let files = input_files(fixture)?;
    let mut counts = WordCounts::new();

    for path in &files {
        let content = fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.clone(),
            source,
        })?;
        let tokens = counts.add_text(&content);
        debug!(path = %path.display(), tokens, "counted input file");
    }

    Ok((counts, files.len()))
}

/// Writes `counts` to the fixture's output file, replacing any previous one.
///
/// # Errors
///
/// Returns [`FixtureError::Write`] if the file cannot be created or written.
#[inline]
pub fn write_fixture(fixture: &Fixture, counts: &WordCounts) -> Result<()> {
    let output = fixture.output_path();
    let write_err = |source| FixtureError::Write {
        path: output.clone(),
        source,
    };

    let file = File::create(&output).map_err(write_err)?;
    counts.write_to(BufWriter::new(file)).map_err(write_err)
}

/// Generates `<root>/<name>-out-expected.txt` from the `*.txt` files in
/// `<root>/in`.
///
/// Nothing is written unless every input was read successfully.
///
/// # Errors
///
/// This function may return an error if:
/// * The input directory is missing or cannot be listed
/// * An input file cannot be read or is not valid UTF-8
/// * The output file cannot be created or written
#[inline]
pub fn generate(fixture: &Fixture) -> Result<GenerateReport> {
    let (counts, files) = count_inputs(fixture)?;
    write_fixture(fixture, &counts)?;

    let report = GenerateReport {
        files,
        tokens: counts.total(),
        distinct: counts.len(),
        output: fixture.output_path(),
    };
    info!(
        output = %report.output.display(),
        files = report.files,
        tokens = report.tokens,
        distinct = report.distinct,
        "wrote fixture"
    );

    Ok(report)
}
