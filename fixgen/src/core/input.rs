// src/core/input.rs
use glob::{MatchOptions, Pattern};
use std::path::PathBuf;
use tracing::warn;

use crate::error::{FixtureError, Result};
use crate::models::Fixture;

/// File pattern matched inside the input directory.
pub const INPUT_GLOB: &str = "*.txt";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Lists the `*.txt` files directly inside the fixture's input directory.
///
/// Dot-files, subdirectories and anything that is not a regular file are
/// skipped. Paths are returned in the order `glob` yields them, which is
/// sorted by name.
///
/// # Errors
///
/// This function may return an error if:
/// * The input directory does not exist or is not a directory
/// * The input directory path is not valid UTF-8
/// * A directory entry cannot be read while listing
#[inline]
pub fn input_files(fixture: &Fixture) -> Result<Vec<PathBuf>> {
    let dir = fixture.input_dir();
    if !dir.is_dir() {
        return Err(FixtureError::MissingInputDir { path: dir });
    }

    let dir_str = dir
        .to_str()
        .ok_or_else(|| FixtureError::InvalidRoot { path: dir.clone() })?;
    let pattern = format!("{}/{INPUT_GLOB}", Pattern::escape(dir_str));

    let paths = glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|source| FixtureError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path?;
        if path.is_file() {
            files.push(path);
        } else {
            warn!(path = %path.display(), "skipping non-file input match");
        }
    }

    Ok(files)
}
