// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("missing root directory argument (usage: fixgen <root>)")]
    MissingArgument,

    #[error("input directory not found: {}", .path.display())]
    MissingInputDir { path: PathBuf },

    #[error("root path has no usable directory name: {}", .path.display())]
    InvalidRoot { path: PathBuf },

    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list input files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixtureError {
    /// Usage errors exit with 2, everything else with 1.
    #[inline]
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_usage() { 2 } else { 1 }
    }

    #[inline]
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(*self, Self::MissingArgument)
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
