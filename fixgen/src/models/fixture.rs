// src/models/fixture.rs
use std::path::{Path, PathBuf};

use crate::error::{FixtureError, Result};

/// Name of the subdirectory holding the input `.txt` files.
pub const INPUT_DIR: &str = "in";

/// Suffix appended to the fixture name to form the output file name.
pub const OUTPUT_SUFFIX: &str = "-out-expected.txt";

/// A fixture directory: the root holding `in/` and the name used for the
/// generated `<name>-out-expected.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    root: PathBuf,
    name: String,
}

impl Fixture {
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    /// Builds a fixture named after the root directory itself, so `t1`
    /// produces `t1/t1-out-expected.txt` and `cases/t1` produces
    /// `cases/t1/t1-out-expected.txt`.
    ///
    /// Roots such as `.` or `..` that have no final component keep their own
    /// text as the name, so `.` produces `./.-out-expected.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidRoot`] if no UTF-8 directory name can be
    /// derived from the root.
    #[inline]
    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let invalid = || FixtureError::InvalidRoot { path: root.clone() };

        let name = root
            .file_name()
            .unwrap_or(root.as_os_str())
            .to_str()
            .ok_or_else(invalid)?
            .to_owned();

        Ok(Self { root, name })
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn input_dir(&self) -> PathBuf {
        self.root.join(INPUT_DIR)
    }

    #[inline]
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(format!("{}{OUTPUT_SUFFIX}", self.name))
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub files: usize,
    pub tokens: u64,
    pub distinct: usize,
    pub output: PathBuf,
}
