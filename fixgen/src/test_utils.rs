// src/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::Fixture;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Root with `in/a.txt` = "foo bar foo" and `in/b.txt` = "bar baz", named `t`.
pub fn setup_fixture_directory() -> Result<(TempDir, Fixture)> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "in/a.txt", "foo bar foo")?;
    create_test_file(&dir, "in/b.txt", "bar baz")?;

    let fixture = Fixture::new(dir.path(), "t");
    Ok((dir, fixture))
}
