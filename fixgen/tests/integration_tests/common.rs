// tests/integration_tests/common.rs
use anyhow::Result;
use fixgen::{Fixture, generate};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Creates `<tmp>/<name>/in/` holding the given `(file name, content)` pairs.
pub fn setup_fixture(name: &str, inputs: &[(&str, &str)]) -> Result<(TempDir, Fixture)> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join(name);
    fs::create_dir_all(root.join("in"))?;

    for (file, content) in inputs {
        create_test_file(&root, &format!("in/{file}"), content)?;
    }

    let fixture = Fixture::from_root(root)?;
    Ok((temp_dir, fixture))
}

/// Generates the fixture and returns the output file's contents.
pub fn generate_output(fixture: &Fixture) -> Result<String> {
    let report = generate(fixture)?;
    Ok(fs::read_to_string(report.output)?)
}
