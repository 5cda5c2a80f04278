// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test_utils;

pub use cli::{Args, exit_code, run};
pub use crate::core::generator::{count_inputs, generate, write_fixture};
pub use crate::core::input::input_files;
pub use error::FixtureError;
pub use models::{Fixture, GenerateReport, WordCounts};
