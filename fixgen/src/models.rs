// src/models.rs
pub mod fixture;
pub mod word_counts;

pub use fixture::{Fixture, GenerateReport};
pub use word_counts::WordCounts;
