// src/core.rs
pub mod generator;
pub mod input;
