//! CLI command implementations.
//!
//! Each command exposes `pub fn run(...) -> anyhow::Result<ExitCode>`.

pub mod doctor;
pub mod generate;
pub mod languages;
