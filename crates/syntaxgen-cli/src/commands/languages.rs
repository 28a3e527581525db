//! Languages command implementation
//!
//! Prints the registry of supported target-language backends.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use syntaxgen_spec::LANGUAGES;

/// Run the languages command
pub fn run() -> Result<ExitCode> {
    println!("{}", "Supported languages:".cyan().bold());
    for language in LANGUAGES {
        println!(
            "  {:<8} {} {:<3} {} {}",
            language.id,
            "code:".dimmed(),
            language.code,
            "include suffix:".dimmed(),
            language.include_suffix
        );
    }
    Ok(ExitCode::SUCCESS)
}
