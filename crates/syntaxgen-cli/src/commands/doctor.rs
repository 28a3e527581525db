//! Doctor command implementation
//!
//! Checks whether the external syntax tool is discoverable.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use syntaxgen_invoke::SyntaxTool;

/// Run the doctor command
///
/// # Returns
/// Exit code: 0 when the tool was found, 1 otherwise
pub fn run() -> Result<ExitCode> {
    println!("{}", "Checking syntax tool:".cyan().bold());

    match SyntaxTool::new().find_tool() {
        Ok(path) => {
            println!("  {} found at {}", "ok".green().bold(), path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("  {} {}", "missing".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}
