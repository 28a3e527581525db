//! Generate command implementation
//!
//! Loads a step file, compiles it into a tool invocation and runs it.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use syntaxgen_invoke::{compile, run_step, InvokeError};
use syntaxgen_spec::StepConfig;

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Path to the JSON step file
/// * `dry_run` - Print the compiled argument vector instead of invoking the tool
///
/// # Returns
/// Exit code: 0 on success, 1 when the step fails
pub fn run(config_path: &str, dry_run: bool) -> Result<ExitCode> {
    let config = StepConfig::from_path(Path::new(config_path))
        .with_context(|| format!("Failed to load step file: {}", config_path))?;

    println!("{} {}", "Step:".cyan().bold(), config_path);
    println!("{} {}", "Language:".dimmed(), config.language);

    if dry_run {
        return dry_run_step(&config);
    }

    match run_step(&config) {
        Ok(()) => {
            println!("{} Generation complete", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

fn dry_run_step(config: &StepConfig) -> Result<ExitCode> {
    match compile(config) {
        Ok(argv) => {
            println!("{}", "Arguments:".dimmed());
            for arg in argv.as_args() {
                println!("  {}", arg);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

/// Prints one failure line plus its cause chain and maps to exit code 1.
fn report_failure(err: &InvokeError) -> ExitCode {
    println!("{} {}", "FAILED".red().bold(), err);
    let mut cause = std::error::Error::source(err);
    while let Some(c) = cause {
        println!("  {} {}", "caused by:".dimmed(), c);
        cause = c.source();
    }
    ExitCode::from(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_step(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("step.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    // ExitCode has no PartialEq impl; its Debug output is stable enough here.
    fn exit_code_eq(actual: ExitCode, expected: ExitCode) -> bool {
        format!("{:?}", actual) == format!("{:?}", expected)
    }

    #[test]
    fn generate_dry_run_compiles_minimal_step() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("g.syx");
        let output = tmp.path().join("out").join("Gen.java");
        let json = format!(
            r#"{{ "sourceFile": {:?}, "outputFile": {:?} }}"#,
            source, output
        );
        let path = write_step(&tmp, &json);

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert!(exit_code_eq(code, ExitCode::SUCCESS));
        assert!(tmp.path().join("out").is_dir());
    }

    #[test]
    fn generate_dry_run_reports_unsupported_language() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_step(
            &tmp,
            r#"{ "sourceFile": "g.syx", "outputFile": "Gen.java", "language": "cobol" }"#,
        );

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert!(exit_code_eq(code, ExitCode::from(1)));
    }

    #[test]
    fn generate_fails_on_missing_step_file() {
        let err = run("/nonexistent/step.json", true).unwrap_err();
        assert!(err.to_string().contains("Failed to load step file"));
    }

    #[test]
    fn generate_fails_on_malformed_step_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_step(&tmp, "{ not json");
        assert!(run(path.to_str().unwrap(), true).is_err());
    }
}
