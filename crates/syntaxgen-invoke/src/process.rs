//! Process-backed generator.
//!
//! Runs the external `syntax` tool as a subprocess and classifies its exit
//! status into the generator failure categories.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

use crate::generator::{ExecutionContext, Generator, GeneratorError};

/// Exit code the tool reports for a grammar parsing failure.
pub const EXIT_PARSE: i32 = 1;
/// Exit code the tool reports for a semantic analysis failure.
pub const EXIT_ANALYSIS: i32 = 2;
/// Exit code the tool reports for an output writing failure.
pub const EXIT_OUTPUT: i32 = 3;

/// Non-zero exit of the tool, with captured diagnostics.
#[derive(Debug, Error)]
#[error("syntax exited with status {exit_code}: {stderr}")]
pub struct ToolFailure {
    pub exit_code: i32,
    pub stderr: String,
}

/// Configuration for the process-backed generator.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Path to the syntax executable.
    pub tool_path: Option<PathBuf>,
    /// Whether to capture the tool's stderr for diagnostics.
    pub capture_output: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool_path: None,
            capture_output: true,
        }
    }
}

impl ToolConfig {
    /// Sets the tool executable path.
    pub fn tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(path.into());
        self
    }
}

/// Generator implementation that spawns the external `syntax` tool.
#[derive(Debug, Default)]
pub struct SyntaxTool {
    config: ToolConfig,
}

impl SyntaxTool {
    /// Creates a tool wrapper with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tool wrapper with the given configuration.
    pub fn with_config(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Finds the syntax executable.
    ///
    /// Resolution order: explicit config override, the `SYNTAX_PATH`
    /// environment variable, then the system PATH.
    pub fn find_tool(&self) -> io::Result<PathBuf> {
        if let Some(ref path) = self.config.tool_path {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        if let Ok(path) = std::env::var("SYNTAX_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        if let Ok(path) = which::which("syntax") {
            return Ok(path);
        }

        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "syntax executable not found. Ensure it is installed and in PATH, \
             or set the SYNTAX_PATH environment variable",
        ))
    }
}

/// Maps a non-zero tool exit onto a generator failure category.
fn classify_failure(exit_code: i32, stderr: String) -> GeneratorError {
    let failure = ToolFailure { exit_code, stderr };
    match exit_code {
        EXIT_PARSE => GeneratorError::parse(failure),
        EXIT_ANALYSIS => GeneratorError::analysis(failure),
        EXIT_OUTPUT => GeneratorError::output(failure),
        _ => GeneratorError::tool(failure),
    }
}

impl Generator for SyntaxTool {
    fn run(
        &mut self,
        ctx: &mut dyn ExecutionContext,
        argv: &[String],
    ) -> Result<(), GeneratorError> {
        let tool = self.find_tool().map_err(GeneratorError::tool)?;
        let workdir = ctx.workdir().map_err(GeneratorError::tool)?.to_path_buf();

        let mut cmd = Command::new(&tool);
        cmd.args(argv).current_dir(&workdir);

        if self.config.capture_output {
            // Output files are written to absolute paths; stdout carries
            // nothing the build needs.
            cmd.stdout(Stdio::null()).stderr(Stdio::piped());
        }

        let output = cmd.output().map_err(GeneratorError::tool)?;
        if output.status.success() {
            return Ok(());
        }

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        Err(classify_failure(exit_code, stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StepContext;

    #[test]
    fn test_classify_known_exit_codes() {
        assert!(matches!(
            classify_failure(EXIT_PARSE, String::new()),
            GeneratorError::Parse(_)
        ));
        assert!(matches!(
            classify_failure(EXIT_ANALYSIS, String::new()),
            GeneratorError::Analysis(_)
        ));
        assert!(matches!(
            classify_failure(EXIT_OUTPUT, String::new()),
            GeneratorError::Output(_)
        ));
    }

    #[test]
    fn test_classify_unknown_exit_code() {
        assert!(matches!(
            classify_failure(99, String::new()),
            GeneratorError::Tool(_)
        ));
        assert!(matches!(
            classify_failure(-1, String::new()),
            GeneratorError::Tool(_)
        ));
    }

    #[test]
    fn test_classify_keeps_stderr() {
        let err = classify_failure(EXIT_PARSE, "line 3: unexpected token".to_string());
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().contains("unexpected token"));
        assert!(cause.to_string().contains("status 1"));
    }

    #[test]
    fn test_find_tool_prefers_config_override() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let tool = SyntaxTool::with_config(ToolConfig::default().tool_path(tmp.path()));
        assert_eq!(tool.find_tool().unwrap(), tmp.path());
    }

    #[test]
    fn test_find_tool_ignores_missing_override() {
        // A dangling override falls through to env/PATH resolution; with no
        // tool installed either way the lookup fails.
        if std::env::var_os("SYNTAX_PATH").is_some() || which::which("syntax").is_ok() {
            eprintln!("syntax tool available; skipping not-found test");
            return;
        }
        let tool = SyntaxTool::with_config(ToolConfig::default().tool_path("/does/not/exist"));
        let err = tool.find_tool().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_classifies_script_exit() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let script = tmp.path().join("fake-syntax");
        std::fs::write(&script, "#!/bin/sh\necho 'bad grammar' 1>&2\nexit 1\n").unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        let mut tool = SyntaxTool::with_config(ToolConfig::default().tool_path(&script));
        let mut ctx = StepContext::new();
        let err = tool.run(&mut ctx, &["--verbose".to_string()]).unwrap_err();
        assert!(matches!(err, GeneratorError::Parse(_)));
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().contains("bad grammar"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_succeeds_on_zero_exit() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let script = tmp.path().join("fake-syntax");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        let mut tool = SyntaxTool::with_config(ToolConfig::default().tool_path(&script));
        let mut ctx = StepContext::new();
        tool.run(&mut ctx, &[]).unwrap();
    }
}
