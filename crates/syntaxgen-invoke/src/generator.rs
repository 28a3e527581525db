//! Generator boundary.
//!
//! The external code-generation engine is consumed through two narrow traits:
//! [`Generator`], whose entry point takes the compiled argument vector and an
//! execution context, and [`ExecutionContext`], whose `release` hook must be
//! called exactly once after the generator call regardless of outcome.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Boxed cause carried by a generator failure.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure categories raised by the generator.
///
/// `Parse`, `Analysis` and `Output` are the recoverable categories the
/// invocation compiler translates into build-step failures. `Tool` covers
/// launch problems and unclassifiable exits of the external process.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The grammar source could not be parsed.
    #[error("grammar parsing failed")]
    Parse(#[source] Cause),

    /// Semantic analysis of the grammar failed.
    #[error("semantic analysis failed")]
    Analysis(#[source] Cause),

    /// Generated output could not be written.
    #[error("output writing failed")]
    Output(#[source] Cause),

    /// The generator tool could not be started, or failed in a way that
    /// matches none of the three source-level categories.
    #[error("generator tool failure")]
    Tool(#[source] Cause),
}

impl GeneratorError {
    /// Creates a parse-category failure.
    pub fn parse(cause: impl Into<Cause>) -> Self {
        Self::Parse(cause.into())
    }

    /// Creates an analysis-category failure.
    pub fn analysis(cause: impl Into<Cause>) -> Self {
        Self::Analysis(cause.into())
    }

    /// Creates an output-category failure.
    pub fn output(cause: impl Into<Cause>) -> Self {
        Self::Output(cause.into())
    }

    /// Creates a tool failure.
    pub fn tool(cause: impl Into<Cause>) -> Self {
        Self::Tool(cause.into())
    }
}

/// Per-invocation execution state handed to the generator.
///
/// Implementations own whatever scratch resources one run needs. `release`
/// must be idempotent-safe to call and is invoked exactly once by the
/// invocation compiler after the generator returns, success or failure.
pub trait ExecutionContext {
    /// Working directory for the generator run, created on first use.
    fn workdir(&mut self) -> io::Result<&Path>;

    /// Releases every resource held for this invocation.
    fn release(&mut self);
}

/// Entry point of the external code-generation engine.
pub trait Generator {
    /// Runs the generator with the fully compiled argument vector.
    ///
    /// The vector is consumed as-is; the generator performs its own argument
    /// re-parsing.
    fn run(
        &mut self,
        ctx: &mut dyn ExecutionContext,
        argv: &[String],
    ) -> Result<(), GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_cause(msg: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, msg.to_string())
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            GeneratorError::parse(io_cause("x")).to_string(),
            "grammar parsing failed"
        );
        assert_eq!(
            GeneratorError::analysis(io_cause("x")).to_string(),
            "semantic analysis failed"
        );
        assert_eq!(
            GeneratorError::output(io_cause("x")).to_string(),
            "output writing failed"
        );
        assert_eq!(
            GeneratorError::tool(io_cause("x")).to_string(),
            "generator tool failure"
        );
    }

    #[test]
    fn test_cause_is_preserved() {
        let err = GeneratorError::parse(io_cause("unexpected token '%'"));
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().contains("unexpected token"));
    }
}
