//! Error types for the invocation compiler.

use crate::generator::GeneratorError;
use thiserror::Error;

/// Result type for invocation operations.
pub type InvokeResult<T> = Result<T, InvokeError>;

/// Errors that can fail a build step.
///
/// Configuration errors are detected before the generator is called and
/// before any directory is created. Generator failures are caught at the
/// delegation boundary and re-signaled with a category-specific message,
/// keeping the original failure chained for diagnostics.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The configured language names no registered backend.
    #[error("language is not supported")]
    UnsupportedLanguage,

    /// No grammar source file was configured.
    #[error("sourceFile was not provided")]
    MissingSourceFile,

    /// No output file was configured.
    #[error("outputFile was not provided")]
    MissingOutputFile,

    /// The generator rejected the grammar source.
    #[error("the source file cannot be parsed")]
    SourceNotParsed(#[source] GeneratorError),

    /// The generator failed during semantic analysis.
    #[error("the source file cannot be analyzed")]
    SourceNotAnalyzed(#[source] GeneratorError),

    /// The generator could not write its output.
    #[error("the source file cannot be written to")]
    OutputNotWritten(#[source] GeneratorError),

    /// The generator tool could not be run at all.
    #[error("the generator tool could not be run")]
    ToolFailed(#[source] GeneratorError),

    /// IO error during directory preparation or path resolution.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
