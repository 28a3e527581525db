//! Syntaxgen Invocation Compiler
//!
//! This crate turns a declarative [`StepConfig`] into one invocation of the
//! external `syntax` parser generator. It owns the only part of the system
//! with real design constraints: the argument vector is counted before it is
//! filled (never resized), option-to-token mapping is exhaustive and
//! order-stable, and derived file names come from pure path manipulation.
//!
//! # Pipeline
//!
//! One build step runs through a fixed sequence:
//!
//! 1. Resolve the configured language against the backend registry
//! 2. Validate that source and output files are present
//! 3. Derive the include file when a report is requested without one
//! 4. Compute pair/flag/file slot counts ([`ArgvPlan`])
//! 5. Create the parent directories of output-side paths
//! 6. Assemble the vector in fixed order: pairs, flags, files
//! 7. Delegate to the generator and translate its failure categories
//!
//! The generator is reached only through the [`Generator`] trait; the
//! default implementation ([`SyntaxTool`]) runs the external tool as a
//! subprocess. The [`ExecutionContext`] handed to it is released
//! unconditionally after the call.
//!
//! # Example
//!
//! ```ignore
//! use syntaxgen_invoke::run_step;
//! use syntaxgen_spec::StepConfig;
//!
//! let mut config = StepConfig::new("grammar.syx", "out/Parser.java");
//! config.report_file = Some("out/Parser.txt".into());
//! run_step(&config)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`compiler`] - Configuration-to-invocation compiler
//! - [`generator`] - Generator boundary traits and failure categories
//! - [`process`] - Process-backed generator running the external tool
//! - [`context`] - Default execution context
//! - [`paths`] - Path helpers
//! - [`error`] - Error types

pub mod compiler;
pub mod context;
pub mod error;
pub mod generator;
pub mod paths;
pub mod process;

// Re-export main types at crate root
pub use compiler::{compile, execute, plan, ArgumentVector, ArgvPlan};
pub use context::StepContext;
pub use error::{InvokeError, InvokeResult};
pub use generator::{ExecutionContext, Generator, GeneratorError};
pub use process::{SyntaxTool, ToolConfig, ToolFailure};

use syntaxgen_spec::StepConfig;

/// Runs one build step end to end with the process-backed generator and a
/// fresh execution context.
pub fn run_step(config: &StepConfig) -> InvokeResult<()> {
    let mut tool = SyntaxTool::new();
    let mut ctx = StepContext::new();
    compiler::execute(config, &mut tool, &mut ctx)
}
