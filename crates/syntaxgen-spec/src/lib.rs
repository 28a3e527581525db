//! Syntaxgen step configuration
//!
//! This crate holds the declarative side of a syntaxgen build step: the typed
//! configuration a build integrates against, and the registry of supported
//! target-language backends.
//!
//! # Overview
//!
//! A build step is described by a [`StepConfig`], usually deserialized from a
//! JSON step file with camelCase keys:
//!
//! ```json
//! {
//!     "sourceFile": "grammar.syx",
//!     "outputFile": "out/Parser.java",
//!     "language": "java",
//!     "reportFile": "out/Parser.txt"
//! }
//! ```
//!
//! Every field except `sourceFile` and `outputFile` has a documented default,
//! so a minimal step file only names its input and output. The configuration
//! is intent only; turning it into an invocation of the external `syntax`
//! tool is the job of the `syntaxgen-invoke` crate.
//!
//! # Crate Structure
//!
//! - [`config`] - Build-step configuration types and step-file loading
//! - [`language`] - Target-language backend registry
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod language;

// Re-export main types at crate root
pub use config::{Algorithm, Driver, StepConfig, UNSET};
pub use error::{ConfigError, ConfigResult};
pub use language::{find_language, LanguageDescriptor, LANGUAGES};
