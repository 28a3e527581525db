//! Build-step configuration types.
//!
//! A [`StepConfig`] is the declared intent of one generation step. It is
//! typically deserialized from a JSON step file; every field except the two
//! required file paths has a documented default, applied through the
//! [`Default`] impl so omitted keys and programmatic construction agree.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Sentinel for the integer options `margin` and `indent`: the backend
/// default applies and no pair is emitted on the command line.
pub const UNSET: i32 = -1;

/// Parser construction algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// LALR(1) table construction.
    #[default]
    Lalr,
    /// SLR table construction.
    Slr,
}

impl Algorithm {
    /// Returns the command-line token for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Lalr => "lalr",
            Algorithm::Slr => "slr",
        }
    }
}

/// Driver style of the generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// Generate a parser driver.
    #[default]
    Parser,
    /// Generate a scanner driver.
    Scanner,
}

impl Driver {
    /// Returns the command-line token for this driver.
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Parser => "parser",
            Driver::Scanner => "scanner",
        }
    }
}

/// Declared intent of one generation step.
///
/// `source_file` and `output_file` are modeled as options because the step
/// file may omit them, but they must be present by the time an invocation is
/// compiled; absence is a configuration error reported by the invocation
/// compiler, never a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepConfig {
    /// Grammar source file. Required.
    pub source_file: Option<PathBuf>,
    /// Generated parser file. Required.
    pub output_file: Option<PathBuf>,
    /// Include file to generate alongside the output. Derived from the
    /// output path when a report is requested and this is left unset.
    pub include_file: Option<PathBuf>,
    /// Textual report file with summaries and additional detail.
    pub report_file: Option<PathBuf>,
    /// External skeleton overriding the tool's built-in template.
    pub skeleton_file: Option<PathBuf>,
    /// Resource bundle for error messages (java backend).
    pub bundle_file: Option<PathBuf>,
    /// Target language backend, by id or language code.
    pub language: String,
    /// Parser construction algorithm.
    pub algorithm: Algorithm,
    /// Packed parser tables; tabular tables when false.
    pub packed: bool,
    /// Generate the include file externally.
    pub external_include: bool,
    /// Verbose tool output.
    pub verbose: bool,
    /// Debugging tool output.
    pub debug: bool,
    /// Run only the tokenizer, dumping tokens.
    pub tokenizer: bool,
    /// Emit line annotations in the generated source.
    pub emit_line: bool,
    /// Driver style of the generated code.
    pub driver: Driver,
    /// Right margin of generated source, [`UNSET`] for the backend default.
    pub margin: i32,
    /// Indent width of generated source, [`UNSET`] for the backend default.
    pub indent: i32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            source_file: None,
            output_file: None,
            include_file: None,
            report_file: None,
            skeleton_file: None,
            bundle_file: None,
            language: "java".to_string(),
            algorithm: Algorithm::default(),
            packed: true,
            external_include: false,
            verbose: false,
            debug: false,
            tokenizer: false,
            emit_line: true,
            driver: Driver::default(),
            margin: UNSET,
            indent: UNSET,
        }
    }
}

impl StepConfig {
    /// Creates a configuration with the two required files set and every
    /// other option at its default.
    pub fn new(source_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            source_file: Some(source_file.into()),
            output_file: Some(output_file.into()),
            ..Default::default()
        }
    }

    /// Parses a configuration from step-file JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(ConfigError::ParseFailed)
    }

    /// Loads a configuration from a step file on disk.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Returns true when a right margin was configured.
    pub fn margin_set(&self) -> bool {
        self.margin != UNSET
    }

    /// Returns true when an indent width was configured.
    pub fn indent_set(&self) -> bool {
        self.indent != UNSET
    }
}
