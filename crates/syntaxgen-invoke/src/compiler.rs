//! Invocation compiler.
//!
//! Turns a [`StepConfig`] into the exact argument vector the external tool
//! expects, in five phases that each stay independently testable: language
//! resolution, required-field validation, derived-file resolution, size
//! computation, and vector assembly. Directory preparation for output-side
//! paths happens between counting and filling; it is the only filesystem
//! side effect of compilation.

use std::path::{Path, PathBuf};

use syntaxgen_spec::{find_language, StepConfig};

use crate::error::{InvokeError, InvokeResult};
use crate::generator::{ExecutionContext, Generator, GeneratorError};
use crate::paths;

/// Slots taken by the five always-present key/value pairs:
/// language, algorithm, packing, external, driver.
const BASE_PAIR_SLOTS: usize = 10;

/// The ordered argument vector passed to the generator entry point.
///
/// Built once per invocation, sized exactly, consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    /// Returns the arguments as a slice.
    pub fn as_args(&self) -> &[String] {
        &self.0
    }

    /// Number of argument slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the vector holds no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Slot counts for one invocation, computed before any slot is filled.
///
/// The three counts sum to the exact vector length; assembly never resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgvPlan {
    /// Slots for key/value pairs, fixed and optional.
    pub pair_slots: usize,
    /// Slots for standalone boolean flags.
    pub flag_slots: usize,
    /// Slots for positional file paths.
    pub file_slots: usize,
}

impl ArgvPlan {
    /// Computes the plan for a step whose include/report presence is already
    /// resolved.
    fn for_step(config: &StepConfig, include_present: bool, report_present: bool) -> Self {
        let mut pair_slots = BASE_PAIR_SLOTS;
        if config.margin_set() {
            pair_slots += 2;
        }
        if config.indent_set() {
            pair_slots += 2;
        }
        if config.bundle_file.is_some() {
            pair_slots += 2;
        }
        if config.skeleton_file.is_some() {
            pair_slots += 2;
        }

        let mut flag_slots = 0;
        if config.verbose {
            flag_slots += 1;
        }
        if config.debug {
            flag_slots += 1;
        }
        if !config.emit_line {
            flag_slots += 1;
        }
        if config.tokenizer {
            flag_slots += 1;
        }

        let mut file_slots = 2; // source, output
        if include_present {
            file_slots += 1;
        }
        if report_present {
            file_slots += 1;
        }

        Self {
            pair_slots,
            flag_slots,
            file_slots,
        }
    }

    /// Total vector length.
    pub fn total(&self) -> usize {
        self.pair_slots + self.flag_slots + self.file_slots
    }
}

/// A step with its language resolved and every file path absolute.
#[derive(Debug)]
struct ResolvedStep<'a> {
    config: &'a StepConfig,
    source: PathBuf,
    output: PathBuf,
    include: Option<PathBuf>,
    report: Option<PathBuf>,
    bundle: Option<PathBuf>,
    skeleton: Option<PathBuf>,
}

/// Resolves the language, validates required fields, absolutizes all paths
/// and derives the include file when needed.
///
/// Failure order is part of the contract: an unknown language aborts before
/// the required files are checked, and both abort before anything touches
/// the filesystem.
fn resolve(config: &StepConfig) -> InvokeResult<ResolvedStep<'_>> {
    let language = find_language(&config.language).ok_or(InvokeError::UnsupportedLanguage)?;

    let source = config
        .source_file
        .as_deref()
        .ok_or(InvokeError::MissingSourceFile)?;
    let output = config
        .output_file
        .as_deref()
        .ok_or(InvokeError::MissingOutputFile)?;

    let source = paths::absolutize(source)?;
    let output = paths::absolutize(output)?;

    // A requested report implies an include file; synthesize one next to the
    // output when none was configured.
    let include = match (&config.include_file, &config.report_file) {
        (Some(include), _) => Some(paths::absolutize(include)?),
        (None, Some(_)) => Some(paths::replace_extension(&output, language.include_suffix)),
        (None, None) => None,
    };

    let report = match &config.report_file {
        Some(report) => Some(paths::absolutize(report)?),
        None => None,
    };
    let bundle = match &config.bundle_file {
        Some(bundle) => Some(paths::absolutize(bundle)?),
        None => None,
    };
    let skeleton = match &config.skeleton_file {
        Some(skeleton) => Some(paths::absolutize(skeleton)?),
        None => None,
    };

    Ok(ResolvedStep {
        config,
        source,
        output,
        include,
        report,
        bundle,
        skeleton,
    })
}

/// Ensures the parent directory chain of every output-side path exists.
///
/// Tolerates pre-existing directories. The source file is read-only input
/// and is deliberately left alone.
fn prepare_directories(step: &ResolvedStep<'_>) -> std::io::Result<()> {
    let outputs = [
        Some(step.output.as_path()),
        step.include.as_deref(),
        step.report.as_deref(),
    ];
    for path in outputs.into_iter().flatten() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Fills the argument vector in its fixed order: always-present pairs,
/// optional pairs, flags, then positional files.
fn assemble(step: &ResolvedStep<'_>, plan: &ArgvPlan) -> ArgumentVector {
    let config = step.config;
    let mut argv = Vec::with_capacity(plan.total());

    argv.push("--language".to_string());
    argv.push(config.language.clone());
    argv.push("--algorithm".to_string());
    argv.push(config.algorithm.as_str().to_string());
    let packing = if config.packed { "packed" } else { "tabular" };
    argv.push("--packing".to_string());
    argv.push(packing.to_string());
    let external = if config.external_include { "true" } else { "false" };
    argv.push("--external".to_string());
    argv.push(external.to_string());
    argv.push("--driver".to_string());
    argv.push(config.driver.as_str().to_string());

    if config.margin_set() {
        argv.push("--margin".to_string());
        argv.push(config.margin.to_string());
    }
    if config.indent_set() {
        argv.push("--indent".to_string());
        argv.push(config.indent.to_string());
    }
    if let Some(bundle) = &step.bundle {
        argv.push("--bundle".to_string());
        argv.push(path_arg(bundle));
    }
    if let Some(skeleton) = &step.skeleton {
        argv.push("--skeleton".to_string());
        argv.push(path_arg(skeleton));
    }

    if config.verbose {
        argv.push("--verbose".to_string());
    }
    if config.debug {
        argv.push("--debug".to_string());
    }
    if !config.emit_line {
        argv.push("--noline".to_string());
    }
    if config.tokenizer {
        argv.push("--tokenizer".to_string());
    }

    argv.push(path_arg(&step.source));
    argv.push(path_arg(&step.output));
    if let Some(include) = &step.include {
        argv.push(path_arg(include));
    }
    if let Some(report) = &step.report {
        argv.push(path_arg(report));
    }

    debug_assert_eq!(argv.len(), plan.total());
    ArgumentVector(argv)
}

/// Computes the slot plan for a configuration without assembling anything.
///
/// Runs the same resolution as [`compile`] but stops before the directory
/// side effect.
pub fn plan(config: &StepConfig) -> InvokeResult<ArgvPlan> {
    let step = resolve(config)?;
    Ok(ArgvPlan::for_step(
        config,
        step.include.is_some(),
        step.report.is_some(),
    ))
}

/// Compiles a configuration into the exact argument vector for one
/// invocation, creating output directories along the way.
pub fn compile(config: &StepConfig) -> InvokeResult<ArgumentVector> {
    let step = resolve(config)?;
    let plan = ArgvPlan::for_step(config, step.include.is_some(), step.report.is_some());
    prepare_directories(&step)?;
    Ok(assemble(&step, &plan))
}

/// Compiles the configuration and delegates to the generator.
///
/// The context's release hook runs unconditionally after the generator call.
/// Generator failures are translated into build-step failures with the
/// original cause chained.
pub fn execute(
    config: &StepConfig,
    generator: &mut dyn Generator,
    ctx: &mut dyn ExecutionContext,
) -> InvokeResult<()> {
    let argv = compile(config)?;
    let result = generator.run(ctx, argv.as_args());
    ctx.release();
    result.map_err(|e| match e {
        e @ GeneratorError::Parse(_) => InvokeError::SourceNotParsed(e),
        e @ GeneratorError::Analysis(_) => InvokeError::SourceNotAnalyzed(e),
        e @ GeneratorError::Output(_) => InvokeError::OutputNotWritten(e),
        e @ GeneratorError::Tool(_) => InvokeError::ToolFailed(e),
    })
}
