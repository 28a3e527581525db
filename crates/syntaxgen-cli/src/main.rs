//! Syntaxgen CLI - Declarative build steps for the syntax parser generator
//!
//! This binary compiles JSON step files into invocations of the external
//! `syntax` tool and reports build-step success or failure.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use syntaxgen_cli::commands;

/// Syntaxgen - Parser-generator build steps
#[derive(Parser)]
#[command(name = "syntaxgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a generation step from a JSON step file
    Generate {
        /// Path to the step file
        #[arg(short, long)]
        config: String,

        /// Compile and print the argument vector without invoking the tool
        #[arg(long)]
        dry_run: bool,
    },

    /// List supported target-language backends
    Languages,

    /// Check that the external syntax tool is discoverable
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { config, dry_run } => commands::generate::run(&config, dry_run),
        Commands::Languages => commands::languages::run(),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
