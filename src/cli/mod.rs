//! CLI module for resgen
//!
//! ## Commands
//!
//! - `render <manifest>` - Render the manifest's declarations as Swift
//! - `used-types <manifest>` - List the types the declarations depend on
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::format::RenderConfig;
use commands::UsedTypesMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Render Swift declarations from a resgen manifest
#[derive(Parser, Debug)]
#[command(name = "resgen")]
#[command(version = VERSION)]
#[command(about = "Render Swift declarations from a resgen manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every declaration in the manifest as Swift
    Render {
        /// Manifest file (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Spaces per indentation level (default: 4)
        #[arg(long, value_name = "N", conflicts_with = "tabs")]
        indent_width: Option<usize>,
        /// Indent with tabs
        #[arg(long)]
        tabs: bool,
        /// Blank lines between declarations (default: 1)
        #[arg(long, value_name = "N")]
        blank_lines: Option<usize>,
    },

    /// List the types the manifest's declarations depend on
    UsedTypes {
        /// Manifest file (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Print each type once, in order of first use
        #[arg(long)]
        unique: bool,
        /// Print the modules that need an import instead of types
        #[arg(long, conflicts_with = "unique")]
        imports: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Render {
            manifest,
            indent_width,
            tabs,
            blank_lines,
        } => {
            let config = render_config(indent_width, tabs, blank_lines);
            commands::render_manifest(&manifest, &config)
        }
        Command::UsedTypes {
            manifest,
            unique,
            imports,
        } => {
            let mode = if imports {
                UsedTypesMode::Imports
            } else if unique {
                UsedTypesMode::Unique
            } else {
                UsedTypesMode::All
            };
            commands::list_used_types(&manifest, mode)
        }
    }
}

/// Build the render configuration from command-line flags.
fn render_config(indent_width: Option<usize>, tabs: bool, blank_lines: Option<usize>) -> RenderConfig {
    let mut config = RenderConfig::new();
    if tabs {
        config = config.with_tabs();
    } else if let Some(width) = indent_width {
        config = config.with_indent_width(width);
    }
    if let Some(count) = blank_lines {
        config = config.with_blank_lines_between(count);
    }
    config
}

// ============================================================================
// Tests
// ============================================================================
