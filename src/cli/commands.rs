//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::backend::ir::{DeclarationSet, UsesTypes, required_imports, unique_types};
use crate::format::{RenderConfig, render_declarations};
use crate::manifest::Manifest;

use super::{CliError, CliResult, ExitCode};

/// What `used-types` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsedTypesMode {
    /// Every used type, duplicates included
    All,
    /// Each type once, in order of first use
    Unique,
    /// Modules that need an import
    Imports,
}

/// Load a manifest and turn it into validated declarations.
///
/// Manifest errors are rendered through miette so the user sees the full cause chain.
fn load_declarations(path: &Path) -> CliResult<DeclarationSet> {
    Manifest::load(path)
        .and_then(|manifest| manifest.to_declarations())
        .map_err(|err| CliError::failure(format!("{:?}", miette::Report::new(err))))
}

/// Render a manifest's declarations to stdout
pub fn render_manifest(path: &Path, config: &RenderConfig) -> CliResult<ExitCode> {
    let set = load_declarations(path)?;
    tracing::info!(declarations = set.len(), "rendering manifest");

    let output = render_declarations(&set, config);
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the types (or imports) a manifest's declarations depend on, one per line
pub fn list_used_types(path: &Path, mode: UsedTypesMode) -> CliResult<ExitCode> {
    let set = load_declarations(path)?;
    for line in used_types_lines(&set, mode) {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

/// Output lines for `used-types`
pub fn used_types_lines(set: &DeclarationSet, mode: UsedTypesMode) -> Vec<String> {
    let types = set.used_types();
    match mode {
        UsedTypesMode::All => types.iter().map(|ty| ty.to_string()).collect(),
        UsedTypesMode::Unique => unique_types(&types).iter().map(|ty| ty.to_string()).collect(),
        UsedTypesMode::Imports => required_imports(&types),
    }
}
