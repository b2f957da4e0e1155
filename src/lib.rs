#![forbid(unsafe_code)]
//! resgen: typed Swift declaration IR and renderer
//!
//! Resource code generators describe the functions they want to emit as IR values, ask those values which
//! types they depend on, and render them to Swift source text.
//!
//! - [`backend::ir`]: type references, parameters, functions and used-type collection
//! - [`format`]: the Swift renderer and its indentation config
//! - [`manifest`]: JSON manifests that load into validated declarations
//! - [`cli`]: the `resgen` command-line tool
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Invalid input**: Declarations are validated once, when built. Rendering and type collection never fail.

pub mod backend;
pub mod cli;
pub mod format;
pub mod manifest;

pub use backend::ir::{
    DeclarationSet, Function, FunctionBuilder, InvalidDeclaration, Module, Parameter, TypeReference, UsesTypes,
};
pub use format::{RenderConfig, render_declarations, render_function};
pub use manifest::{Manifest, ManifestError};
