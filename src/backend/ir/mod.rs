//! Typed declaration IR
//!
//! This module defines the IR that sits between resource discovery and Swift text emission. The IR is:
//!
//! - **Immutable**: nodes are built once and only read afterwards
//! - **Self-contained**: a [`Function`] owns its parameters and holds type references by value
//! - **Opaque where it matters**: bodies and default values are pre-rendered text and never parsed
//!
//! ## Pipeline
//!
//! ```text
//! discovery → DeclarationSet ─┬→ UsesTypes (dependency resolution, import pruning)
//!                             └→ format::render (Swift text)
//! ```
//!
//! Both walks are pure, so a set can be rendered and scanned concurrently.

pub mod decl;
pub mod errors;
pub mod types;
pub mod used_types;

pub use decl::{Function, FunctionBuilder, Parameter};
pub use errors::InvalidDeclaration;
pub use types::{Module, TypeKind, TypeReference};
pub use used_types::{UsesTypes, required_imports, unique_types, used_types_of};

/// An ordered group of declarations emitted together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSet {
    functions: Vec<Function>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration
    pub fn push(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FromIterator<Function> for DeclarationSet {
    fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
        Self {
            functions: iter.into_iter().collect(),
        }
    }
}
