//! Define construction-time errors for IR declarations.
//!
//! Rendering is total: every check that could fail happens in [`FunctionBuilder::build`], before a
//! [`Function`] exists.
//!
//! [`FunctionBuilder::build`]: super::decl::FunctionBuilder::build
//! [`Function`]: super::decl::Function

use thiserror::Error;

/// A declaration rejected while it was being constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDeclaration {
    #[error("function name {raw:?} has no usable identifier characters")]
    EmptyName { raw: String },

    #[error("function `{function}` has an empty generics clause")]
    EmptyGenerics { function: String },

    #[error("parameter #{index} of `{function}` has no usable identifier characters")]
    EmptyParameterName { function: String, index: usize },

    #[error("parameter `{name}` of `{function}` is bound more than once")]
    DuplicateParameter { function: String, name: String },
}
