//! Swift renderer
//!
//! Turns IR declarations into Swift source text. Rendering is a pure function of the declaration and a
//! [`RenderConfig`]:
//! - 4-space indentation by default (any indentation unit can be configured)
//! - `///` documentation lines before the signature
//! - `Void` return types are left out of signatures
//!
//! Writing files and combining output from several generators is up to the caller.

mod config;
mod render;
mod writer;

pub use config::RenderConfig;
pub use render::{render_declarations, render_function, render_parameter, render_signature, render_type};
pub use writer::SourceWriter;
