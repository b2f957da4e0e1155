//! resgen backend
//!
//! Holds the declaration IR that generators build and the renderer consumes.
//!
//! ## Module Organization
//!
//! - `ir/types.rs` - Type references and the `Void` sentinel
//! - `ir/decl.rs` - Parameters, functions and the function builder
//! - `ir/used_types.rs` - Used-type collection
//! - `ir/errors.rs` - Construction errors

pub mod ir;
