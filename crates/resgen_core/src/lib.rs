//! Provide the target-language vocabulary shared by the resgen declaration IR.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no IR types.
//! - Current scope: Swift reserved keywords and identifier normalization.

pub mod lang;
