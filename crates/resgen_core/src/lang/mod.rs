//! Swift vocabulary used during emission.
//!
//! ## Examples
//! ```rust
//! use resgen_core::lang::{identifiers::SwiftIdentifier, swift_keywords};
//!
//! assert!(swift_keywords::is_keyword("func"));
//! assert_eq!(SwiftIdentifier::new("default").to_string(), "`default`");
//! ```

pub mod identifiers;
pub mod swift_keywords;
