//! Identifier normalization for generated Swift.
//!
//! Names reaching the emitter come from resource files, catalogs and user input, so they may contain
//! spaces, dots, dashes or start with a digit. [`SwiftIdentifier`] turns any such string into a legal Swift
//! identifier.
//!
//! ## Rules
//!
//! 1. Split on every character that is neither alphanumeric nor `_`, dropping empty pieces.
//! 2. Upper-case the first character of every piece and join them (`my-image.png` → `MyImagePng`).
//! 3. Adjust the leading word: lower-case for values (`URLSession` → `urlSession`), upper-case for types.
//! 4. Prefix `_` when the result starts with a digit.
//! 5. Escape with backticks when the result is a reserved word (`default` → `` `default` ``).
//!
//! ## Examples
//! ```rust
//! use resgen_core::lang::identifiers::SwiftIdentifier;
//!
//! assert_eq!(SwiftIdentifier::new("my-image.png").to_string(), "myImagePng");
//! assert_eq!(SwiftIdentifier::type_name("settings screen").to_string(), "SettingsScreen");
//! assert_eq!(SwiftIdentifier::new("4k").to_string(), "_4k");
//! ```

use std::fmt;

use super::swift_keywords;

/// Case applied to the first word of a normalized identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeadingCase {
    Lower,
    Upper,
}

/// A normalized Swift identifier.
///
/// The stored text is never backtick-escaped; escaping happens on display so that keyword checks keep
/// working on the bare spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SwiftIdentifier {
    name: String,
}

impl SwiftIdentifier {
    /// Normalize `raw` into a value-position identifier (first word lower-cased).
    pub fn new(raw: &str) -> Self {
        Self {
            name: normalize(raw, LeadingCase::Lower),
        }
    }

    /// Normalize `raw` into a type-position identifier (first word upper-cased).
    pub fn type_name(raw: &str) -> Self {
        Self {
            name: normalize(raw, LeadingCase::Upper),
        }
    }

    /// The normalized spelling without keyword escaping.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// True when `raw` contained no usable identifier characters.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// True when the identifier is rendered inside backticks.
    pub fn is_escaped(&self) -> bool {
        swift_keywords::is_keyword(&self.name)
    }
}

impl fmt::Display for SwiftIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_escaped() {
            write!(f, "`{}`", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

impl From<&str> for SwiftIdentifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SwiftIdentifier {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

fn normalize(raw: &str, leading: LeadingCase) -> String {
    let joined: String = raw
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|piece| !piece.is_empty())
        .map(uppercase_first)
        .collect();

    let mut name = match leading {
        LeadingCase::Lower => lowercase_leading_word(&joined),
        LeadingCase::Upper => joined,
    };

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn uppercase_first(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the leading run of capitals.
///
/// When the run is followed by a lower-case letter its last capital starts the next word and is kept.
fn lowercase_leading_word(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lower_count = if run > 1 && chars.get(run).is_some_and(|c| c.is_lowercase()) {
        run - 1
    } else {
        run
    };

    let mut out = String::with_capacity(name.len());
    for (i, c) in chars.into_iter().enumerate() {
        if i < lower_count {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
