//! Swift keyword vocabulary (for codegen identifier escaping).

/// Reserved words that cannot appear as bare identifiers in generated Swift.
pub const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import", "init", "inout",
    "internal", "let", "open", "operator", "private", "precedencegroup", "protocol", "public", "rethrows", "static",
    "struct", "subscript", "typealias", "var",
    // Statements
    "break", "case", "catch", "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in",
    "repeat", "return", "switch", "throw", "where", "while",
    // Expressions and types
    "Any", "as", "false", "is", "nil", "self", "Self", "super", "throws", "true", "try",
];

/// Check whether an identifier is a Swift keyword.
pub fn is_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name)
}
