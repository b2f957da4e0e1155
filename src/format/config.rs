//! Rendering configuration for emitted Swift
//!
//! Defaults follow the Swift API Design Guidelines layout: four-space indentation, one blank line
//! between declarations.

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Inserted once per nesting level
    pub indent_unit: String,
    /// Number of blank lines between rendered declarations
    pub blank_lines_between: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            blank_lines_between: 1,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit verbatim
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Indent with `width` spaces per level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_unit = " ".repeat(width);
        self
    }

    /// Indent with one tab per level
    pub fn with_tabs(mut self) -> Self {
        self.indent_unit = "\t".to_string();
        self
    }

    /// Set the number of blank lines between declarations
    pub fn with_blank_lines_between(mut self, count: usize) -> Self {
        self.blank_lines_between = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_indent_unit() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_unit, "    ");
    }

    #[test]
    fn test_default_blank_lines_between() {
        let config = RenderConfig::default();
        assert_eq!(config.blank_lines_between, 1);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(RenderConfig::new(), RenderConfig::default());
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_indent_width() {
        let config = RenderConfig::new().with_indent_width(2);
        assert_eq!(config.indent_unit, "  ");
        // Other fields unchanged
        assert_eq!(config.blank_lines_between, 1);
    }

    #[test]
    fn test_with_indent_width_zero() {
        let config = RenderConfig::new().with_indent_width(0);
        assert_eq!(config.indent_unit, "");
    }

    #[test]
    fn test_with_tabs() {
        let config = RenderConfig::new().with_tabs();
        assert_eq!(config.indent_unit, "\t");
    }

    #[test]
    fn test_with_indent_unit_verbatim() {
        let config = RenderConfig::new().with_indent_unit("  \t");
        assert_eq!(config.indent_unit, "  \t");
    }

    #[test]
    fn test_with_blank_lines_between() {
        let config = RenderConfig::new().with_blank_lines_between(2);
        assert_eq!(config.blank_lines_between, 2);
        assert_eq!(config.indent_unit, "    ");
    }

    #[test]
    fn test_builder_override() {
        let config = RenderConfig::new().with_tabs().with_indent_width(3);
        assert_eq!(config.indent_unit, "   "); // Last value wins
    }
}
