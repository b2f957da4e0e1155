//! Output writer with indentation tracking
//!
//! Handles writing emitted Swift with the configured indentation unit.

use super::config::RenderConfig;

/// Writer that tracks indentation and builds rendered output
pub struct SourceWriter<'a> {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: &'a RenderConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl<'a> SourceWriter<'a> {
    /// Create a new writer with the given config
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.config.indent_unit);
            }
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    ///
    /// Empty strings write nothing, so blank lines never carry indentation.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write each line of a multi-line block at the current indentation
    ///
    /// Whitespace-only lines are written empty. The block ends without a trailing newline.
    pub fn write_block(&mut self, block: &str) {
        for (i, line) in block.lines().enumerate() {
            if i > 0 {
                self.newline();
            }
            if !line.trim().is_empty() {
                self.write(line);
            }
        }
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines (for spacing between declarations)
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }
}
