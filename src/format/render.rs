//! Render IR declarations as Swift source text
//!
//! All functions here are total: a [`Function`] that was built successfully always renders, and the same
//! input always yields the same text.
//!
//! ```text
//! /// comment lines, one per line
//! static func name<Generics>(label local: Type = default, ...) throws -> Return {
//!     body
//! }
//! ```

use std::fmt;

use crate::backend::ir::{DeclarationSet, Function, Parameter, TypeReference};

use super::config::RenderConfig;
use super::writer::SourceWriter;

/// Marker prefixed to every documentation line
const DOC_MARKER: &str = "///";

/// Render a type reference (`Foo<Bar>?`, `[Key: Value]`)
pub fn render_type(ty: &TypeReference) -> String {
    ty.swift_name()
}

/// Render one parameter: `label: Type`, `label local: Type`, optionally followed by ` = default`
pub fn render_parameter(param: &Parameter) -> String {
    let definition = match param.local_identifier() {
        Some(local) => format!("{} {}: {}", param.identifier(), local, render_type(param.ty())),
        None => format!("{}: {}", param.identifier(), render_type(param.ty())),
    };
    match param.default_value() {
        Some(default) => format!("{definition} = {default}"),
        None => definition,
    }
}

/// Render the declaration line, without documentation or body
pub fn render_signature(function: &Function) -> String {
    let mut sig = String::new();
    if function.is_static() {
        sig.push_str("static ");
    }
    sig.push_str("func ");
    sig.push_str(&function.name().to_string());
    if let Some(generics) = function.generics() {
        sig.push('<');
        sig.push_str(generics);
        sig.push('>');
    }

    let params: Vec<_> = function.params().iter().map(render_parameter).collect();
    sig.push('(');
    sig.push_str(&params.join(", "));
    sig.push(')');

    if function.does_throw() {
        sig.push_str(" throws");
    }
    if !function.return_type().is_void() {
        sig.push_str(" -> ");
        sig.push_str(&render_type(function.return_type()));
    }
    sig
}

/// Render a full declaration: documentation, signature and indented body
pub fn render_function(function: &Function, config: &RenderConfig) -> String {
    let mut writer = SourceWriter::new(config);

    for line in function.comments().iter().flat_map(|comment| comment_lines(comment)) {
        if line.trim().is_empty() {
            writer.writeln(DOC_MARKER);
        } else {
            writer.writeln(&format!("{DOC_MARKER} {line}"));
        }
    }

    writer.write(&render_signature(function));
    writer.writeln(" {");
    if !function.body().trim().is_empty() {
        writer.indent();
        writer.write_block(function.body());
        writer.dedent();
        writer.newline();
    }
    writer.write("}");
    writer.finish()
}

/// Split one comment entry into its lines; an empty entry is a single empty line
fn comment_lines(comment: &str) -> Vec<&str> {
    if comment.is_empty() {
        vec![""]
    } else {
        comment.lines().collect()
    }
}

/// Render every declaration of a set, separated by the configured blank lines
#[tracing::instrument(skip_all, fields(decl_count = set.len()))]
pub fn render_declarations(set: &DeclarationSet, config: &RenderConfig) -> String {
    let mut writer = SourceWriter::new(config);
    for (i, function) in set.functions().iter().enumerate() {
        if i > 0 {
            writer.newline();
            writer.blank_lines(config.blank_lines_between);
        }
        writer.write_block(&render_function(function, config));
    }
    writer.finish()
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_parameter(self))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_function(self, &RenderConfig::default()))
    }
}
