//! Snapshot tests for Swift rendering
//!
//! These tests render declarations (built directly or loaded from fixture manifests) and compare
//! the output against inline snapshots. This ensures rendering changes are reviewed and intentional.
//!
//! Run with: `cargo test --test render_snapshot_tests`
//! Review changes: `cargo insta review`

use std::path::Path;

use resgen::backend::ir::{DeclarationSet, Function, Parameter, TypeReference};
use resgen::format::{RenderConfig, render_declarations, render_function};
use resgen::manifest::Manifest;

/// Load a fixture manifest from tests/fixtures
fn load_fixture(name: &str) -> DeclarationSet {
    let path = format!("tests/fixtures/{}.json", name);
    Manifest::load(Path::new(&path))
        .and_then(|manifest| manifest.to_declarations())
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", path, e))
}

#[test]
fn test_resources_manifest_render() {
    let set = load_fixture("resources");
    insta::assert_snapshot!(render_declarations(&set, &RenderConfig::default()), @r#"
/// Loads a cached resource by id.
static func load(id: Int) throws -> Resource {
    return cache[id]
}

func reset() {
    cache.removeAll()
}

func store(value newValue: String = "", `in` table: [String: Resource]) -> [Resource] {
    table[newValue] = nil

    return Array(table.values)
}

func image(named name: String) -> UIImage? {
    return UIImage(named: name)
}
"#);
}

#[test]
fn test_resources_manifest_render_with_tabs() {
    let set = load_fixture("resources");
    let config = RenderConfig::new().with_tabs().with_blank_lines_between(0);
    let rendered = render_declarations(&set, &config);
    assert!(rendered.contains("func reset() {\n\tcache.removeAll()\n}\nfunc store("));
    assert!(rendered.contains("\ttable[newValue] = nil\n\n\treturn Array(table.values)"));
}

#[test]
fn test_nested_body_render() {
    let function = Function::builder("resource")
        .comments(["Resolves a resource, falling back to the default.", "", "- Parameter key: lookup key"])
        .is_static(true)
        .generics("R: Resource")
        .param(Parameter::new("for", TypeReference::STRING).with_local_name("key"))
        .returns(TypeReference::named("R").optional())
        .body("guard let value = cache[key] else {\n    return nil\n}\nreturn value as? R")
        .build()
        .unwrap();
    insta::assert_snapshot!(render_function(&function, &RenderConfig::default()), @r#"
/// Resolves a resource, falling back to the default.
///
/// - Parameter key: lookup key
static func resource<R: Resource>(`for` key: String) -> R? {
    guard let value = cache[key] else {
        return nil
    }
    return value as? R
}
"#);
}
