//! Integration tests for manifest loading and used-type collection

use std::path::Path;

use resgen::backend::ir::{Module, TypeReference, UsesTypes, required_imports, unique_types};
use resgen::manifest::{Manifest, ManifestError};

fn names(types: &[TypeReference]) -> Vec<String> {
    types.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_fixture_used_types_order() {
    let set = Manifest::load(Path::new("tests/fixtures/resources.json"))
        .unwrap()
        .to_declarations()
        .unwrap();

    let types = set.functions()[2].used_types();
    assert_eq!(
        names(&types),
        vec!["[Resource]", "Resource", "String", "[String: Resource]", "String", "Resource"]
    );

    let all = set.used_types();
    assert_eq!(
        names(&all),
        vec![
            "Resource",
            "Int",
            "Void",
            "[Resource]",
            "Resource",
            "String",
            "[String: Resource]",
            "String",
            "Resource",
            "UIImage?",
            "String",
        ]
    );
    assert_eq!(
        names(&unique_types(&all)),
        vec!["Resource", "Int", "Void", "[Resource]", "String", "[String: Resource]", "UIImage?"]
    );
    assert_eq!(required_imports(&all), vec!["UIKit".to_string()]);
}

#[test]
fn test_fixture_modules_are_preserved() {
    let set = Manifest::load(Path::new("tests/fixtures/resources.json"))
        .unwrap()
        .to_declarations()
        .unwrap();
    let image = set.functions()[3].return_type();
    assert_eq!(image.module(), &Module::Custom("UIKit".to_string()));
    assert!(image.is_optional());
}

#[test]
fn test_duplicate_binding_is_rejected() {
    let manifest = Manifest::load(Path::new("tests/fixtures/invalid_parameter.json")).unwrap();
    let err = manifest.to_declarations().unwrap_err();
    match err {
        ManifestError::InvalidDeclaration { index, source } => {
            assert_eq!(index, 0);
            assert_eq!(source.to_string(), "parameter `a` of `pair` is bound more than once");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_manifest() {
    let err = Manifest::from_json("{ \"functions\": 3 }").unwrap_err();
    assert!(matches!(err, ManifestError::Json(_)));
}
