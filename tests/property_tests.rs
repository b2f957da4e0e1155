//! Property-based tests for resgen
//!
//! These tests use proptest to verify invariants across many randomly
//! generated declarations, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use resgen::backend::ir::{Function, Parameter, TypeReference, UsesTypes};
use resgen::format::{RenderConfig, render_function, render_signature};

/// Strategy for simple lower-case identifiers that are never Swift keywords
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}".prop_map(|s| format!("p{}", s))
}

/// Strategy for type references, nested up to two levels
fn type_strategy() -> impl Strategy<Value = TypeReference> {
    let leaf = prop_oneof![
        Just(TypeReference::INT),
        Just(TypeReference::STRING),
        Just(TypeReference::BOOL),
        "[A-Z][a-z]{1,6}".prop_map(TypeReference::named),
    ];
    leaf.prop_recursive(2, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeReference::array_of),
            (inner.clone(), inner.clone()).prop_map(|(k, v)| TypeReference::dictionary_of(k, v)),
            inner.prop_map(TypeReference::optional),
        ]
    })
}

/// Strategy for functions with distinct parameter names
fn function_strategy() -> impl Strategy<Value = Function> {
    (
        ident_strategy(),
        any::<bool>(),
        any::<bool>(),
        proptest::collection::vec(type_strategy(), 0..4),
        proptest::option::of(type_strategy()),
    )
        .prop_map(|(name, is_static, throws, param_types, returns)| {
            let params = param_types
                .into_iter()
                .enumerate()
                .map(|(i, ty)| Parameter::new(format!("arg{}", i), ty));
            Function::builder(name)
                .is_static(is_static)
                .throws(throws)
                .params(params)
                .returns(returns.unwrap_or(TypeReference::VOID))
                .body("return")
                .build()
                .expect("generated function is valid")
        })
}

proptest! {
    /// Property: rendering the same declaration twice yields identical text
    #[test]
    fn rendering_is_deterministic(function in function_strategy()) {
        let config = RenderConfig::default();
        prop_assert_eq!(render_function(&function, &config), render_function(&function, &config));
    }

    /// Property: the arrow appears exactly when the return type is not `Void`
    #[test]
    fn void_return_omits_arrow(function in function_strategy()) {
        let signature = render_signature(&function);
        let has_arrow = signature.ends_with(&format!(" -> {}", function.return_type()));
        prop_assert_eq!(has_arrow, !function.return_type().is_void());
        prop_assert_eq!(function.return_type().is_void(), !signature.contains("->"));
    }

    /// Property: parameters render in declaration order
    #[test]
    fn params_render_in_order(function in function_strategy()) {
        let signature = render_signature(&function);
        let mut last = 0;
        for param in function.params() {
            let rendered = format!("{}: {}", param.name(), param.ty());
            let pos = signature[last..].find(&rendered).map(|p| p + last);
            prop_assert!(pos.is_some(), "missing {} in {}", rendered, signature);
            last = pos.unwrap_or(last) + rendered.len();
        }
    }

    /// Property: used types start with the return type, followed by each parameter's types in order
    #[test]
    fn used_types_follow_declaration_order(function in function_strategy()) {
        let mut expected = function.return_type().used_types();
        for param in function.params() {
            expected.extend(param.ty().used_types());
        }
        prop_assert_eq!(function.used_types(), expected);
        prop_assert_eq!(&function.used_types()[0], function.return_type());
    }

    /// Property: every rendered body line is indented by exactly one unit
    #[test]
    fn body_lines_use_configured_indent(width in 1usize..8, function in function_strategy()) {
        let config = RenderConfig::new().with_indent_width(width);
        let rendered = render_function(&function, &config);
        let body_line = format!("\n{}return\n", " ".repeat(width));
        prop_assert!(rendered.contains(&body_line));
    }
}
