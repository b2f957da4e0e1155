//! Used-type collection for IR declarations
//!
//! Every IR node reports the [`TypeReference`]s it depends on through [`UsesTypes`]. The result is a flat
//! list in a fixed order with duplicates kept: a function lists its return type first, then its
//! parameters in declaration order. Import synthesis and pruning of unused generated code build on that
//! order, so nothing here sorts or deduplicates on its own. [`unique_types`] and [`required_imports`] are
//! separate helpers for callers that want a set.

use std::collections::HashSet;

use super::{DeclarationSet, Function, Parameter, TypeReference};

/// A node that depends on named types.
pub trait UsesTypes {
    /// Every type this node touches, nested generic arguments included.
    fn used_types(&self) -> Vec<TypeReference>;
}

impl UsesTypes for TypeReference {
    /// The type itself, then the used types of each generic argument (pre-order).
    fn used_types(&self) -> Vec<TypeReference> {
        let mut types = vec![self.clone()];
        types.extend(used_types_of(self.generic_args()));
        types
    }
}

impl UsesTypes for Parameter {
    fn used_types(&self) -> Vec<TypeReference> {
        self.ty().used_types()
    }
}

impl UsesTypes for Function {
    fn used_types(&self) -> Vec<TypeReference> {
        let mut types = self.return_type().used_types();
        types.extend(used_types_of(self.params()));
        types
    }
}

impl UsesTypes for DeclarationSet {
    fn used_types(&self) -> Vec<TypeReference> {
        used_types_of(self.functions())
    }
}

/// Concatenate the used types of `nodes`, in order.
pub fn used_types_of<T: UsesTypes>(nodes: &[T]) -> Vec<TypeReference> {
    nodes.iter().flat_map(UsesTypes::used_types).collect()
}

/// Drop repeated types, keeping the first occurrence of each.
pub fn unique_types(types: &[TypeReference]) -> Vec<TypeReference> {
    let mut seen = HashSet::new();
    types.iter().filter(|ty| seen.insert(*ty)).cloned().collect()
}

/// Modules that need an `import`, in order of first use.
pub fn required_imports(types: &[TypeReference]) -> Vec<String> {
    let mut seen = HashSet::new();
    types
        .iter()
        .filter_map(|ty| ty.module().import_name())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
