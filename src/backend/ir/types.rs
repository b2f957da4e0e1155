//! IR type references
//!
//! A [`TypeReference`] names a Swift type a declaration touches: a parameter type, a return type, or a
//! generic argument nested inside one of those. References are plain immutable values; the discovery
//! phase builds them once and clones them into every declaration that needs them.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Module a type is imported from
///
/// Only `Custom` modules produce import statements; the standard library and the host module are always
/// visible to generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Module {
    /// Swift standard library (`Int`, `String`, `Array`, ...)
    #[default]
    StdLib,
    /// The module the generated code is compiled into
    Host,
    /// Any other module, e.g. `UIKit` or `Foundation`
    Custom(String),
}

impl Module {
    /// Name to import, if the module needs an explicit `import`.
    pub fn import_name(&self) -> Option<&str> {
        match self {
            Module::Custom(name) => Some(name),
            Module::StdLib | Module::Host => None,
        }
    }
}

/// How a type reference is spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// `Name` or `Name<Args>`
    #[default]
    Plain,
    /// `[Element]`
    Array,
    /// `[Key: Value]`
    Dictionary,
    /// Language built-in such as `Void`
    Builtin,
}

/// IR type reference
///
/// Equality (and hashing) considers the name, the generic arguments and optionality only. The module and
/// the spelling kind are presentation details, so a manifest type written as `"Void"` compares equal to
/// [`TypeReference::VOID`].
#[derive(Debug, Clone)]
pub struct TypeReference {
    module: Module,
    name: Cow<'static, str>,
    generic_args: Vec<TypeReference>,
    optional: bool,
    kind: TypeKind,
}

impl TypeReference {
    /// `Void`: the return type that is left out of rendered signatures.
    pub const VOID: TypeReference = TypeReference::std_builtin("Void");
    pub const INT: TypeReference = TypeReference::std_plain("Int");
    pub const STRING: TypeReference = TypeReference::std_plain("String");
    pub const BOOL: TypeReference = TypeReference::std_plain("Bool");
    pub const DOUBLE: TypeReference = TypeReference::std_plain("Double");

    const fn std_plain(name: &'static str) -> Self {
        Self {
            module: Module::StdLib,
            name: Cow::Borrowed(name),
            generic_args: Vec::new(),
            optional: false,
            kind: TypeKind::Plain,
        }
    }

    const fn std_builtin(name: &'static str) -> Self {
        Self {
            module: Module::StdLib,
            name: Cow::Borrowed(name),
            generic_args: Vec::new(),
            optional: false,
            kind: TypeKind::Builtin,
        }
    }

    /// A plain named type living in the host module.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            module: Module::Host,
            name: Cow::Owned(name.into()),
            generic_args: Vec::new(),
            optional: false,
            kind: TypeKind::Plain,
        }
    }

    /// A language built-in (standard library, never imported).
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            module: Module::StdLib,
            name: Cow::Owned(name.into()),
            generic_args: Vec::new(),
            optional: false,
            kind: TypeKind::Builtin,
        }
    }

    /// `[element]`, equal to `Array<element>`.
    pub fn array_of(element: TypeReference) -> Self {
        Self {
            module: Module::StdLib,
            name: Cow::Borrowed("Array"),
            generic_args: vec![element],
            optional: false,
            kind: TypeKind::Array,
        }
    }

    /// `[key: value]`, equal to `Dictionary<key, value>`.
    pub fn dictionary_of(key: TypeReference, value: TypeReference) -> Self {
        Self {
            module: Module::StdLib,
            name: Cow::Borrowed("Dictionary"),
            generic_args: vec![key, value],
            optional: false,
            kind: TypeKind::Dictionary,
        }
    }

    /// Replace the generic arguments.
    pub fn with_generic_args(mut self, args: Vec<TypeReference>) -> Self {
        self.generic_args = args;
        self
    }

    /// Move the type into another module.
    pub fn in_module(mut self, module: Module) -> Self {
        self.module = module;
        self
    }

    /// Mark the type optional (`T?`).
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Strip optionality.
    pub fn non_optional(mut self) -> Self {
        self.optional = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn generic_args(&self) -> &[TypeReference] {
        &self.generic_args
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Check if this is the `Void` sentinel
    pub fn is_void(&self) -> bool {
        *self == Self::VOID
    }

    /// Get the Swift spelling
    pub fn swift_name(&self) -> String {
        let base = match self.kind {
            TypeKind::Array if self.generic_args.len() == 1 => format!("[{}]", self.generic_args[0].swift_name()),
            TypeKind::Dictionary if self.generic_args.len() == 2 => format!(
                "[{}: {}]",
                self.generic_args[0].swift_name(),
                self.generic_args[1].swift_name()
            ),
            _ if self.generic_args.is_empty() => self.name.to_string(),
            _ => {
                let inner: Vec<_> = self.generic_args.iter().map(|a| a.swift_name()).collect();
                format!("{}<{}>", self.name, inner.join(", "))
            }
        };
        if self.optional { format!("{base}?") } else { base }
    }
}

impl PartialEq for TypeReference {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.optional == other.optional && self.generic_args == other.generic_args
    }
}

impl Eq for TypeReference {}

impl Hash for TypeReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.generic_args.hash(state);
        self.optional.hash(state);
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.swift_name())
    }
}
