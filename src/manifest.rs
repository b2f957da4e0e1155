//! Declaration manifests
//!
//! A manifest is the JSON hand-off between resource discovery and this crate: a list of functions with
//! their parameters, types and pre-rendered bodies. Loading a manifest runs every function through
//! [`FunctionBuilder::build`](crate::backend::ir::FunctionBuilder::build), so a loaded
//! [`DeclarationSet`] always renders.
//!
//! ```json
//! {
//!   "functions": [
//!     {
//!       "name": "load",
//!       "static": true,
//!       "params": [{ "name": "id", "type": "Int" }],
//!       "throws": true,
//!       "returns": { "array": "Resource" },
//!       "body": "return cache[id]"
//!     }
//!   ]
//! }
//! ```
//!
//! Types are either a bare name (`"Int"`) or one of
//! `{ "name", "args", "optional", "module" }`, `{ "array", "optional" }`, `{ "dictionary": [key, value], "optional" }`.

use std::fs;
use std::path::Path;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::ir::{DeclarationSet, Function, InvalidDeclaration, Module, Parameter, TypeReference};

/// Errors raised while loading a manifest
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to read manifest `{path}`")]
    #[diagnostic(code(resgen::manifest::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest")]
    #[diagnostic(
        code(resgen::manifest::json),
        help("a manifest is a JSON object with a `functions` array")
    )]
    Json(#[from] serde_json::Error),

    #[error("function #{index} in manifest is invalid")]
    #[diagnostic(
        code(resgen::manifest::invalid_declaration),
        help("check the entry's name, generics clause and parameter names against the cause below")
    )]
    InvalidDeclaration {
        index: usize,
        #[source]
        source: InvalidDeclaration,
    },
}

/// Top-level manifest document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub functions: Vec<FunctionSpec>,
}

/// One function entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionSpec {
    pub name: String,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub generics: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
    #[serde(default)]
    pub throws: bool,
    /// Absent means `Void`
    #[serde(default)]
    pub returns: Option<TypeSpec>,
    #[serde(default)]
    pub body: String,
}

/// One parameter entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ParamSpec {
    pub name: String,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeSpec,
    #[serde(default)]
    pub default: Option<String>,
}

/// A type as written in a manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum TypeSpec {
    Name(String),
    Array {
        array: Box<TypeSpec>,
        #[serde(default)]
        optional: bool,
    },
    Dictionary {
        dictionary: Box<(TypeSpec, TypeSpec)>,
        #[serde(default)]
        optional: bool,
    },
    Named {
        name: String,
        #[serde(default)]
        args: Vec<TypeSpec>,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        module: Option<String>,
    },
}

impl TypeSpec {
    pub fn to_type_reference(&self) -> TypeReference {
        match self {
            TypeSpec::Name(name) => TypeReference::named(name.as_str()),
            TypeSpec::Array { array, optional } => {
                mark_optional(TypeReference::array_of(array.to_type_reference()), *optional)
            }
            TypeSpec::Dictionary { dictionary, optional } => {
                let (key, value) = dictionary.as_ref();
                mark_optional(
                    TypeReference::dictionary_of(key.to_type_reference(), value.to_type_reference()),
                    *optional,
                )
            }
            TypeSpec::Named {
                name,
                args,
                optional,
                module,
            } => {
                let ty = TypeReference::named(name.as_str())
                    .with_generic_args(args.iter().map(TypeSpec::to_type_reference).collect())
                    .in_module(parse_module(module.as_deref()));
                mark_optional(ty, *optional)
            }
        }
    }
}

fn mark_optional(ty: TypeReference, optional: bool) -> TypeReference {
    if optional { ty.optional() } else { ty }
}

fn parse_module(module: Option<&str>) -> Module {
    match module {
        None | Some("host") => Module::Host,
        Some("stdlib") => Module::StdLib,
        Some(name) => Module::Custom(name.to_string()),
    }
}

impl ParamSpec {
    pub fn to_parameter(&self) -> Parameter {
        let mut param = Parameter::new(self.name.as_str(), self.ty.to_type_reference());
        if let Some(local) = &self.local_name {
            param = param.with_local_name(local.as_str());
        }
        if let Some(default) = &self.default {
            param = param.with_default_value(default.as_str());
        }
        param
    }
}

impl FunctionSpec {
    pub fn to_function(&self) -> Result<Function, InvalidDeclaration> {
        let mut builder = Function::builder(self.name.as_str())
            .comments(self.comments.iter().cloned())
            .is_static(self.is_static)
            .params(self.params.iter().map(ParamSpec::to_parameter))
            .throws(self.throws)
            .returns(
                self.returns
                    .as_ref()
                    .map_or(TypeReference::VOID, TypeSpec::to_type_reference),
            )
            .body(self.body.as_str());
        if let Some(generics) = &self.generics {
            builder = builder.generics(generics.as_str());
        }
        builder.build()
    }
}

impl Manifest {
    /// Parse a manifest from JSON text
    pub fn from_json(source: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a manifest file
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::from_json(&source)?;
        tracing::debug!(functions = manifest.functions.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Build validated IR declarations, in manifest order
    pub fn to_declarations(&self) -> Result<DeclarationSet, ManifestError> {
        self.functions
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.to_function()
                    .map_err(|source| ManifestError::InvalidDeclaration { index, source })
            })
            .collect()
    }
}
