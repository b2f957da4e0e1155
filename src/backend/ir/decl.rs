//! IR declaration definitions

use std::collections::HashSet;

use resgen_core::lang::identifiers::SwiftIdentifier;

use super::{InvalidDeclaration, TypeReference};

/// Function parameter
///
/// `name` is the external label seen at call sites. `local_name` is only present when the body refers to
/// the parameter under a different name (`value newValue: String`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    local_name: Option<SwiftIdentifier>,
    ty: TypeReference,
    /// Swift expression text, emitted verbatim after ` = `
    default_value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            local_name: None,
            ty,
            default_value: None,
        }
    }

    /// Bind the parameter under a separate internal name.
    ///
    /// The local name is normalized like the label. It is dropped when it has no identifier characters
    /// or when it normalizes to the label, which already binds it.
    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        let local = SwiftIdentifier::new(&local_name.into());
        let redundant = local.is_empty() || local == self.identifier();
        self.local_name = if redundant { None } else { Some(local) };
        self
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bare spelling of the internal name, if any.
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_ref().map(SwiftIdentifier::as_str)
    }

    pub fn local_identifier(&self) -> Option<&SwiftIdentifier> {
        self.local_name.as_ref()
    }

    pub fn ty(&self) -> &TypeReference {
        &self.ty
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The external label as a Swift identifier, derived on every call.
    pub fn identifier(&self) -> SwiftIdentifier {
        SwiftIdentifier::new(&self.name)
    }

    /// Name the body sees the parameter under, without keyword escaping.
    pub fn binding_name(&self) -> String {
        match &self.local_name {
            Some(local) => local.as_str().to_string(),
            None => self.identifier().as_str().to_string(),
        }
    }
}

/// IR function declaration
///
/// Built through [`Function::builder`]; a finished `Function` is immutable and always renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    comments: Vec<String>,
    is_static: bool,
    name: SwiftIdentifier,
    /// Contents of the generics clause without angle brackets, e.g. `T: Decodable`
    generics: Option<String>,
    params: Vec<Parameter>,
    does_throw: bool,
    return_type: TypeReference,
    /// Pre-rendered statements; never parsed
    body: String,
}

impl Function {
    /// Start a declaration named `name`.
    ///
    /// Everything else defaults to an instance function with no comments, generics or parameters that
    /// does not throw and returns `Void`.
    pub fn builder(name: impl Into<String>) -> FunctionBuilder {
        FunctionBuilder::new(name)
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn name(&self) -> &SwiftIdentifier {
        &self.name
    }

    pub fn generics(&self) -> Option<&str> {
        self.generics.as_deref()
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn does_throw(&self) -> bool {
        self.does_throw
    }

    pub fn return_type(&self) -> &TypeReference {
        &self.return_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Builder for [`Function`]
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    raw_name: String,
    comments: Vec<String>,
    is_static: bool,
    generics: Option<String>,
    params: Vec<Parameter>,
    does_throw: bool,
    return_type: TypeReference,
    body: String,
}

impl FunctionBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            raw_name: name.into(),
            comments: Vec::new(),
            is_static: false,
            generics: None,
            params: Vec::new(),
            does_throw: false,
            return_type: TypeReference::VOID,
            body: String::new(),
        }
    }

    /// Set the documentation lines (without the `///` marker).
    pub fn comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    /// Append one documentation line.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn throws(mut self, does_throw: bool) -> Self {
        self.does_throw = does_throw;
        self
    }

    pub fn returns(mut self, return_type: TypeReference) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Validate and freeze the declaration.
    pub fn build(self) -> Result<Function, InvalidDeclaration> {
        self.validate().inspect_err(|err| {
            tracing::debug!(function = %self.raw_name, error = %err, "rejected declaration");
        })?;

        Ok(Function {
            comments: self.comments,
            is_static: self.is_static,
            name: SwiftIdentifier::new(&self.raw_name),
            generics: self.generics,
            params: self.params,
            does_throw: self.does_throw,
            return_type: self.return_type,
            body: self.body,
        })
    }

    fn validate(&self) -> Result<(), InvalidDeclaration> {
        let name = SwiftIdentifier::new(&self.raw_name);
        if name.is_empty() {
            return Err(InvalidDeclaration::EmptyName {
                raw: self.raw_name.clone(),
            });
        }
        let function = name.to_string();

        if self.generics.as_deref().is_some_and(|g| g.trim().is_empty()) {
            return Err(InvalidDeclaration::EmptyGenerics { function });
        }

        let mut bound = HashSet::new();
        for (index, param) in self.params.iter().enumerate() {
            if param.identifier().is_empty() {
                return Err(InvalidDeclaration::EmptyParameterName {
                    function,
                    index,
                });
            }
            let binding = param.binding_name();
            if !bound.insert(binding.clone()) {
                return Err(InvalidDeclaration::DuplicateParameter {
                    function,
                    name: binding,
                });
            }
        }
        Ok(())
    }
}
