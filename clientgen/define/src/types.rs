//! Core types for service definitions.
//!
//! - [`CallPattern`] - The request/response shape of a method
//! - [`TypeRef`] - A reference to a scalar or a named schema type
//! - [`PathParam`] - A typed placeholder inserted into the request path
//! - [`MethodDef`] - A single method of a service
//! - [`ServiceDef`] - A named, ordered set of methods

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The shape of a method's request/response interaction.
///
/// Streaming patterns need a multiplexed or duplex transport; a profile
/// limited to plain request/response HTTP only expresses [`Unary`] and
/// [`FireAndForget`].
///
/// [`Unary`]: CallPattern::Unary
/// [`FireAndForget`]: CallPattern::FireAndForget
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clientgen_define::CallPattern;
///
/// assert_eq!(CallPattern::ServerStreaming.to_string(), "SERVER_STREAMING");
/// assert_eq!(CallPattern::from_str("UNARY").unwrap(), CallPattern::Unary);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CallPattern {
    /// Single request, single response.
    Unary,
    /// No meaningful response payload, only success or failure.
    FireAndForget,
    /// Single request, stream of responses.
    ServerStreaming,
    /// Stream of requests, single response.
    ClientStreaming,
    /// Independent request and response streams.
    BidiStreaming,
}

impl CallPattern {
    /// Returns true for the three streaming shapes.
    pub fn is_streaming(self) -> bool {
        matches!(
            self,
            Self::ServerStreaming | Self::ClientStreaming | Self::BidiStreaming
        )
    }
}

/// A reference to the type of a payload, field or path parameter.
///
/// Scalars map directly onto Rust primitives; [`TypeRef::Named`] points at an
/// enum or message defined in the same [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    String,
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    /// An enum or message declared in the schema.
    Named(String),
}

impl TypeRef {
    /// Creates a reference to a named schema type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the referenced type name for [`TypeRef::Named`].
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true for built-in scalar types.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

/// A named, typed placeholder inserted into the request path.
///
/// Path parameters are appended after the method segment in declaration
/// order, each serialized in its type's canonical string form (decimal for
/// integers, the wire value for enums).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParam {
    pub name: String,
    pub ty: TypeRef,
}

impl PathParam {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A single method of a service.
///
/// ## Examples
///
/// ```
/// use clientgen_define::{CallPattern, MethodDef, TypeRef};
///
/// let method = MethodDef::new("unary", CallPattern::Unary)
///     .with_request(TypeRef::named("Entry"))
///     .with_response(TypeRef::named("Entry"))
///     .with_path_param("id", TypeRef::U32)
///     .with_http_segment("foo");
///
/// assert_eq!(method.path_params.len(), 1);
/// assert_eq!(method.http_segment.as_deref(), Some("foo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Method name as written in the schema (e.g. "unknownReturn").
    pub name: String,
    /// Interaction shape of this method.
    pub pattern: CallPattern,
    /// Request payload type; absent for no-argument methods.
    #[serde(default)]
    pub request: Option<TypeRef>,
    /// Response payload type; absent for fire-and-forget methods.
    #[serde(default)]
    pub response: Option<TypeRef>,
    /// Placeholders appended to the request path, in order.
    #[serde(default)]
    pub path_params: Vec<PathParam>,
    /// Explicit URL segment, overriding the one derived from `name`.
    #[serde(default)]
    pub http_segment: Option<String>,
    /// Human-readable description, copied into generated docs.
    #[serde(default)]
    pub description: Option<String>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, pattern: CallPattern) -> Self {
        Self {
            name: name.into(),
            pattern,
            request: None,
            response: None,
            path_params: Vec::new(),
            http_segment: None,
            description: None,
        }
    }

    pub fn with_request(mut self, ty: TypeRef) -> Self {
        self.request = Some(ty);
        self
    }

    pub fn with_response(mut self, ty: TypeRef) -> Self {
        self.response = Some(ty);
        self
    }

    pub fn with_path_param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.path_params.push(PathParam::new(name, ty));
        self
    }

    pub fn with_http_segment(mut self, segment: impl Into<String>) -> Self {
        self.http_segment = Some(segment.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named, ordered set of methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub methods: Vec<MethodDef>,
}

impl ServiceDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            methods: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Looks up a method by its schema name.
    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }
}
