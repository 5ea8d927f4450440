//! Message (structured payload) definitions.

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// A single field of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as it appears on the wire.
    pub name: String,
    pub ty: TypeRef,
    /// Required fields are always present; optional ones may be omitted.
    #[serde(default)]
    pub required: bool,
}

impl FieldDef {
    pub fn required(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
        }
    }
}

/// A structured payload type used as a request or response.
///
/// ## Examples
///
/// ```
/// use clientgen_define::{FieldDef, MessageDef, TypeRef};
///
/// let entry = MessageDef::new("Entry")
///     .with_field(FieldDef::optional("field", TypeRef::String));
///
/// assert_eq!(entry.fields.len(), 1);
/// assert!(!entry.fields[0].required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl MessageDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}
