//! String-backed enumeration definitions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::naming::to_pascal_case;

/// A symbolic constant paired with its wire-string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    /// Constant name as written in the schema (e.g. "FOO").
    pub name: String,
    /// External string representation exchanged over the transport.
    pub value: String,
}

/// An enumeration with a finite set of constants and their wire values.
///
/// Constant names and wire values are each unique, so the mapping between
/// them is a bijection over the defined set. Lookups are linear scans in
/// declaration order; enum sizes are small and fixed.
///
/// ## Examples
///
/// ```
/// use clientgen_define::EnumDef;
///
/// let entry = EnumDef::new("Entry2")
///     .with_variant("A", "A")
///     .with_variant("B", "B")
///     .with_variant("C", "C");
///
/// assert_eq!(entry.value_of("C"), Some("C"));
/// assert_eq!(entry.variant_for("B").map(|v| v.name.as_str()), Some("B"));
/// assert!(entry.variant_for("Z").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub variants: Vec<EnumVariant>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            variants: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants.push(EnumVariant {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Returns the wire value of the named constant.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// Returns the constant carrying the given wire value.
    pub fn variant_for(&self, value: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.value == value)
    }

    /// Checks constant-name and wire-value uniqueness.
    ///
    /// Constant names are also compared after conversion to the generated
    /// variant identifier, so `FOO_BAR` and `FooBar` collide.
    pub(crate) fn validate(&self) -> Result<(), SchemaError> {
        let mut names = HashSet::new();
        let mut idents = HashSet::new();
        let mut values = HashSet::new();

        for variant in &self.variants {
            if !names.insert(variant.name.as_str()) || !idents.insert(to_pascal_case(&variant.name))
            {
                return Err(SchemaError::duplicate(
                    format!("constant in enum {}", self.name),
                    &variant.name,
                ));
            }
            if !values.insert(variant.value.as_str()) {
                return Err(SchemaError::duplicate(
                    format!("wire value in enum {}", self.name),
                    &variant.value,
                ));
            }
        }

        Ok(())
    }
}
