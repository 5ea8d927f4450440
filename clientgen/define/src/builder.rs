//! Required configuration of generated client builders.

use serde::{Deserialize, Serialize};

/// A configuration field on a generated client builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderField {
    /// Field name as reported in `MissingRequiredField`.
    pub name: String,
    pub required: bool,
}

/// The fields a generated builder collects before it can produce a client.
///
/// The transport handle is not listed: builders take it as a constructor
/// argument, so it can never be missing. `baseUrl` must always be listed
/// as required; the generator rejects any other spec.
///
/// ## Examples
///
/// ```
/// use clientgen_define::ClientBuilderSpec;
///
/// let spec = ClientBuilderSpec::standard();
/// let required: Vec<_> = spec.required().map(|f| f.name.as_str()).collect();
/// assert_eq!(required, vec!["baseUrl"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBuilderSpec {
    pub fields: Vec<BuilderField>,
}

impl ClientBuilderSpec {
    /// Base address only.
    pub fn standard() -> Self {
        Self {
            fields: vec![BuilderField {
                name: "baseUrl".to_string(),
                required: true,
            }],
        }
    }

    /// Required fields, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &BuilderField> {
        self.fields.iter().filter(|f| f.required)
    }
}

impl Default for ClientBuilderSpec {
    fn default() -> Self {
        Self::standard()
    }
}
