//! Resolving command-line selections into schemas and profiles.

use std::fs;
use std::path::Path;

use clientgen_define::{Schema, TransportProfile};
use tracing::debug;

use crate::errors::GeneratorError;

/// Builds a built-in schema from `clientgen-definitions`.
///
/// ## Errors
///
/// Returns `ConfigError` for an unknown name and `Schema` if the definition
/// fails validation.
pub fn builtin_schema(name: &str) -> Result<Schema, GeneratorError> {
    let define = clientgen_definitions::builtin(name).ok_or_else(|| {
        GeneratorError::ConfigError(format!(
            "Unknown API: '{}'. Available APIs: {}",
            name,
            clientgen_definitions::builtin_names().join(", ")
        ))
    })?;
    Ok(define()?)
}

/// Reads and validates a JSON-encoded schema.
///
/// ## Errors
///
/// Returns `ReadError` if the file cannot be read and `SchemaFile` if it is
/// not valid JSON or fails schema validation.
pub fn load_schema_file(path: &Path) -> Result<Schema, GeneratorError> {
    let content = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let schema: Schema =
        serde_json::from_str(&content).map_err(|e| GeneratorError::SchemaFile {
            path: path.display().to_string(),
            source: e,
        })?;
    debug!(path = %path.display(), package = schema.package(), "loaded schema file");
    Ok(schema)
}

/// Looks up transport profiles by name; an empty selection means every
/// built-in profile.
///
/// ## Errors
///
/// Returns `ConfigError` for an unknown name.
pub fn resolve_profiles(names: &[String]) -> Result<Vec<TransportProfile>, GeneratorError> {
    if names.is_empty() {
        return Ok(TransportProfile::builtin());
    }

    names
        .iter()
        .map(|name| {
            TransportProfile::by_name(name).ok_or_else(|| {
                let available = TransportProfile::builtin()
                    .into_iter()
                    .map(|p| p.name)
                    .collect::<Vec<_>>()
                    .join(", ");
                GeneratorError::ConfigError(format!(
                    "Unknown transport profile: '{}'. Available profiles: {}",
                    name, available
                ))
            })
        })
        .collect()
}
