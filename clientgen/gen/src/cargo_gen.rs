//! Cargo.toml generation for the generated bindings crate.

use crate::errors::GeneratorError;

/// Path of the `clientgen` runtime crate in this workspace.
pub const DEFAULT_RUNTIME_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/..");

/// Checks that `name` is usable as a Cargo package name.
///
/// ## Errors
///
/// Returns `GeneratorError::ConfigError` for empty names, names starting with
/// a digit, and names containing anything but ASCII alphanumerics, `-` and `_`.
pub fn validate_crate_name(name: &str) -> Result<(), GeneratorError> {
    let valid = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(GeneratorError::ConfigError(format!(
            "Invalid crate name: '{}'",
            name
        )))
    }
}

/// Renders the generated crate's manifest.
///
/// The manifest declares an empty `[workspace]` so the crate builds on its
/// own wherever it is written.
pub fn generate_cargo_toml(crate_name: &str, runtime_path: &str) -> String {
    format!(
        r#"[package]
name = {name}
version = "0.1.0"
edition = "2024"
publish = false

[dependencies]
clientgen = {{ path = {runtime} }}
serde = {{ version = "1.0", features = ["derive"] }}

[workspace]
"#,
        name = toml_string(crate_name),
        runtime = toml_string(runtime_path),
    )
}

fn toml_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
