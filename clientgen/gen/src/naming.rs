//! Rust identifiers for schema names.
//!
//! Case conversion comes from `clientgen_define::naming`; this module turns
//! the converted names into [`Ident`]s, escaping keywords and rejecting
//! names that can never be identifiers.

use clientgen_define::naming::{to_pascal_case, to_snake_case};
use proc_macro2::{Ident, Span};

use crate::errors::GeneratorError;

/// Keywords usable as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; these get a trailing underscore.
const UNRAWABLE_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Converts an already-cased name into an identifier.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if `name` is not a valid
/// identifier even after keyword escaping (e.g. it is empty or starts
/// with a digit).
pub fn ident(name: &str) -> Result<Ident, GeneratorError> {
    if UNRAWABLE_KEYWORDS.contains(&name) {
        return Ok(Ident::new(&format!("{name}_"), Span::call_site()));
    }
    if RAW_KEYWORDS.contains(&name) {
        return Ok(Ident::new_raw(name, Span::call_site()));
    }
    syn::parse_str::<Ident>(name).map_err(|_| {
        GeneratorError::CodeGenError(format!("'{name}' is not a valid Rust identifier"))
    })
}

/// `snake_case` identifier for functions, fields, parameters and modules.
pub fn snake_ident(name: &str) -> Result<Ident, GeneratorError> {
    ident(&to_snake_case(name))
}

/// `PascalCase` identifier for types and enum variants.
pub fn pascal_ident(name: &str) -> Result<Ident, GeneratorError> {
    ident(&to_pascal_case(name))
}

/// Identifier for a parameter the method body never reads.
pub fn unused_ident(name: &str) -> Result<Ident, GeneratorError> {
    ident(&format!("_{}", to_snake_case(name)))
}
