//! Error types for the clientgen generator.

use clientgen_define::{CallPattern, SchemaError};
use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The schema failed validation
    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A schema file is not a valid JSON schema
    #[error("Failed to parse schema file '{path}': {source}")]
    SchemaFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A method's call pattern is outside a rejecting profile's capabilities.
    #[error(
        "Method '{method}' uses {pattern}, which transport profile '{profile}' cannot express"
    )]
    Unsupported {
        /// Qualified method name (e.g. "MyService.bidiStreaming").
        method: String,
        pattern: CallPattern,
        profile: String,
    },
}
