//! Output assembly, validation and file writing.
//!
//! The generated crate has a fixed layout:
//!
//! ```text
//! Cargo.toml
//! src/lib.rs        module declarations
//! src/types.rs      enums and messages
//! src/<service>.rs  service trait + one client, builder and impl per profile
//! src/prelude.rs    re-exports
//! ```
//!
//! Every Rust file is validated with `syn` and formatted with `prettyplease`
//! before it is printed or written.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clientgen_define::naming::{to_kebab_case, to_snake_case};
use clientgen_define::{ClientBuilderSpec, Schema, ServiceDef, TransportProfile};
use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::cargo_gen::{DEFAULT_RUNTIME_PATH, generate_cargo_toml, validate_crate_name};
use crate::codegen::type_map::referenced_names;
use crate::codegen::{
    builder_ident, client_ident, generate_binding_impl, generate_client, generate_enum,
    generate_message, generate_service_trait,
};
use crate::errors::GeneratorError;
use crate::naming::{pascal_ident, snake_ident};

/// Module names a service may not take.
const RESERVED_MODULES: &[&str] = &["lib", "types", "prelude", "clientgen", "serde", "std", "core"];

/// Runtime items the prelude re-exports by name.
const PRELUDE_RUNTIME_ITEMS: &[&str] = &["BindingError", "Pending", "Transport", "Url"];

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Profiles to generate clients for, in order.
    pub profiles: Vec<TransportProfile>,
    pub builder: ClientBuilderSpec,
    /// Package name of the generated crate; `{package}-client` when unset.
    pub crate_name: Option<String>,
    /// Path the generated manifest uses for the `clientgen` dependency.
    pub runtime_path: String,
    /// Print instead of writing.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            profiles: TransportProfile::builtin(),
            builder: ClientBuilderSpec::standard(),
            crate_name: None,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    /// The generated crate's package name for `schema`.
    pub fn crate_name_for(&self, schema: &Schema) -> String {
        self.crate_name
            .clone()
            .unwrap_or_else(|| format!("{}-client", to_kebab_case(schema.package())))
    }

    /// Checks the options independently of any schema.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if no profile is selected, or two
    /// profiles share a name or client suffix.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.profiles.is_empty() {
            return Err(GeneratorError::ConfigError(
                "At least one transport profile is required".to_string(),
            ));
        }

        let mut names = HashSet::new();
        let mut suffixes = HashSet::new();
        for profile in &self.profiles {
            if !names.insert(profile.name.as_str()) || !suffixes.insert(profile.client_suffix()) {
                return Err(GeneratorError::ConfigError(format!(
                    "Transport profile '{}' selected more than once",
                    profile.name
                )));
            }
        }
        Ok(())
    }
}

/// One generated file, relative to the generated crate's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Module file stem of a service, e.g. `my_service`.
pub fn service_module(service: &ServiceDef) -> String {
    to_snake_case(&service.name)
}

/// Assembles `lib.rs`.
pub fn assemble_lib_rs(schema: &Schema, options: &GenerateOptions) -> Result<TokenStream, GeneratorError> {
    let modules = schema
        .services()
        .iter()
        .map(|s| snake_ident(&service_module(s)))
        .collect::<Result<Vec<_>, _>>()?;

    let intro = format!(" Client bindings for the `{}` schema.", schema.package());
    let profiles = options
        .profiles
        .iter()
        .map(|p| format!("`{}`", p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let profiles = format!(" Transport profiles: {}.", profiles);

    Ok(quote! {
        #![doc = #intro]
        //!
        #![doc = #profiles]

        pub mod prelude;
        pub mod types;
        #(pub mod #modules;)*
    })
}

/// Assembles `types.rs`: every enum, then every message.
pub fn assemble_types(schema: &Schema) -> Result<TokenStream, GeneratorError> {
    let doc = format!(" Enums and messages of the `{}` schema.", schema.package());
    let enums = schema
        .enums()
        .iter()
        .map(generate_enum)
        .collect::<Result<Vec<_>, _>>()?;
    let messages = schema
        .messages()
        .iter()
        .map(|m| generate_message(m, schema))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #![doc = #doc]

        #(#enums)*
        #(#messages)*
    })
}

/// Assembles one service module: the trait, then a client per profile.
pub fn assemble_service_module(
    service: &ServiceDef,
    schema: &Schema,
    options: &GenerateOptions,
) -> Result<TokenStream, GeneratorError> {
    let doc = format!(" `{}` bindings.", service.name);

    let types = referenced_names(service.methods.iter().flat_map(|m| {
        m.request
            .iter()
            .chain(m.response.iter())
            .chain(m.path_params.iter().map(|p| &p.ty))
    }))
    .into_iter()
    .map(pascal_ident)
    .collect::<Result<Vec<_>, _>>()?;
    let imports = (!types.is_empty()).then(|| quote! { use crate::types::{#(#types),*}; });

    let service_trait = generate_service_trait(service, schema)?;
    let mut clients = Vec::with_capacity(options.profiles.len());
    for profile in &options.profiles {
        clients.push(generate_client(service, profile, &options.builder)?);
        clients.push(generate_binding_impl(service, profile, schema)?);
    }

    Ok(quote! {
        #![doc = #doc]

        #imports

        #service_trait

        #(#clients)*
    })
}

/// Assembles `prelude.rs`.
pub fn assemble_prelude(schema: &Schema, options: &GenerateOptions) -> Result<TokenStream, GeneratorError> {
    let types = (!schema.enums().is_empty() || !schema.messages().is_empty())
        .then(|| quote! { pub use crate::types::*; });

    let mut services = Vec::with_capacity(schema.services().len());
    for service in schema.services() {
        let module = snake_ident(&service_module(service))?;
        let mut items = vec![pascal_ident(&service.name)?];
        for profile in &options.profiles {
            items.push(client_ident(service, profile)?);
            items.push(builder_ident(service, profile)?);
        }
        services.push(quote! { pub use crate::#module::{#(#items),*}; });
    }

    Ok(quote! {
        //! Common imports for working with these bindings.

        #types
        #(#services)*
        pub use clientgen::{BindingError, Pending, Transport, Url};
    })
}

/// Rejects schemas whose generated names would collide.
fn check_generated_names(schema: &Schema, options: &GenerateOptions) -> Result<(), GeneratorError> {
    let type_names: HashSet<String> = schema
        .enums()
        .iter()
        .map(|e| pascal_ident(&e.name).map(|i| i.to_string()))
        .chain(
            schema
                .messages()
                .iter()
                .map(|m| pascal_ident(&m.name).map(|i| i.to_string())),
        )
        .collect::<Result<_, _>>()?;

    let mut modules = HashSet::new();
    let mut exported = HashSet::new();
    for service in schema.services() {
        let module = service_module(service);
        if RESERVED_MODULES.contains(&module.as_str()) || !modules.insert(module.clone()) {
            return Err(GeneratorError::CodeGenError(format!(
                "Service '{}' cannot use module name '{}'",
                service.name, module
            )));
        }

        let mut names = vec![pascal_ident(&service.name)?.to_string()];
        for profile in &options.profiles {
            names.push(client_ident(service, profile)?.to_string());
            names.push(builder_ident(service, profile)?.to_string());
        }
        for name in names {
            if type_names.contains(&name)
                || PRELUDE_RUNTIME_ITEMS.contains(&name.as_str())
                || !exported.insert(name.clone())
            {
                return Err(GeneratorError::CodeGenError(format!(
                    "Generated name '{}' for service '{}' collides with another item",
                    name, service.name
                )));
            }
        }
    }
    Ok(())
}

/// Validates generated code by parsing it with syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the tokens are not a valid file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats a syn file using prettyplease.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by clientgen. Do not edit manually.\n\n{}",
        formatted
    )
}

/// Writes content to a file atomically (temp file + rename).
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if a directory cannot be created or
/// the file cannot be written or renamed.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn render(path: impl Into<PathBuf>, tokens: &TokenStream) -> Result<GeneratedFile, GeneratorError> {
    let file = validate_code(tokens)?;
    Ok(GeneratedFile {
        path: path.into(),
        content: format_code(&file),
    })
}

/// Generates every file of the bindings crate without touching the filesystem.
///
/// ## Errors
///
/// Returns a `ConfigError` for invalid options, `Unsupported` when a
/// rejecting profile meets a method it cannot express, and `CodeGenError`
/// when the schema's names cannot become valid, collision-free Rust.
pub fn generate(schema: &Schema, options: &GenerateOptions) -> Result<Vec<GeneratedFile>, GeneratorError> {
    options.validate()?;
    let crate_name = options.crate_name_for(schema);
    validate_crate_name(&crate_name)?;
    check_generated_names(schema, options)?;

    debug!(
        package = schema.package(),
        services = schema.services().len(),
        profiles = options.profiles.len(),
        "generating bindings"
    );

    let src = Path::new("src");
    let mut files = vec![
        GeneratedFile {
            path: PathBuf::from("Cargo.toml"),
            content: generate_cargo_toml(&crate_name, &options.runtime_path),
        },
        render(src.join("lib.rs"), &assemble_lib_rs(schema, options)?)?,
        render(src.join("types.rs"), &assemble_types(schema)?)?,
    ];
    for service in schema.services() {
        let tokens = assemble_service_module(service, schema, options)?;
        files.push(render(
            src.join(format!("{}.rs", service_module(service))),
            &tokens,
        )?);
    }
    files.push(render(src.join("prelude.rs"), &assemble_prelude(schema, options)?)?);

    Ok(files)
}

/// Generates the bindings crate into `crate_dir`, or prints it in dry-run mode.
///
/// ## Errors
///
/// Everything [`generate`] returns, plus `WriteError` when a file cannot be
/// written.
pub fn generate_and_write(
    schema: &Schema,
    crate_dir: &Path,
    options: &GenerateOptions,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let files = generate(schema, options)?;

    if options.dry_run {
        for file in &files {
            println!("=== {} ===\n{}\n", file.path.display(), file.content);
        }
    } else {
        for file in &files {
            let path = crate_dir.join(&file.path);
            write_atomic(&path, &file.content)?;
            info!(path = %path.display(), bytes = file.content.len(), "wrote generated file");
        }
    }

    Ok(files)
}
