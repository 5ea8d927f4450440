//! Client and builder generation.
//!
//! Each (service, profile) pair gets a client struct named
//! `{Service}{ProfileSuffix}` and a matching `...Builder`. The builder wraps
//! `clientgen::ClientConfigBuilder`, so required-field checks live in one
//! place at runtime.

use std::collections::HashSet;

use clientgen_define::naming::{to_pascal_case, to_snake_case};
use clientgen_define::{ClientBuilderSpec, ServiceDef, TransportProfile};
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::errors::GeneratorError;
use crate::naming::{ident, snake_ident};

/// Builder fields the runtime knows how to collect.
const KNOWN_FIELDS: &[&str] = &["baseUrl"];

/// Fields the runtime cannot build a client without.
const ALWAYS_REQUIRED: &[&str] = &["baseUrl"];

/// `{Service}{ProfileSuffix}`, e.g. `MyServiceHttpAsync`.
pub fn client_ident(
    service: &ServiceDef,
    profile: &TransportProfile,
) -> Result<Ident, GeneratorError> {
    let service = to_pascal_case(&service.name);
    ident(&format!("{}{}", service, profile.client_suffix()))
}

/// `{Service}{ProfileSuffix}Builder`
pub fn builder_ident(
    service: &ServiceDef,
    profile: &TransportProfile,
) -> Result<Ident, GeneratorError> {
    let client = client_ident(service, profile)?;
    ident(&format!("{}Builder", client))
}

/// Generates the client struct and its builder.
///
/// ## Errors
///
/// Returns `GeneratorError::ConfigError` if `spec` lists a field the runtime
/// builder cannot collect, lists a field twice, or does not mark `baseUrl`
/// as required.
///
/// ## Generated Code
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct MyServiceHttpAsync {
///     config: clientgen::ClientConfig,
/// }
///
/// impl MyServiceHttpAsync {
///     pub const PROFILE: &'static str = "http-async";
///     pub fn builder(transport: Arc<dyn clientgen::Transport>) -> MyServiceHttpAsyncBuilder { .. }
///     pub fn config(&self) -> &clientgen::ClientConfig { .. }
/// }
///
/// impl MyServiceHttpAsyncBuilder {
///     pub fn base_url(self, base_url: clientgen::Url) -> Self { .. }
///     pub fn build(self) -> Result<MyServiceHttpAsync, clientgen::BindingError> { .. }
/// }
/// ```
pub fn generate_client(
    service: &ServiceDef,
    profile: &TransportProfile,
    spec: &ClientBuilderSpec,
) -> Result<TokenStream, GeneratorError> {
    check_builder_spec(spec)?;

    let client = client_ident(service, profile)?;
    let builder = builder_ident(service, profile)?;
    let profile_name = &profile.name;

    let client_doc = format!(
        " `{}` client over the `{}` transport profile.\n\n {}",
        service.name, profile.name, profile.description
    );
    let builder_doc = format!(" Builder for [`{}`].", client);

    let setters = spec
        .fields
        .iter()
        .map(|field| {
            let setter = snake_ident(&field.name)?;
            let doc = if field.required {
                format!(" Sets `{}` (required).", field.name)
            } else {
                format!(" Sets `{}`.", field.name)
            };
            Ok(quote! {
                #[doc = #doc]
                pub fn #setter(self, #setter: clientgen::Url) -> Self {
                    Self {
                        inner: self.inner.#setter(#setter),
                    }
                }
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    let missing_doc = spec
        .required()
        .map(|f| format!(" - `{}`", to_snake_case(&f.name)))
        .collect::<Vec<_>>()
        .join("\n");
    let build_doc = format!(
        " Builds the client.\n\n ## Errors\n\n Returns `BindingError::MissingRequiredField` if any of these was never set:\n\n{}",
        missing_doc
    );

    Ok(quote! {
        #[doc = #client_doc]
        #[derive(Debug, Clone)]
        pub struct #client {
            config: clientgen::ClientConfig,
        }

        impl #client {
            /// Transport profile these bindings were generated for.
            pub const PROFILE: &'static str = #profile_name;

            /// Starts building a client that issues calls through `transport`.
            pub fn builder(transport: ::std::sync::Arc<dyn clientgen::Transport>) -> #builder {
                #builder {
                    inner: clientgen::ClientConfig::builder(transport),
                }
            }

            pub fn config(&self) -> &clientgen::ClientConfig {
                &self.config
            }
        }

        #[doc = #builder_doc]
        #[derive(Debug)]
        pub struct #builder {
            inner: clientgen::ClientConfigBuilder,
        }

        impl #builder {
            #(#setters)*

            #[doc = #build_doc]
            pub fn build(self) -> ::std::result::Result<#client, clientgen::BindingError> {
                Ok(#client {
                    config: self.inner.build()?,
                })
            }
        }
    })
}

/// Checks that `spec` describes a builder the runtime can honor.
fn check_builder_spec(spec: &ClientBuilderSpec) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for field in &spec.fields {
        if !KNOWN_FIELDS.contains(&field.name.as_str()) {
            return Err(GeneratorError::ConfigError(format!(
                "Unknown builder field: '{}'. Available fields: {}",
                field.name,
                KNOWN_FIELDS.join(", ")
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(GeneratorError::ConfigError(format!(
                "Duplicate builder field: '{}'",
                field.name
            )));
        }
    }

    for name in ALWAYS_REQUIRED {
        if !spec.required().any(|f| f.name == *name) {
            return Err(GeneratorError::ConfigError(format!(
                "Builder field '{}' must be listed as required",
                name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{format_generated_code, validate_generated_code};
    use clientgen_define::BuilderField;

    fn service() -> ServiceDef {
        ServiceDef::new("MyService")
    }

    #[test]
    fn client_names_combine_service_and_profile() {
        let service = service();
        assert_eq!(
            client_ident(&service, &TransportProfile::http_stub()).unwrap(),
            "MyServiceHttpStub"
        );
        assert_eq!(
            builder_ident(&service, &TransportProfile::http_async()).unwrap(),
            "MyServiceHttpAsyncBuilder"
        );
    }

    #[test]
    fn standard_builder_requires_base_url() {
        let tokens = generate_client(
            &service(),
            &TransportProfile::http_async(),
            &ClientBuilderSpec::standard(),
        )
        .unwrap();
        validate_generated_code(&tokens).unwrap();
        let code = format_generated_code(&tokens).unwrap();

        assert!(code.contains("pub struct MyServiceHttpAsync"));
        assert!(code.contains("pub const PROFILE: &'static str = \"http-async\";"));
        assert!(code.contains("pub struct MyServiceHttpAsyncBuilder"));
        assert!(code.contains("pub fn base_url(self, base_url: clientgen::Url) -> Self"));
        assert!(code.contains("inner: self.inner.base_url(base_url)"));
        assert!(code.contains("config: self.inner.build()?"));
        assert!(code.contains("/// Sets `baseUrl` (required)."));
    }

    #[test]
    fn builder_takes_transport_up_front() {
        let tokens = generate_client(
            &service(),
            &TransportProfile::http_stub(),
            &ClientBuilderSpec::standard(),
        )
        .unwrap();
        let code = format_generated_code(&tokens).unwrap();

        assert!(code.contains("transport: ::std::sync::Arc<dyn clientgen::Transport>"));
        assert!(code.contains("clientgen::ClientConfig::builder(transport)"));
    }

    #[test]
    fn unknown_builder_field_is_rejected() {
        let spec = ClientBuilderSpec {
            fields: vec![BuilderField {
                name: "apiKey".to_string(),
                required: true,
            }],
        };
        let result = generate_client(&service(), &TransportProfile::http_async(), &spec);

        match result {
            Err(GeneratorError::ConfigError(message)) => {
                assert!(message.contains("apiKey"));
                assert!(message.contains("baseUrl"));
            }
            other => panic!("expected ConfigError, got {:?}", other.map(|t| t.to_string())),
        }
    }

    fn config_error(spec: &ClientBuilderSpec) -> String {
        match generate_client(&service(), &TransportProfile::http_async(), spec) {
            Err(GeneratorError::ConfigError(message)) => message,
            other => panic!("expected ConfigError, got {:?}", other.map(|t| t.to_string())),
        }
    }

    #[test]
    fn optional_base_url_is_rejected() {
        let spec = ClientBuilderSpec {
            fields: vec![BuilderField {
                name: "baseUrl".to_string(),
                required: false,
            }],
        };
        assert!(config_error(&spec).contains("'baseUrl' must be listed as required"));
    }

    #[test]
    fn spec_without_base_url_is_rejected() {
        let spec = ClientBuilderSpec { fields: vec![] };
        assert!(config_error(&spec).contains("'baseUrl' must be listed as required"));
    }

    #[test]
    fn duplicate_builder_field_is_rejected() {
        let mut spec = ClientBuilderSpec::standard();
        spec.fields.extend(ClientBuilderSpec::standard().fields);
        assert!(config_error(&spec).contains("Duplicate builder field: 'baseUrl'"));
    }
}
