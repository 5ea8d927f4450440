//! Service trait generation.
//!
//! Each service becomes one object-safe trait. Every transport profile's
//! client implements it, so callers can hold an `Arc<dyn MyService>` and
//! swap backends without touching call sites.

use clientgen_define::{MethodDef, Schema, ServiceDef};
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::codegen::type_map::{PassBy, owned_type, param_type};
use crate::errors::GeneratorError;
use crate::naming::{pascal_ident, snake_ident, unused_ident};

/// Name of the request parameter in generated methods.
pub const REQUEST_PARAM: &str = "request";

/// A method parameter as it appears in generated signatures.
#[derive(Debug, Clone)]
pub struct Param {
    pub ident: Ident,
    pub ty: TokenStream,
    pub pass: PassBy,
}

/// A generated method signature.
#[derive(Debug, Clone)]
pub struct Signature {
    pub name: Ident,
    /// The request payload, if any, always first.
    pub request: Option<Param>,
    pub path_params: Vec<Param>,
    /// `T` in `clientgen::Pending<T>`.
    pub output: TokenStream,
}

impl Signature {
    /// Builds the signature of `method`.
    ///
    /// When `unused` is true every parameter name is prefixed with `_`, for
    /// bodies that never read their arguments.
    pub fn of(method: &MethodDef, schema: &Schema, unused: bool) -> Result<Self, GeneratorError> {
        let param_ident = |name: &str| {
            if unused {
                unused_ident(name)
            } else {
                snake_ident(name)
            }
        };

        let request = match &method.request {
            Some(ty) => {
                let (ty, pass) = param_type(ty, schema)?;
                Some(Param {
                    ident: param_ident(REQUEST_PARAM)?,
                    ty,
                    pass,
                })
            }
            None => None,
        };

        let path_params = method
            .path_params
            .iter()
            .map(|p| {
                let (ty, pass) = param_type(&p.ty, schema)?;
                Ok(Param {
                    ident: param_ident(&p.name)?,
                    ty,
                    pass,
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        let output = match &method.response {
            Some(ty) => owned_type(ty)?,
            None => quote! { () },
        };

        Ok(Self {
            name: snake_ident(&method.name)?,
            request,
            path_params,
            output,
        })
    }

    /// `fn name(&self, ...) -> clientgen::Pending<T>`
    pub fn to_tokens(&self) -> TokenStream {
        let name = &self.name;
        let output = &self.output;
        let params = self
            .request
            .iter()
            .chain(&self.path_params)
            .map(|Param { ident, ty, .. }| quote! { #ident: #ty });

        quote! {
            fn #name(&self #(, #params)*) -> clientgen::Pending<#output>
        }
    }
}

/// Generates the trait for `service`.
pub fn generate_service_trait(
    service: &ServiceDef,
    schema: &Schema,
) -> Result<TokenStream, GeneratorError> {
    let name = pascal_ident(&service.name)?;
    let doc = format!(
        " {}",
        service
            .description
            .clone()
            .unwrap_or_else(|| format!("`{}` service.", service.name))
    );

    let methods = service
        .methods
        .iter()
        .map(|method| {
            let signature = Signature::of(method, schema, false)?.to_tokens();
            let doc = method_doc(method);
            Ok(quote! {
                #[doc = #doc]
                #signature;
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    Ok(quote! {
        #[doc = #doc]
        pub trait #name: ::std::marker::Send + ::std::marker::Sync {
            #(#methods)*
        }
    })
}

fn method_doc(method: &MethodDef) -> String {
    match &method.description {
        Some(description) => format!(" {} (`{}`)", description, method.pattern),
        None => format!(" `{}` ({}).", method.name, method.pattern),
    }
}
