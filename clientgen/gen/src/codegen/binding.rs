//! Transport binding generation.
//!
//! For each (service, profile) pair this module decides how every method is
//! bound and emits the `impl Service for ServiceProfile` block:
//!
//! | Decision | When | Body |
//! |----------|------|------|
//! | [`BindingKind::Unsupported`] | pattern outside the profile's capabilities | `clientgen::unsupported(..)` |
//! | [`BindingKind::Stub`] | `DispatchStrategy::Stub` | `clientgen::unavailable(..)` |
//! | [`BindingKind::Bridged`] | `DispatchStrategy::CallbackBridge` | `self.config.call(..)...dispatch(..)` |
//!
//! Unsupported and stub bodies never touch the transport. Bridged bodies
//! issue exactly one call and settle the returned handle from its callback.

use clientgen_define::{
    CallPattern, DispatchStrategy, HttpVerb, MethodDef, Schema, ServiceDef, TransportProfile,
    UnsupportedPolicy,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::debug;

use crate::codegen::builder::client_ident;
use crate::codegen::service::Signature;
use crate::codegen::type_map::{borrow, owned_type};
use crate::errors::GeneratorError;
use crate::naming::pascal_ident;

/// How one method is bound to one transport profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Fails immediately with `BindingError::UnsupportedOperation`.
    Unsupported,
    /// Fails immediately with `BindingError::TransportUnavailable`.
    Stub,
    /// One asynchronous transport call bridged into a `Pending`.
    Bridged,
}

/// Decides how `method` of `service` is bound under `profile`.
///
/// ## Errors
///
/// Returns `GeneratorError::Unsupported` when the method's pattern is outside
/// the profile's capabilities and the profile's policy is
/// [`UnsupportedPolicy::Reject`].
pub fn plan(
    service: &ServiceDef,
    method: &MethodDef,
    profile: &TransportProfile,
) -> Result<BindingKind, GeneratorError> {
    let kind = if !profile.supports(method.pattern) {
        match profile.unsupported {
            UnsupportedPolicy::EmitFailing => BindingKind::Unsupported,
            UnsupportedPolicy::Reject => {
                return Err(GeneratorError::Unsupported {
                    method: format!("{}.{}", service.name, method.name),
                    pattern: method.pattern,
                    profile: profile.name.clone(),
                });
            }
        }
    } else {
        match profile.dispatch {
            DispatchStrategy::Stub => BindingKind::Stub,
            DispatchStrategy::CallbackBridge => BindingKind::Bridged,
        }
    };

    debug!(
        service = %service.name,
        method = %method.name,
        pattern = %method.pattern,
        profile = %profile.name,
        binding = ?kind,
        "planned binding"
    );
    Ok(kind)
}

/// Generates `impl Service for ServiceProfile` for one profile.
pub fn generate_binding_impl(
    service: &ServiceDef,
    profile: &TransportProfile,
    schema: &Schema,
) -> Result<TokenStream, GeneratorError> {
    let trait_name = pascal_ident(&service.name)?;
    let client = client_ident(service, profile)?;

    let methods = service
        .methods
        .iter()
        .map(|method| generate_method(service, method, profile, schema))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        impl #trait_name for #client {
            #(#methods)*
        }
    })
}

fn generate_method(
    service: &ServiceDef,
    method: &MethodDef,
    profile: &TransportProfile,
    schema: &Schema,
) -> Result<TokenStream, GeneratorError> {
    let kind = plan(service, method, profile)?;
    let signature = Signature::of(method, schema, kind != BindingKind::Bridged)?;
    let name = &method.name;

    let body = match kind {
        BindingKind::Unsupported => {
            let pattern = pattern_tokens(method.pattern);
            quote! { clientgen::unsupported(#name, #pattern, Self::PROFILE) }
        }
        BindingKind::Stub => quote! { clientgen::unavailable(#name) },
        BindingKind::Bridged => bridged_body(method, profile, &signature)?,
    };

    let signature = signature.to_tokens();
    Ok(quote! {
        #signature {
            #body
        }
    })
}

/// `self.config.call(..).segment(..).param(..).json_body(..).dispatch(..)`
fn bridged_body(
    method: &MethodDef,
    profile: &TransportProfile,
    signature: &Signature,
) -> Result<TokenStream, GeneratorError> {
    let name = &method.name;
    let verb = match profile.http_verb(method) {
        HttpVerb::Get => quote! { clientgen::HttpVerb::Get },
        HttpVerb::Post => quote! { clientgen::HttpVerb::Post },
    };

    let base = &profile.base_segments;
    let segment = profile.segment_for(method);
    let params = signature
        .path_params
        .iter()
        .map(|p| borrow(&p.ident, p.pass));
    let body = signature.request.as_ref().map(|request| {
        let arg = borrow(&request.ident, request.pass);
        quote! { .json_body(#arg) }
    });

    let decode = match &method.response {
        Some(ty) => {
            let ty = owned_type(ty)?;
            quote! { clientgen::decode_json::<#ty> }
        }
        None => quote! { clientgen::discard },
    };

    Ok(quote! {
        self.config
            .call(#name, #verb)
            #(.segment(#base))*
            .segment(#segment)
            #(.param(#params))*
            #body
            .dispatch(#decode)
    })
}

fn pattern_tokens(pattern: CallPattern) -> TokenStream {
    let variant = format_ident!("{}", format!("{:?}", pattern));
    quote! { clientgen::CallPattern::#variant }
}
