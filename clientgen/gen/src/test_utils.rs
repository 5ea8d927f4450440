//! Shared test utilities for clientgen-gen tests.

use clientgen_define::{
    CallPattern, EnumDef, FieldDef, MessageDef, MethodDef, Schema, ServiceDef, TypeRef,
};
use proc_macro2::TokenStream;

/// A one-service schema around `Entry` with the given methods.
pub fn make_schema(methods: Vec<MethodDef>) -> Schema {
    let service = methods
        .into_iter()
        .fold(ServiceDef::new("MyService"), ServiceDef::with_method);
    Schema::new(
        "test",
        vec![service],
        vec![EnumDef::new("Entry2").with_variant("A", "A").with_variant("B", "b")],
        vec![MessageDef::new("Entry").with_field(FieldDef::optional("field", TypeRef::String))],
    )
    .unwrap()
}

/// `unary`: `Entry` in, `Entry` out, one `u32` path parameter, segment `foo`.
pub fn unary_method() -> MethodDef {
    MethodDef::new("unary", CallPattern::Unary)
        .with_request(TypeRef::named("Entry"))
        .with_response(TypeRef::named("Entry"))
        .with_path_param("id", TypeRef::U32)
        .with_http_segment("foo")
}

/// Validates that generated code is syntactically correct.
///
/// ## Errors
///
/// Returns an error string if the generated code fails to parse.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<(), String> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(())
}

/// Formats generated code using prettyplease.
///
/// ## Errors
///
/// Returns an error string if the code fails to parse.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(prettyplease::unparse(&file))
}
