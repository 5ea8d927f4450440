//! Message struct generation.
//!
//! Messages become plain serde structs. Field names are converted to
//! `snake_case` and renamed back to their schema spelling on the wire.

use std::collections::HashSet;

use clientgen_define::{MessageDef, Schema, TypeRef};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use crate::codegen::type_map::owned_type;
use crate::errors::GeneratorError;
use crate::naming::{pascal_ident, snake_ident};

/// Generates the struct for `def`.
///
/// Optional fields are `Option<T>` and are omitted from the JSON when
/// `None`. Fields whose type leads back to `def` are boxed. `Default` is
/// derived only when every required field is a scalar.
pub fn generate_message(def: &MessageDef, schema: &Schema) -> Result<TokenStream, GeneratorError> {
    let name = pascal_ident(&def.name)?;
    let doc = format!(
        " {}",
        def.description
            .clone()
            .unwrap_or_else(|| format!("`{}` message.", def.name))
    );

    let mut fields = Vec::with_capacity(def.fields.len());
    for field in &def.fields {
        let ident = snake_ident(&field.name)?;
        let mut ty = owned_type(&field.ty)?;
        if reaches(schema, &field.ty, &def.name, &mut HashSet::new()) {
            ty = quote! { ::std::boxed::Box<#ty> };
        }

        let rename = (ident.unraw() != field.name).then(|| {
            let wire = &field.name;
            quote! { #[serde(rename = #wire)] }
        });

        fields.push(if field.required {
            quote! {
                #rename
                pub #ident: #ty
            }
        } else {
            quote! {
                #rename
                #[serde(default, skip_serializing_if = "::std::option::Option::is_none")]
                pub #ident: ::std::option::Option<#ty>
            }
        });
    }

    let derive_default = def
        .fields
        .iter()
        .all(|f| !f.required || f.ty.is_scalar())
        .then(|| quote! { Default, });

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq, #derive_default serde::Serialize, serde::Deserialize)]
        pub struct #name {
            #(#fields,)*
        }
    })
}

/// Returns true if a value of type `ty` can contain a `target` message.
fn reaches<'a>(
    schema: &'a Schema,
    ty: &'a TypeRef,
    target: &str,
    visited: &mut HashSet<&'a str>,
) -> bool {
    let Some(name) = ty.referenced_name() else {
        return false;
    };
    if name == target {
        return true;
    }
    if !visited.insert(name) {
        return false;
    }
    schema.message(name).is_some_and(|message| {
        message
            .fields
            .iter()
            .any(|f| reaches(schema, &f.ty, target, visited))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{format_generated_code, validate_generated_code};
    use clientgen_define::{EnumDef, FieldDef};

    fn schema_with(messages: Vec<MessageDef>) -> Schema {
        Schema::new(
            "test",
            vec![],
            vec![EnumDef::new("Availability").with_variant("IN_STOCK", "in-stock")],
            messages,
        )
        .unwrap()
    }

    #[test]
    fn optional_string_field() {
        let entry = MessageDef::new("Entry").with_field(FieldDef::optional("field", TypeRef::String));
        let schema = schema_with(vec![entry.clone()]);
        let tokens = generate_message(&entry, &schema).unwrap();
        validate_generated_code(&tokens).unwrap();
        let code = format_generated_code(&tokens).unwrap();

        assert!(code.contains("pub struct Entry"));
        assert!(code.contains("pub field: ::std::option::Option<::std::string::String>"));
        assert!(code.contains("skip_serializing_if = \"::std::option::Option::is_none\""));
        assert!(code.contains("Default"));
        assert!(!code.contains("rename"));
    }

    #[test]
    fn camel_case_fields_are_renamed() {
        let product = MessageDef::new("Product")
            .with_field(FieldDef::required("id", TypeRef::U64))
            .with_field(FieldDef::optional("unitPrice", TypeRef::F64));
        let schema = schema_with(vec![product.clone()]);
        let code = format_generated_code(&generate_message(&product, &schema).unwrap()).unwrap();

        assert!(code.contains("pub id: u64"));
        assert!(code.contains("#[serde(rename = \"unitPrice\")]"));
        assert!(code.contains("pub unit_price: ::std::option::Option<f64>"));
    }

    #[test]
    fn required_enum_field_disables_default() {
        let stock = MessageDef::new("Stock")
            .with_field(FieldDef::required("availability", TypeRef::named("Availability")));
        let schema = schema_with(vec![stock.clone()]);
        let code = format_generated_code(&generate_message(&stock, &schema).unwrap()).unwrap();

        assert!(code.contains("pub availability: Availability"));
        assert!(!code.contains("Default"));
    }

    #[test]
    fn self_reference_is_boxed() {
        let node = MessageDef::new("Node")
            .with_field(FieldDef::required("value", TypeRef::I64))
            .with_field(FieldDef::optional("next", TypeRef::named("Node")));
        let schema = schema_with(vec![node.clone()]);
        let code = format_generated_code(&generate_message(&node, &schema).unwrap()).unwrap();

        assert!(code.contains("pub next: ::std::option::Option<::std::boxed::Box<Node>>"));
    }

    #[test]
    fn mutual_reference_is_boxed() {
        let a = MessageDef::new("A").with_field(FieldDef::optional("b", TypeRef::named("B")));
        let b = MessageDef::new("B").with_field(FieldDef::optional("a", TypeRef::named("A")));
        let schema = schema_with(vec![a.clone(), b]);
        let code = format_generated_code(&generate_message(&a, &schema).unwrap()).unwrap();

        assert!(code.contains("pub b: ::std::option::Option<::std::boxed::Box<B>>"));
    }

    #[test]
    fn keyword_field_is_raw() {
        let def = MessageDef::new("Tagged").with_field(FieldDef::required("type", TypeRef::String));
        let schema = schema_with(vec![def.clone()]);
        let tokens = generate_message(&def, &schema).unwrap();
        validate_generated_code(&tokens).unwrap();

        let code = format_generated_code(&tokens).unwrap();
        assert!(code.contains("pub r#type: ::std::string::String"));
        assert!(!code.contains("rename"));
    }

    #[test]
    fn suffixed_keyword_field_keeps_wire_name() {
        let def = MessageDef::new("Scope").with_field(FieldDef::required("self", TypeRef::Bool));
        let schema = schema_with(vec![def.clone()]);
        let tokens = generate_message(&def, &schema).unwrap();
        validate_generated_code(&tokens).unwrap();

        let code = format_generated_code(&tokens).unwrap();
        assert!(code.contains("#[serde(rename = \"self\")]"));
        assert!(code.contains("pub self_: bool"));
    }
}
