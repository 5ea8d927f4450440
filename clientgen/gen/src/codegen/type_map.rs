//! Schema type references as Rust types.

use clientgen_define::{Schema, TypeRef};
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::errors::GeneratorError;
use crate::naming::pascal_ident;

/// How a value is passed into a generated method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassBy {
    /// `&str` or `&Message`
    Ref,
    /// Scalars and generated enums, which are `Copy`.
    Value,
}

/// The owned Rust type for `ty`: `String`, `u32`, `Entry`, ...
pub fn owned_type(ty: &TypeRef) -> Result<TokenStream, GeneratorError> {
    Ok(match ty {
        TypeRef::String => quote! { ::std::string::String },
        TypeRef::Bool => quote! { bool },
        TypeRef::I32 => quote! { i32 },
        TypeRef::I64 => quote! { i64 },
        TypeRef::U32 => quote! { u32 },
        TypeRef::U64 => quote! { u64 },
        TypeRef::F32 => quote! { f32 },
        TypeRef::F64 => quote! { f64 },
        TypeRef::Named(name) => {
            let ident = pascal_ident(name)?;
            quote! { #ident }
        }
    })
}

/// The parameter type for `ty` and how the argument is passed.
pub fn param_type(ty: &TypeRef, schema: &Schema) -> Result<(TokenStream, PassBy), GeneratorError> {
    match ty {
        TypeRef::String => Ok((quote! { &str }, PassBy::Ref)),
        TypeRef::Named(_) if !schema.is_enum(ty) => {
            let owned = owned_type(ty)?;
            Ok((quote! { &#owned }, PassBy::Ref))
        }
        _ => Ok((owned_type(ty)?, PassBy::Value)),
    }
}

/// A reference to a parameter, suitable for `&P` arguments.
pub fn borrow(ident: &Ident, pass: PassBy) -> TokenStream {
    match pass {
        PassBy::Ref => quote! { #ident },
        PassBy::Value => quote! { &#ident },
    }
}

/// Names of every schema type referenced by `types`, sorted and deduplicated.
pub fn referenced_names<'a>(types: impl IntoIterator<Item = &'a TypeRef>) -> Vec<&'a str> {
    let mut names: Vec<&str> = types
        .into_iter()
        .filter_map(TypeRef::referenced_name)
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_schema;
    use quote::format_ident;

    #[test]
    fn scalars_map_to_primitives() {
        assert_eq!(owned_type(&TypeRef::U64).unwrap().to_string(), "u64");
        assert_eq!(owned_type(&TypeRef::String).unwrap().to_string(), ":: std :: string :: String");
        assert_eq!(
            owned_type(&TypeRef::named("Entry")).unwrap().to_string(),
            "Entry"
        );
    }

    #[test]
    fn messages_and_strings_are_borrowed() {
        let schema = make_schema(vec![]);

        let (ty, pass) = param_type(&TypeRef::named("Entry"), &schema).unwrap();
        assert_eq!(ty.to_string(), "& Entry");
        assert_eq!(pass, PassBy::Ref);

        let (ty, pass) = param_type(&TypeRef::String, &schema).unwrap();
        assert_eq!(ty.to_string(), "& str");
        assert_eq!(pass, PassBy::Ref);
    }

    #[test]
    fn enums_and_scalars_are_copied() {
        let schema = make_schema(vec![]);

        let (ty, pass) = param_type(&TypeRef::named("Entry2"), &schema).unwrap();
        assert_eq!(ty.to_string(), "Entry2");
        assert_eq!(pass, PassBy::Value);

        let (_, pass) = param_type(&TypeRef::I32, &schema).unwrap();
        assert_eq!(pass, PassBy::Value);
    }

    #[test]
    fn borrow_adds_reference_for_values() {
        let id = format_ident!("id");
        assert_eq!(borrow(&id, PassBy::Value).to_string(), "& id");
        assert_eq!(borrow(&id, PassBy::Ref).to_string(), "id");
    }

    #[test]
    fn referenced_names_are_unique() {
        let types = [
            TypeRef::named("Entry"),
            TypeRef::U32,
            TypeRef::named("Entry2"),
            TypeRef::named("Entry"),
        ];
        assert_eq!(referenced_names(&types), vec!["Entry", "Entry2"]);
    }
}
