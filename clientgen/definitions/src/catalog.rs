//! The `catalog` schema: a product catalog behind a base path.

use clientgen_define::{
    CallPattern, EnumDef, FieldDef, MessageDef, MethodDef, Schema, SchemaError, ServiceDef,
    TypeRef,
};

/// Creates the `catalog` schema.
///
/// ## Methods
///
/// | Method | Pattern | Path |
/// |--------|---------|------|
/// | getProduct | UNARY | /get-product/{id} |
/// | putProduct | UNARY | /products |
/// | deleteProduct | FIRE_AND_FORGET | /delete-product/{id} |
/// | countByAvailability | UNARY | /count-by-availability/{availability} |
/// | watchProducts | SERVER_STREAMING | - |
pub fn define_catalog_schema() -> Result<Schema, SchemaError> {
    let product = TypeRef::named("Product");

    let service = ServiceDef::new("Catalog")
        .with_description("Product catalog")
        .with_method(
            MethodDef::new("getProduct", CallPattern::Unary)
                .with_description("Fetch one product by id")
                .with_response(product.clone())
                .with_path_param("id", TypeRef::U64),
        )
        .with_method(
            MethodDef::new("putProduct", CallPattern::Unary)
                .with_description("Create or replace a product")
                .with_request(product.clone())
                .with_response(product.clone())
                .with_http_segment("products"),
        )
        .with_method(
            MethodDef::new("deleteProduct", CallPattern::FireAndForget)
                .with_path_param("id", TypeRef::U64),
        )
        .with_method(
            MethodDef::new("countByAvailability", CallPattern::Unary)
                .with_response(TypeRef::named("ProductCount"))
                .with_path_param("availability", TypeRef::named("Availability")),
        )
        .with_method(
            MethodDef::new("watchProducts", CallPattern::ServerStreaming)
                .with_description("Stream product changes")
                .with_response(product),
        );

    let availability = EnumDef::new("Availability")
        .with_description("Stock state of a product")
        .with_variant("IN_STOCK", "in-stock")
        .with_variant("BACKORDER", "backorder")
        .with_variant("DISCONTINUED", "discontinued");

    let product = MessageDef::new("Product")
        .with_field(FieldDef::required("id", TypeRef::U64))
        .with_field(FieldDef::required("name", TypeRef::String))
        .with_field(FieldDef::optional("unitPrice", TypeRef::F64))
        .with_field(FieldDef::optional(
            "availability",
            TypeRef::named("Availability"),
        ));

    let count = MessageDef::new("ProductCount").with_field(FieldDef::required("count", TypeRef::U64));

    Schema::new("catalog", vec![service], vec![availability], vec![product, count])
}
