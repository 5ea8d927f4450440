//! The `test` schema.
//!
//! `MyService` exercises every call pattern against one message and two
//! enums, so each transport profile's handling of supported and unsupported
//! methods shows up in its generated bindings.

use clientgen_define::{
    CallPattern, EnumDef, FieldDef, MessageDef, MethodDef, Schema, SchemaError, ServiceDef,
    TypeRef,
};

/// Creates the `test` schema.
///
/// ## Methods
///
/// | Method | Pattern | Request | Response | Path |
/// |--------|---------|---------|----------|------|
/// | unknown | FIRE_AND_FORGET | - | - | /unknown/{id} |
/// | unknownReturn | UNARY | - | Entry | /unknown-return/{id} |
/// | unknownArgument | FIRE_AND_FORGET | Entry | - | /unknown-argument/{id} |
/// | unary | UNARY | Entry | Entry | /foo/{id} |
/// | serverStreaming | SERVER_STREAMING | Entry | Entry | - |
/// | clientStreaming | CLIENT_STREAMING | Entry | Entry | - |
/// | bidiStreaming | BIDI_STREAMING | Entry | Entry | - |
///
/// ## Examples
///
/// ```
/// use clientgen_definitions::test_fixture::define_test_schema;
///
/// let schema = define_test_schema().unwrap();
/// assert_eq!(schema.services()[0].methods.len(), 7);
/// assert_eq!(schema.enum_def("Entry2").unwrap().value_of("C"), Some("C"));
/// ```
pub fn define_test_schema() -> Result<Schema, SchemaError> {
    let entry = TypeRef::named("Entry");

    let service = ServiceDef::new("MyService")
        .with_description("Service covering every call pattern")
        .with_method(
            MethodDef::new("unknown", CallPattern::FireAndForget)
                .with_path_param("id", TypeRef::U32),
        )
        .with_method(
            MethodDef::new("unknownReturn", CallPattern::Unary)
                .with_response(entry.clone())
                .with_path_param("id", TypeRef::U32),
        )
        .with_method(
            MethodDef::new("unknownArgument", CallPattern::FireAndForget)
                .with_request(entry.clone())
                .with_path_param("id", TypeRef::U32),
        )
        .with_method(
            MethodDef::new("unary", CallPattern::Unary)
                .with_request(entry.clone())
                .with_response(entry.clone())
                .with_path_param("id", TypeRef::U32)
                .with_http_segment("foo"),
        )
        .with_method(
            MethodDef::new("serverStreaming", CallPattern::ServerStreaming)
                .with_request(entry.clone())
                .with_response(entry.clone()),
        )
        .with_method(
            MethodDef::new("clientStreaming", CallPattern::ClientStreaming)
                .with_request(entry.clone())
                .with_response(entry.clone()),
        )
        .with_method(
            MethodDef::new("bidiStreaming", CallPattern::BidiStreaming)
                .with_request(entry.clone())
                .with_response(entry),
        );

    let entry2 = EnumDef::new("Entry2")
        .with_variant("A", "A")
        .with_variant("B", "B")
        .with_variant("C", "C");

    let root_enum = EnumDef::new("RootEnum").with_variant("FOO", "Foo");

    let message = MessageDef::new("Entry").with_field(FieldDef::optional("field", TypeRef::String));

    Schema::new("test", vec![service], vec![entry2, root_enum], vec![message])
}
