//! The validated schema.
//!
//! [`Schema`] is the only way the generator sees services, enums and
//! messages. Its fields are private and it can only be obtained through
//! [`Schema::new`] (or deserialization, which goes through the same
//! checks), so every `Schema` value satisfies the model's invariants.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::enums::EnumDef;
use crate::error::SchemaError;
use crate::message::MessageDef;
use crate::naming::{to_pascal_case, to_snake_case};
use crate::types::{CallPattern, MethodDef, ServiceDef, TypeRef};

/// Parameter name reserved for the request payload in generated methods.
const REQUEST_PARAM: &str = "request";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeKind {
    Enum,
    Message,
    Service,
}

/// A validated collection of services, enums and messages.
///
/// ## Errors
///
/// [`Schema::new`] returns:
/// - [`SchemaError::DuplicateName`] when two types, two methods of a service,
///   two enum constants or wire values, two message fields or two path
///   parameters share a name
/// - [`SchemaError::InvalidReference`] when a [`TypeRef::Named`] does not
///   resolve to an enum or message, or a path parameter references a message
/// - [`SchemaError::PatternMismatch`] when a method's request/response types
///   do not fit its [`CallPattern`]
///
/// ## Examples
///
/// ```
/// use clientgen_define::{CallPattern, MethodDef, Schema, SchemaError, ServiceDef, TypeRef};
///
/// let service = ServiceDef::new("MyService").with_method(
///     MethodDef::new("unknownReturn", CallPattern::Unary)
///         .with_response(TypeRef::named("Missing")),
/// );
///
/// let err = Schema::new("test", vec![service], vec![], vec![]).unwrap_err();
/// assert!(matches!(err, SchemaError::InvalidReference { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef")]
pub struct Schema {
    package: String,
    services: Vec<ServiceDef>,
    enums: Vec<EnumDef>,
    messages: Vec<MessageDef>,
}

/// Unvalidated wire form of [`Schema`].
#[derive(Deserialize)]
struct SchemaDef {
    package: String,
    #[serde(default)]
    services: Vec<ServiceDef>,
    #[serde(default)]
    enums: Vec<EnumDef>,
    #[serde(default)]
    messages: Vec<MessageDef>,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = SchemaError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        Schema::new(def.package, def.services, def.enums, def.messages)
    }
}

impl Schema {
    /// Validates and assembles a schema.
    pub fn new(
        package: impl Into<String>,
        services: Vec<ServiceDef>,
        enums: Vec<EnumDef>,
        messages: Vec<MessageDef>,
    ) -> Result<Self, SchemaError> {
        let schema = Self {
            package: package.into(),
            services,
            enums,
            messages,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// The schema's package name (e.g. "test").
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn services(&self) -> &[ServiceDef] {
        &self.services
    }

    pub fn enums(&self) -> &[EnumDef] {
        &self.enums
    }

    pub fn messages(&self) -> &[MessageDef] {
        &self.messages
    }

    pub fn service(&self, name: &str) -> Option<&ServiceDef> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn message(&self, name: &str) -> Option<&MessageDef> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Returns true if `ty` names an enum of this schema.
    pub fn is_enum(&self, ty: &TypeRef) -> bool {
        ty.referenced_name()
            .is_some_and(|name| self.enum_def(name).is_some())
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let kinds = self.type_namespace()?;

        for def in &self.enums {
            def.validate()?;
        }

        for message in &self.messages {
            let mut fields = HashSet::new();
            for field in &message.fields {
                if !fields.insert(to_snake_case(&field.name)) {
                    return Err(SchemaError::duplicate(
                        format!("field in message {}", message.name),
                        &field.name,
                    ));
                }
                resolve(
                    &kinds,
                    &field.ty,
                    || format!("{}.{}", message.name, field.name),
                    false,
                )?;
            }
        }

        for service in &self.services {
            let mut methods = HashSet::new();
            for method in &service.methods {
                if !methods.insert(to_snake_case(&method.name)) {
                    return Err(SchemaError::duplicate(
                        format!("method in service {}", service.name),
                        &method.name,
                    ));
                }
                validate_method(&kinds, service, method)?;
            }
        }

        Ok(())
    }

    /// Enums, messages and services share one namespace in generated code,
    /// compared both verbatim and as `PascalCase` type names.
    fn type_namespace(&self) -> Result<HashMap<&str, TypeKind>, SchemaError> {
        let mut kinds = HashMap::new();
        let entries = self
            .enums
            .iter()
            .map(|e| (e.name.as_str(), TypeKind::Enum))
            .chain(
                self.messages
                    .iter()
                    .map(|m| (m.name.as_str(), TypeKind::Message)),
            )
            .chain(
                self.services
                    .iter()
                    .map(|s| (s.name.as_str(), TypeKind::Service)),
            );

        let mut idents = HashSet::new();
        for (name, kind) in entries {
            if kinds.insert(name, kind).is_some() || !idents.insert(to_pascal_case(name)) {
                return Err(SchemaError::duplicate("type", name));
            }
        }

        Ok(kinds)
    }
}

fn validate_method(
    kinds: &HashMap<&str, TypeKind>,
    service: &ServiceDef,
    method: &MethodDef,
) -> Result<(), SchemaError> {
    let qualified = format!("{}.{}", service.name, method.name);

    if let Some(reason) = pattern_violation(method) {
        return Err(SchemaError::PatternMismatch {
            method: qualified,
            pattern: method.pattern,
            reason: reason.to_string(),
        });
    }

    if let Some(request) = &method.request {
        resolve(kinds, request, || format!("{qualified} request"), false)?;
    }
    if let Some(response) = &method.response {
        resolve(kinds, response, || format!("{qualified} response"), false)?;
    }

    let mut params = HashSet::new();
    for param in &method.path_params {
        let ident = to_snake_case(&param.name);
        if ident == REQUEST_PARAM || !params.insert(ident) {
            return Err(SchemaError::duplicate(
                format!("path parameter in method {qualified}"),
                &param.name,
            ));
        }
        resolve(kinds, &param.ty, || format!("{qualified} {}", param.name), true)?;
    }

    Ok(())
}

fn pattern_violation(method: &MethodDef) -> Option<&'static str> {
    let has_request = method.request.is_some();
    let has_response = method.response.is_some();

    match method.pattern {
        CallPattern::FireAndForget if has_response => Some("must not declare a response"),
        CallPattern::ClientStreaming | CallPattern::BidiStreaming if !has_request => {
            Some("must declare a request")
        }
        CallPattern::ServerStreaming | CallPattern::BidiStreaming if !has_response => {
            Some("must declare a response")
        }
        _ => None,
    }
}

fn resolve(
    kinds: &HashMap<&str, TypeKind>,
    ty: &TypeRef,
    referrer: impl FnOnce() -> String,
    path_param: bool,
) -> Result<(), SchemaError> {
    let Some(name) = ty.referenced_name() else {
        return Ok(());
    };

    match kinds.get(name) {
        Some(TypeKind::Enum) => Ok(()),
        Some(TypeKind::Message) if !path_param => Ok(()),
        _ => Err(SchemaError::invalid_reference(referrer(), name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::FieldDef;

    fn entry() -> MessageDef {
        MessageDef::new("Entry").with_field(FieldDef::optional("field", TypeRef::String))
    }

    fn entry2() -> EnumDef {
        EnumDef::new("Entry2")
            .with_variant("A", "A")
            .with_variant("B", "B")
            .with_variant("C", "C")
    }

    fn service(methods: Vec<MethodDef>) -> ServiceDef {
        methods
            .into_iter()
            .fold(ServiceDef::new("MyService"), ServiceDef::with_method)
    }

    #[test]
    fn valid_schema_exposes_definitions() {
        let schema = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unary", CallPattern::Unary)
                    .with_request(TypeRef::named("Entry"))
                    .with_response(TypeRef::named("Entry"))
                    .with_path_param("id", TypeRef::U32),
            ])],
            vec![entry2()],
            vec![entry()],
        )
        .unwrap();

        assert_eq!(schema.package(), "test");
        assert!(schema.service("MyService").is_some());
        assert!(schema.enum_def("Entry2").is_some());
        assert!(schema.message("Entry").is_some());
        assert!(schema.is_enum(&TypeRef::named("Entry2")));
        assert!(!schema.is_enum(&TypeRef::named("Entry")));
    }

    #[test]
    fn duplicate_method_names_are_rejected() {
        let err = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unknown", CallPattern::FireAndForget),
                MethodDef::new("unknown", CallPattern::Unary),
            ])],
            vec![],
            vec![],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateName {
                scope: "method in service MyService".to_string(),
                name: "unknown".to_string(),
            }
        );
    }

    #[test]
    fn methods_colliding_after_snake_case_are_rejected() {
        let err = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unknownReturn", CallPattern::Unary),
                MethodDef::new("unknown_return", CallPattern::Unary),
            ])],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName { .. }));
    }

    #[test]
    fn enum_and_message_share_a_namespace() {
        let err = Schema::new("test", vec![], vec![EnumDef::new("Entry")], vec![entry()])
            .unwrap_err();
        assert_eq!(err, SchemaError::duplicate("type", "Entry"));
    }

    #[test]
    fn type_names_colliding_as_pascal_case_are_rejected() {
        let err = Schema::new(
            "test",
            vec![],
            vec![EnumDef::new("entry_kind")],
            vec![MessageDef::new("EntryKind")],
        )
        .unwrap_err();
        assert_eq!(err, SchemaError::duplicate("type", "EntryKind"));
    }

    #[test]
    fn undefined_response_type_is_rejected() {
        let err = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unknownReturn", CallPattern::Unary)
                    .with_response(TypeRef::named("Nope")),
            ])],
            vec![],
            vec![],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::InvalidReference {
                referrer: "MyService.unknownReturn response".to_string(),
                name: "Nope".to_string(),
            }
        );
    }

    #[test]
    fn message_path_param_is_rejected() {
        let err = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unknown", CallPattern::FireAndForget)
                    .with_path_param("entry", TypeRef::named("Entry")),
            ])],
            vec![],
            vec![entry()],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidReference { name, .. } if name == "Entry"));
    }

    #[test]
    fn enum_path_param_is_accepted() {
        let schema = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("byKind", CallPattern::FireAndForget)
                    .with_path_param("kind", TypeRef::named("Entry2")),
            ])],
            vec![entry2()],
            vec![],
        );
        assert!(schema.is_ok());
    }

    #[test]
    fn reserved_and_duplicate_path_params_are_rejected() {
        let reserved = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unknown", CallPattern::FireAndForget)
                    .with_path_param("request", TypeRef::U32),
            ])],
            vec![],
            vec![],
        );
        assert!(matches!(reserved, Err(SchemaError::DuplicateName { .. })));

        let twice = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("unknown", CallPattern::FireAndForget)
                    .with_path_param("id", TypeRef::U32)
                    .with_path_param("id", TypeRef::U64),
            ])],
            vec![],
            vec![],
        );
        assert!(matches!(twice, Err(SchemaError::DuplicateName { .. })));
    }

    #[test]
    fn service_name_is_not_a_payload_type() {
        let err = Schema::new(
            "test",
            vec![service(vec![
                MethodDef::new("echo", CallPattern::Unary)
                    .with_response(TypeRef::named("MyService")),
            ])],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidReference { .. }));
    }

    #[test]
    fn pattern_shapes_are_enforced() {
        let cases = [
            MethodDef::new("a", CallPattern::FireAndForget).with_response(TypeRef::String),
            MethodDef::new("b", CallPattern::ClientStreaming).with_response(TypeRef::String),
            MethodDef::new("c", CallPattern::ServerStreaming).with_request(TypeRef::String),
            MethodDef::new("d", CallPattern::BidiStreaming).with_request(TypeRef::String),
        ];

        for method in cases {
            let name = method.name.clone();
            let err = Schema::new("test", vec![service(vec![method])], vec![], vec![])
                .unwrap_err();
            assert!(
                matches!(err, SchemaError::PatternMismatch { .. }),
                "method {name} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let message = MessageDef::new("Pair")
            .with_field(FieldDef::required("key", TypeRef::String))
            .with_field(FieldDef::optional("key", TypeRef::I64));

        let err = Schema::new("test", vec![], vec![], vec![message]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName { name, .. } if name == "key"));
    }

    #[test]
    fn deserialization_revalidates() {
        let json = r#"{
            "package": "test",
            "enums": [
                {"name": "Dup", "variants": [
                    {"name": "A", "value": "x"},
                    {"name": "B", "value": "x"}
                ]}
            ]
        }"#;

        let err = serde_json::from_str::<Schema>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate wire value"));
    }
}
