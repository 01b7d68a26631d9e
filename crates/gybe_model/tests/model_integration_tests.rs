//! Integration tests for schema declarations.

use gybe_model::{
    resource, ApiObject, Field, FieldValue, IntOrString, IntoManifest, Mapping, OrderedMap, Resource,
    Value,
};

resource! {
    /// A backend reference with a reserved-word field.
    pub struct Backend {
        required {
            service: String => "service",
        }
        optional {
            port: IntOrString => "port",
            type_: String => "type",
            continue_: bool => "continue",
        }
    }
}

resource! {
    /// A route object.
    pub struct Route => "example.com/v1", "Route" {
        required {
            host: String => "host",
        }
        optional {
            backends: Vec<Backend> => "backends",
            labels: OrderedMap<String> => "labels",
            extra: Value => "extra",
        }
    }
}

resource! {
    /// Everything optional.
    pub struct Knobs {
        required {}
        optional {
            replicas: i32 => "replicas",
            ratio: f64 => "ratio",
        }
    }
}

#[test]
fn test_descriptor_table_order() {
    let names: Vec<&str> = Backend::FIELDS.iter().map(|f| f.wire_name).collect();
    assert_eq!(names, vec!["service", "port", "type", "continue"]);

    let required: Vec<bool> = Backend::FIELDS.iter().map(|f| f.required).collect();
    assert_eq!(required, vec![true, false, false, false]);
}

#[test]
fn test_reserved_word_fields_are_renamed() {
    let renamed: Vec<(&str, &str)> = Backend::FIELDS
        .iter()
        .filter(|f| f.is_renamed())
        .map(|f| (f.name, f.wire_name))
        .collect();

    assert_eq!(renamed, vec![("type_", "type"), ("continue_", "continue")]);
}

#[test]
fn test_new_leaves_optionals_absent() {
    let backend = Backend::new("api");

    assert_eq!(backend.service, "api");
    assert!(backend.port.is_absent());
    assert!(backend.type_.is_absent());

    let absent: Vec<&str> = backend
        .fields()
        .into_iter()
        .filter(|f| f.is_absent())
        .map(|f| f.wire_name)
        .collect();
    assert_eq!(absent, vec!["port", "type", "continue"]);
}

#[test]
fn test_builder_sets_present() {
    let backend = Backend::new("api").port(8080).type_("ClusterIP");

    assert_eq!(backend.port, Field::Present(IntOrString::Int(8080)));
    assert_eq!(backend.type_.get().map(String::as_str), Some("ClusterIP"));
}

#[test]
fn test_explicit_null_is_kept() {
    let mut backend = Backend::new("api");
    backend.port = Field::Null;

    let entries = backend.fields();
    assert!(matches!(entries[1].value, FieldValue::Null));
}

#[test]
fn test_api_object_identity() {
    let route = Route::new("shop.example.com");

    assert_eq!(Route::API_VERSION, "example.com/v1");
    assert_eq!(Route::KIND, "Route");
    assert_eq!(route.api_version, "example.com/v1");
    assert_eq!(route.kind, "Route");

    let names: Vec<&str> = route.fields().iter().map(|f| f.wire_name).collect();
    assert_eq!(names, vec!["apiVersion", "kind", "host", "backends", "labels", "extra"]);
}

#[test]
fn test_nested_views() {
    let route = Route::new("shop.example.com")
        .backends(vec![Backend::new("a"), Backend::new("b").port("http")])
        .extra(Value::Mapping(Mapping::new().with("x", 1)));

    let entries = route.fields();
    match &entries[3].value {
        FieldValue::Sequence(items) => {
            assert_eq!(items.len(), 2);
            match &items[1] {
                FieldValue::Resource(r) => assert_eq!(r.schema_name(), "Backend"),
                other => panic!("unexpected view: {:?}", other),
            }
        }
        other => panic!("unexpected view: {:?}", other),
    }
    assert!(matches!(entries[5].value, FieldValue::Dynamic(_)));
}

#[test]
fn test_all_optional_type() {
    let knobs = Knobs::new();
    assert!(knobs.fields().iter().all(|f| f.is_absent()));

    let knobs = Knobs::new().replicas(2).ratio(0.5);
    assert!(knobs.fields().iter().all(|f| !f.is_absent()));
}

#[test]
fn test_typed_resources_into_manifest() {
    let manifest = vec![Route::new("a"), Route::new("b")].into_manifest().unwrap();
    assert_eq!(manifest.kinds(), vec!["Route", "Route"]);
}
