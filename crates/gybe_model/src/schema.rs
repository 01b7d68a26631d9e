//! Field descriptors and the resource contract.
//!
//! Every resource type carries a static table of [`FieldDescriptor`]s in
//! declaration order. At serialization time the table is zipped with borrowed
//! [`FieldValue`] views of the instance, so consumers can walk any resource
//! graph without knowing the concrete types.

use std::fmt;

use crate::field::Field;
use crate::value::{OrderedMap, Value};

/// Static metadata for one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust identifier of the field.
    pub name: &'static str,
    /// Name emitted in the document.
    pub wire_name: &'static str,
    pub required: bool,
}

impl FieldDescriptor {
    pub const fn required(name: &'static str, wire_name: &'static str) -> Self {
        Self {
            name,
            wire_name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, wire_name: &'static str) -> Self {
        Self {
            name,
            wire_name,
            required: false,
        }
    }

    /// Whether the emitted name differs from the Rust identifier.
    pub fn is_renamed(&self) -> bool {
        self.name != self.wire_name
    }
}

/// A borrowed view of a field value.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// The field is not set and must be omitted.
    Absent,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'a str),
    Resource(&'a dyn Resource),
    Sequence(Vec<FieldValue<'a>>),
    Mapping(Vec<(&'a str, FieldValue<'a>)>),
    Dynamic(&'a Value),
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("Absent"),
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Bool(b) => write!(f, "Bool({})", b),
            FieldValue::Int(i) => write!(f, "Int({})", i),
            FieldValue::Float(x) => write!(f, "Float({})", x),
            FieldValue::Str(s) => write!(f, "Str({:?})", s),
            FieldValue::Resource(r) => write!(f, "Resource({})", r.schema_name()),
            FieldValue::Sequence(items) => f.debug_list().entries(items).finish(),
            FieldValue::Mapping(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(k, v)| (k, v)))
                .finish(),
            FieldValue::Dynamic(value) => write!(f, "Dynamic({:?})", value),
        }
    }
}

/// One field of a resource instance: its descriptor data plus its value.
#[derive(Debug, Clone)]
pub struct FieldEntry<'a> {
    pub name: &'a str,
    pub wire_name: &'a str,
    pub required: bool,
    pub value: FieldValue<'a>,
}

impl<'a> FieldEntry<'a> {
    pub fn from_descriptor(descriptor: &'static FieldDescriptor, value: FieldValue<'a>) -> Self {
        Self {
            name: descriptor.name,
            wire_name: descriptor.wire_name,
            required: descriptor.required,
            value,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self.value, FieldValue::Absent)
    }
}

/// A schema object that can be walked field by field.
pub trait Resource: fmt::Debug + Send + Sync {
    /// Name of the schema type, e.g. `Deployment`.
    fn schema_name(&self) -> &str;

    /// All declared fields in declaration order, absent ones included.
    fn fields(&self) -> Vec<FieldEntry<'_>>;
}

/// A top-level object addressable by the API server.
pub trait ApiObject: Resource {
    const API_VERSION: &'static str;
    const KIND: &'static str;
}

/// Conversion of a field's storage type into a [`FieldValue`] view.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

impl<T: ToFieldValue> ToFieldValue for Field<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Field::Absent => FieldValue::Absent,
            Field::Null => FieldValue::Null,
            Field::Present(value) => value.to_field_value(),
        }
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int((*self).into())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Dynamic(self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue> ToFieldValue for OrderedMap<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Mapping(
            self.iter()
                .map(|(k, v)| (k.as_str(), v.to_field_value()))
                .collect(),
        )
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for Box<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_rename() {
        assert!(FieldDescriptor::optional("type_", "type").is_renamed());
        assert!(FieldDescriptor::required("api_version", "apiVersion").is_renamed());
        assert!(!FieldDescriptor::required("name", "name").is_renamed());
    }

    #[test]
    fn test_field_views() {
        let absent: Field<String> = Field::Absent;
        assert!(matches!(absent.to_field_value(), FieldValue::Absent));

        let null: Field<String> = Field::Null;
        assert!(matches!(null.to_field_value(), FieldValue::Null));

        let present = Field::Present(vec![1i32, 2]);
        match present.to_field_value() {
            FieldValue::Sequence(items) => {
                assert_eq!(items.len(), 2);
                assert!(matches!(items[1], FieldValue::Int(2)));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_open_mapping_view_keeps_insertion_order() {
        let labels = OrderedMap::<String>::new()
            .with("zeta", "1")
            .with("alpha", "2");

        match labels.to_field_value() {
            FieldValue::Mapping(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, vec!["zeta", "alpha"]);
                assert!(matches!(entries[0].1, FieldValue::Str("1")));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_mapping_view() {
        let payload = crate::value::Mapping::new().with("b", 1).with("a", true);

        match payload.to_field_value() {
            FieldValue::Mapping(entries) => {
                assert_eq!(entries[0].0, "b");
                assert!(matches!(entries[1].1, FieldValue::Dynamic(Value::Bool(true))));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
