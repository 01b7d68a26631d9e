//! Conversion of resource graphs into plain [`Value`] trees.
//!
//! Fields are visited in declaration order. Absent fields are skipped,
//! everything else is emitted under its wire name. The resulting tree is what
//! the YAML and JSON encoders see.

use gybe_model::{FieldValue, Mapping, Resource, Value};
use tracing::debug;

use crate::error::{TranspileError, TranspileResult};

/// Serialize one resource into a mapping value.
pub fn to_value(resource: &dyn Resource) -> TranspileResult<Value> {
    let path = resource.schema_name();
    debug!("Serializing {}", path);

    serialize_resource(resource, path).map(Value::Mapping)
}

fn serialize_resource(resource: &dyn Resource, path: &str) -> TranspileResult<Mapping> {
    let entries = resource.fields();
    let mut mapping = Mapping::with_capacity(entries.len());

    for entry in entries.iter().filter(|e| !e.is_absent()) {
        let field_path = format!("{}.{}", path, entry.wire_name);
        let value = serialize_field(&entry.value, &field_path)?;
        mapping.insert(entry.wire_name, value);
    }

    Ok(mapping)
}

fn serialize_field(value: &FieldValue<'_>, path: &str) -> TranspileResult<Value> {
    match value {
        FieldValue::Absent => Err(unserializable(path, "absent marker outside a field slot")),
        FieldValue::Null => Ok(Value::Null),
        FieldValue::Bool(b) => Ok(Value::Bool(*b)),
        FieldValue::Int(i) => Ok(Value::Int(*i)),
        FieldValue::Float(x) => float(*x, path),
        FieldValue::Str(s) => Ok(Value::String((*s).to_string())),
        FieldValue::Resource(resource) => serialize_resource(*resource, path).map(Value::Mapping),
        FieldValue::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| serialize_field(item, &format!("{}[{}]", path, i)))
            .collect::<TranspileResult<Vec<_>>>()
            .map(Value::Sequence),
        FieldValue::Mapping(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, item) in entries {
                let value = serialize_field(item, &format!("{}.{}", path, key))?;
                mapping.insert(*key, value);
            }
            Ok(Value::Mapping(mapping))
        }
        FieldValue::Dynamic(value) => serialize_dynamic(value, path),
    }
}

fn serialize_dynamic(value: &Value, path: &str) -> TranspileResult<Value> {
    match value {
        Value::Float(x) => float(*x, path),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| serialize_dynamic(item, &format!("{}[{}]", path, i)))
            .collect::<TranspileResult<Vec<_>>>()
            .map(Value::Sequence),
        Value::Mapping(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, item) in entries.iter() {
                let value = serialize_dynamic(item, &format!("{}.{}", path, key))?;
                mapping.insert(key.as_str(), value);
            }
            Ok(Value::Mapping(mapping))
        }
        scalar => Ok(scalar.clone()),
    }
}

// YAML would accept .nan/.inf but JSON and the API server would not.
fn float(x: f64, path: &str) -> TranspileResult<Value> {
    if x.is_finite() {
        Ok(Value::Float(x))
    } else {
        Err(unserializable(path, format!("non-finite float {}", x)))
    }
}

fn unserializable(path: &str, reason: impl Into<String>) -> TranspileError {
    debug!("Unserializable value at {}", path);
    TranspileError::unserializable(path, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gybe_model::{resource, Field, OrderedMap};

    resource! {
        /// A node with every kind of field.
        pub struct Node {
            required {
                name: String => "name",
            }
            optional {
                weight: f64 => "weight",
                type_: String => "type",
                tags: Vec<Field<String>> => "tags",
                labels: OrderedMap<i64> => "labels",
                children: Vec<Node> => "children",
                extra: Value => "extra",
            }
        }
    }

    #[test]
    fn test_required_only() {
        let value = to_value(&Node::new("root")).unwrap();
        let mapping = value.as_mapping().unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(value.get("name").and_then(Value::as_str), Some("root"));
    }

    #[test]
    fn test_declaration_order_and_wire_names() {
        let node = Node::new("root")
            .extra(Value::from(true))
            .type_("leaf")
            .weight(1.5);
        let value = to_value(&node).unwrap();

        let keys: Vec<&str> = value.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "weight", "type", "extra"]);
    }

    #[test]
    fn test_explicit_null_is_emitted() {
        let mut node = Node::new("root");
        node.weight = Field::Null;

        let value = to_value(&node).unwrap();
        assert!(value.get("weight").unwrap().is_null());
    }

    #[test]
    fn test_nested_resources() {
        let node = Node::new("root").children(vec![
            Node::new("a").type_("leaf"),
            Node::new("b"),
        ]);
        let value = to_value(&node).unwrap();

        let children = value.get("children").and_then(Value::as_sequence).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].get("type").and_then(Value::as_str), Some("leaf"));
        assert!(children[1].get("type").is_none());
    }

    #[test]
    fn test_non_finite_float_reports_path() {
        let node = Node::new("root").children(vec![Node::new("a"), Node::new("b").weight(f64::NAN)]);

        match to_value(&node) {
            Err(TranspileError::Unserializable { path, reason }) => {
                assert_eq!(path, "Node.children[1].weight");
                assert!(reason.contains("non-finite"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_float_in_dynamic_value() {
        let node = Node::new("root").extra(Value::from(vec![Value::from(1), Value::Float(f64::INFINITY)]));

        let err = to_value(&node).unwrap_err();
        assert!(err.to_string().contains("Node.extra[1]"));
    }

    #[test]
    fn test_absent_inside_sequence_is_rejected() {
        let node = Node::new("root").tags(vec![Field::Present("a".to_string()), Field::Absent]);

        match to_value(&node) {
            Err(TranspileError::Unserializable { path, .. }) => assert_eq!(path, "Node.tags[1]"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_null_inside_sequence_is_kept() {
        let node = Node::new("root").tags(vec![Field::Null, Field::Present("b".to_string())]);
        let value = to_value(&node).unwrap();

        let tags = value.get("tags").and_then(Value::as_sequence).unwrap();
        assert!(tags[0].is_null());
        assert_eq!(tags[1].as_str(), Some("b"));
    }

    #[test]
    fn test_open_mapping_keys_unchanged() {
        let mut labels = OrderedMap::<i64>::new();
        labels.insert("zeta", 1);
        labels.insert("app.kubernetes.io/name", 2);
        labels.insert("alpha", 3);

        let value = to_value(&Node::new("root").labels(labels)).unwrap();
        let keys: Vec<&str> = value
            .get("labels")
            .and_then(Value::as_mapping)
            .unwrap()
            .keys()
            .collect();

        assert_eq!(keys, vec!["zeta", "app.kubernetes.io/name", "alpha"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let node = Node::new("root").weight(2.0);
        let before = node.clone();

        to_value(&node).unwrap();
        assert_eq!(node, before);
    }
}
