//! Untyped objects for kinds outside the generated catalog.

use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::schema::{FieldEntry, FieldValue, Resource};
use crate::value::{Mapping, Value};

/// An API object held as an ordered mapping, e.g. a custom resource.
///
/// The mapping must carry string `apiVersion` and `kind` keys. Every key is
/// emitted as-is and in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicObject {
    body: Mapping,
}

impl DynamicObject {
    /// Create an object with the given `apiVersion` and `kind`.
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        let body = Mapping::new()
            .with("apiVersion", api_version.into())
            .with("kind", kind.into());
        Self { body }
    }

    /// Wrap an existing mapping, checking the identifying keys.
    pub fn from_mapping(body: Mapping) -> ModelResult<Self> {
        let kind = match body.get("kind").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => {
                return Err(ModelError::MissingField {
                    resource: "DynamicObject".to_string(),
                    field: "kind".to_string(),
                })
            }
        };
        if body.get("apiVersion").and_then(Value::as_str).is_none() {
            return Err(ModelError::MissingField {
                resource: kind,
                field: "apiVersion".to_string(),
            });
        }
        debug!("Wrapping dynamic {} object", kind);
        Ok(Self { body })
    }

    /// Builder-style field insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key, value);
        self
    }

    pub fn api_version(&self) -> &str {
        self.body
            .get("apiVersion")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn kind(&self) -> &str {
        self.body.get("kind").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn body(&self) -> &Mapping {
        &self.body
    }
}

impl TryFrom<Value> for DynamicObject {
    type Error = ModelError;

    fn try_from(value: Value) -> ModelResult<Self> {
        match value {
            Value::Mapping(body) => Self::from_mapping(body),
            other => Err(ModelError::TypeMismatch {
                found: other.describe(),
            }),
        }
    }
}

impl Resource for DynamicObject {
    fn schema_name(&self) -> &str {
        self.kind()
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        self.body
            .iter()
            .map(|(key, value)| FieldEntry {
                name: key,
                wire_name: key,
                required: key == "apiVersion" || key == "kind",
                value: FieldValue::Dynamic(value),
            })
            .collect()
    }
}
