//! Ordered collections of resources returned by producers.

use std::fmt;

use crate::dynamic::DynamicObject;
use crate::error::{ModelError, ModelResult};
use crate::schema::Resource;
use crate::value::Value;

/// An ordered list of resources, rendered as one document each.
#[derive(Default)]
pub struct Manifest {
    resources: Vec<Box<dyn Resource>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Append a resource, keeping insertion order.
    pub fn push(&mut self, resource: impl Resource + 'static) {
        self.resources.push(Box::new(resource));
    }

    /// Builder-style push.
    pub fn with(mut self, resource: impl Resource + 'static) -> Self {
        self.push(resource);
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Resource> {
        self.resources.iter().map(|r| r.as_ref())
    }

    /// Schema names of the contained resources, in order.
    pub fn kinds(&self) -> Vec<&str> {
        self.iter().map(|r| r.schema_name()).collect()
    }
}

impl fmt::Debug for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manifest")
            .field("resources", &self.kinds())
            .finish()
    }
}

impl From<Vec<Box<dyn Resource>>> for Manifest {
    fn from(resources: Vec<Box<dyn Resource>>) -> Self {
        Self { resources }
    }
}

impl<R: Resource + 'static> FromIterator<R> for Manifest {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut manifest = Manifest::new();
        for resource in iter {
            manifest.push(resource);
        }
        manifest
    }
}

/// Output a producer may return: one resource or an ordered sequence.
pub trait IntoManifest {
    /// Whether the output is a single resource rather than a sequence.
    fn is_single(&self) -> bool {
        false
    }

    fn into_manifest(self) -> ModelResult<Manifest>;
}

impl<R: Resource + 'static> IntoManifest for R {
    fn is_single(&self) -> bool {
        true
    }

    fn into_manifest(self) -> ModelResult<Manifest> {
        Ok(Manifest::new().with(self))
    }
}

impl<R: Resource + 'static> IntoManifest for Vec<R> {
    fn into_manifest(self) -> ModelResult<Manifest> {
        Ok(self.into_iter().collect())
    }
}

impl IntoManifest for Vec<Box<dyn Resource>> {
    fn into_manifest(self) -> ModelResult<Manifest> {
        Ok(Manifest::from(self))
    }
}

impl IntoManifest for Box<dyn Resource> {
    fn is_single(&self) -> bool {
        true
    }

    fn into_manifest(self) -> ModelResult<Manifest> {
        Ok(Manifest::from(vec![self]))
    }
}

impl IntoManifest for Manifest {
    fn into_manifest(self) -> ModelResult<Manifest> {
        Ok(self)
    }
}

/// Dynamic output: an object mapping or a sequence of object mappings.
impl IntoManifest for Value {
    fn is_single(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    fn into_manifest(self) -> ModelResult<Manifest> {
        match self {
            Value::Mapping(body) => Ok(Manifest::new().with(DynamicObject::from_mapping(body)?)),
            Value::Sequence(items) => {
                let mut manifest = Manifest::new();
                for item in items {
                    match item {
                        Value::Mapping(body) => manifest.push(DynamicObject::from_mapping(body)?),
                        other => {
                            return Err(ModelError::TypeMismatch {
                                found: other.describe(),
                            })
                        }
                    }
                }
                Ok(manifest)
            }
            other => Err(ModelError::TypeMismatch {
                found: other.describe(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;

    fn widget(name: &str) -> DynamicObject {
        DynamicObject::new("example.com/v1", "Widget")
            .with("metadata", Mapping::new().with("name", name))
    }

    #[test]
    fn test_single_resource() {
        let output = widget("a");
        assert!(output.is_single());

        let manifest = output.into_manifest().unwrap();
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_vec_keeps_order() {
        let output = vec![widget("a"), widget("b"), widget("c")];
        assert!(!output.is_single());

        let manifest = output.into_manifest().unwrap();
        assert_eq!(manifest.kinds(), vec!["Widget", "Widget", "Widget"]);
    }

    #[test]
    fn test_dynamic_sequence() {
        let value = Value::Sequence(vec![
            Value::Mapping(Mapping::new().with("apiVersion", "v1").with("kind", "ConfigMap")),
            Value::Mapping(Mapping::new().with("apiVersion", "v1").with("kind", "Secret")),
        ]);

        let manifest = value.into_manifest().unwrap();
        assert_eq!(manifest.kinds(), vec!["ConfigMap", "Secret"]);
    }

    #[test]
    fn test_dynamic_mismatch_names_offender() {
        let value = Value::Sequence(vec![
            Value::Mapping(Mapping::new().with("apiVersion", "v1").with("kind", "ConfigMap")),
            Value::from("oops"),
        ]);

        let err = value.into_manifest().unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { ref found } if found == "string \"oops\""));
    }

    #[test]
    fn test_scalar_value_is_rejected() {
        let err = Value::Bool(true).into_manifest().unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }
}
