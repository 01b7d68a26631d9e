//! Rendering of producer output into YAML manifests.

use gybe_model::{IntoManifest, Manifest, Resource, Value};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::encode;
use crate::error::{TranspileError, TranspileResult};
use crate::serializer;

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Turns resources into YAML documents.
///
/// A transpiler only holds its render config, so it is cheap to clone and can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    config: RenderConfig,
}

impl Transpiler {
    /// Create a transpiler with the default render config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Serialize a single resource into its plain value tree.
    pub fn serialize(&self, resource: &dyn Resource) -> TranspileResult<Value> {
        serializer::to_value(resource)
    }

    /// Render one resource as a single YAML document, without separators.
    pub fn render_document(&self, resource: &dyn Resource) -> TranspileResult<String> {
        let value = self.serialize(resource)?;
        encode::to_yaml(&value)
    }

    /// Render every resource of a manifest, joined by `---` separators.
    ///
    /// Nothing is returned unless every document rendered. An empty manifest
    /// renders to the empty string.
    pub fn render_manifest(&self, manifest: &Manifest) -> TranspileResult<String> {
        if manifest.is_empty() {
            debug!("Empty manifest, nothing to render");
            return Ok(String::new());
        }

        let documents = manifest
            .iter()
            .map(|resource| self.render_document(resource))
            .collect::<TranspileResult<Vec<_>>>()?;

        let mut output = self.preamble();
        output.push_str(&documents.join(DOCUMENT_SEPARATOR));

        info!("Rendered manifest with {} document(s)", documents.len());
        Ok(output)
    }

    /// Render producer output: one resource, a sequence, or a dynamic value.
    pub fn render(&self, output: impl IntoManifest) -> TranspileResult<String> {
        let manifest = output.into_manifest()?;
        self.render_manifest(&manifest)
    }

    /// Render producer output as pretty JSON.
    ///
    /// A single resource becomes an object, anything else an array.
    pub fn render_json(&self, output: impl IntoManifest) -> TranspileResult<String> {
        let single = output.is_single();
        let manifest = output.into_manifest()?;

        let mut values = manifest
            .iter()
            .map(|resource| self.serialize(resource))
            .collect::<TranspileResult<Vec<_>>>()?;

        let value = match values.pop() {
            Some(value) if single && values.is_empty() => value,
            last => {
                values.extend(last);
                Value::Sequence(values)
            }
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Invoke a nullary producer once and render its output.
    pub fn transpile<M, E, F>(&self, producer: F) -> Result<String, E>
    where
        M: IntoManifest,
        E: From<TranspileError>,
        F: FnOnce() -> Result<M, E>,
    {
        let output = producer()?;
        Ok(self.render(output)?)
    }

    /// Wrap a producer so that calling it yields YAML text.
    ///
    /// The returned function takes the producer's argument unchanged. Producer
    /// errors are passed through as is.
    pub fn wrap<A, M, E, F>(self, producer: F) -> impl Fn(A) -> Result<String, E>
    where
        M: IntoManifest,
        E: From<TranspileError>,
        F: Fn(A) -> Result<M, E>,
    {
        move |args| {
            let output = producer(args)?;
            Ok(self.render(output)?)
        }
    }

    fn preamble(&self) -> String {
        let mut preamble = String::new();

        if let Some(header) = &self.config.header {
            for line in header.lines() {
                if line.is_empty() {
                    preamble.push_str("#\n");
                } else {
                    preamble.push_str("# ");
                    preamble.push_str(line);
                    preamble.push('\n');
                }
            }
        }

        if self.config.explicit_document_start {
            preamble.push_str(DOCUMENT_SEPARATOR);
        }

        preamble
    }
}

/// Wrap a producer with a default [`Transpiler`].
pub fn transpiler<A, M, E, F>(producer: F) -> impl Fn(A) -> Result<String, E>
where
    M: IntoManifest,
    E: From<TranspileError>,
    F: Fn(A) -> Result<M, E>,
{
    Transpiler::new().wrap(producer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gybe_model::{DynamicObject, Mapping, ModelError};

    fn widget(name: &str) -> DynamicObject {
        DynamicObject::new("example.com/v1", "Widget").with("name", name)
    }

    #[test]
    fn test_render_single() {
        let yaml = Transpiler::new().render(widget("a")).unwrap();
        assert_eq!(yaml, "apiVersion: example.com/v1\nkind: Widget\nname: a\n");
    }

    #[test]
    fn test_yaml11_bool_words_stay_strings() {
        let yaml = Transpiler::new().render(widget("on").with("debug", "no")).unwrap();
        assert_eq!(
            yaml,
            "apiVersion: example.com/v1\nkind: Widget\nname: 'on'\ndebug: 'no'\n"
        );
    }

    #[test]
    fn test_render_sequence() {
        let yaml = Transpiler::new()
            .render(vec![widget("a"), widget("b")])
            .unwrap();

        let documents: Vec<&str> = yaml.split(DOCUMENT_SEPARATOR).collect();
        assert_eq!(documents.len(), 2);
        assert!(documents[0].ends_with("name: a\n"));
        assert!(documents[1].ends_with("name: b\n"));
    }

    #[test]
    fn test_empty_manifest() {
        let config = RenderConfig::new().header("x").explicit_document_start(true);
        let yaml = Transpiler::with_config(config)
            .render(Vec::<DynamicObject>::new())
            .unwrap();
        assert_eq!(yaml, "");
    }

    #[test]
    fn test_preamble() {
        let config = RenderConfig::new()
            .header("generated by gybe\n\ndo not edit")
            .explicit_document_start(true);
        let yaml = Transpiler::with_config(config).render(widget("a")).unwrap();

        assert!(yaml.starts_with("# generated by gybe\n#\n# do not edit\n---\napiVersion:"));
    }

    #[test]
    fn test_dynamic_type_mismatch() {
        let err = Transpiler::new().render(Value::from(42)).unwrap_err();

        match err {
            TranspileError::Model(ModelError::TypeMismatch { found }) => {
                assert_eq!(found, "integer 42")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_mapping_renders() {
        let body = Mapping::new()
            .with("apiVersion", "v1")
            .with("kind", "ConfigMap")
            .with("data", Mapping::new().with("k", "v"));

        let yaml = Transpiler::new().render(Value::Mapping(body)).unwrap();
        assert_eq!(yaml, "apiVersion: v1\nkind: ConfigMap\ndata:\n  k: v\n");
    }

    #[test]
    fn test_render_json_single_and_many() {
        let transpiler = Transpiler::new();

        let single: serde_json::Value =
            serde_json::from_str(&transpiler.render_json(widget("a")).unwrap()).unwrap();
        assert_eq!(single["name"], "a");

        let many: serde_json::Value =
            serde_json::from_str(&transpiler.render_json(vec![widget("a")]).unwrap()).unwrap();
        assert_eq!(many.as_array().map(Vec::len), Some(1));

        let none: serde_json::Value = serde_json::from_str(
            &transpiler.render_json(Vec::<DynamicObject>::new()).unwrap(),
        )
        .unwrap();
        assert_eq!(none, serde_json::json!([]));
    }

    #[test]
    fn test_transpile_passes_producer_error() {
        let result: Result<String, TranspileError> = Transpiler::new()
            .transpile(|| -> Result<DynamicObject, TranspileError> {
                Err(TranspileError::unserializable("here", "producer failed"))
            });

        assert!(result.unwrap_err().to_string().contains("producer failed"));
    }

    #[test]
    fn test_wrap_forwards_arguments() {
        let render = transpiler(|count: usize| -> TranspileResult<Vec<DynamicObject>> {
            Ok((0..count).map(|i| widget(&format!("w{}", i))).collect())
        });

        let yaml = render(3).unwrap();
        assert_eq!(yaml.matches("kind: Widget").count(), 3);
        assert_eq!(render(0).unwrap(), "");
    }
}
