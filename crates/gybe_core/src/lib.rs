//! # gybe_core
//!
//! Transpiles typed resource graphs into Kubernetes YAML manifests.
//!
//! A producer is any function returning one resource, a sequence of
//! resources, or a dynamic [`Value`]. Wrapping it with [`transpiler`] yields
//! a function with the same argument that returns the rendered YAML:
//!
//! - One resource renders to one document
//! - A sequence renders to `---`-separated documents, in order
//! - Absent optional fields are omitted, present ones use their wire names
//! - Strings YAML 1.1 would read as booleans (`on`, `yes`, ...) are quoted
//!
//! ## Example
//!
//! ```rust
//! use gybe_core::{transpiler, TranspileError};
//! use gybe_k8s::{Container, ObjectMeta, Pod, PodSpec};
//!
//! let render = transpiler(|image: String| -> Result<Pod, TranspileError> {
//!     Ok(Pod::new()
//!         .metadata(ObjectMeta::new().name("web"))
//!         .spec(PodSpec::new(vec![Container::new("web").image(image)])))
//! });
//!
//! let yaml = render("nginx:1.25".to_string()).unwrap();
//! assert!(yaml.starts_with("apiVersion: v1\nkind: Pod\n"));
//! ```

pub mod cli;
pub mod config;
pub mod encode;
pub mod error;
pub mod serializer;
pub mod transpiler;

pub use config::RenderConfig;
pub use error::{TranspileError, TranspileResult};
pub use gybe_model::{IntoManifest, Manifest, Value};
pub use serializer::to_value;
pub use transpiler::{transpiler, Transpiler};
