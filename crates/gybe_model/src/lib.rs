//! # gybe_model
//!
//! The resource model contract consumed by the gybe transpiler.
//!
//! Schema types are plain data: required fields are ordinary struct fields,
//! optional fields are three-state [`Field`]s, and every type publishes a
//! static table of [`FieldDescriptor`]s so its instances can be walked in
//! declaration order without runtime reflection.
//!
//! ## Features
//!
//! - **Three-state fields**: absent, explicit null, or present
//! - **Descriptor tables**: internal name, wire name and required flag per field
//! - **Ordered maps**: [`OrderedMap`] keeps open mappings in insertion order
//! - **Dynamic values**: [`Value`] trees for free-form payloads
//! - **Producer output**: [`Manifest`] and [`IntoManifest`] for one or many resources
//!
//! ## Example
//!
//! ```rust
//! use gybe_model::{resource, IntoManifest, Resource};
//!
//! resource! {
//!     /// A greeting object.
//!     pub struct Greeting => "example.com/v1", "Greeting" {
//!         required {
//!             message: String => "message",
//!         }
//!         optional {
//!             loud: bool => "loud",
//!         }
//!     }
//! }
//!
//! let greeting = Greeting::new("hello").loud(true);
//! assert_eq!(greeting.api_version, "example.com/v1");
//!
//! let manifest = vec![greeting.clone(), Greeting::new("bye")].into_manifest().unwrap();
//! assert_eq!(manifest.len(), 2);
//! ```

pub mod dynamic;
pub mod error;
pub mod field;
pub mod macros;
pub mod manifest;
pub mod scalar;
pub mod schema;
pub mod value;

pub use dynamic::DynamicObject;
pub use error::{ModelError, ModelResult};
pub use field::Field;
pub use manifest::{IntoManifest, Manifest};
pub use scalar::{IntOrString, Quantity};
pub use schema::{ApiObject, FieldDescriptor, FieldEntry, FieldValue, Resource, ToFieldValue};
pub use value::{Mapping, OrderedMap, Value};
