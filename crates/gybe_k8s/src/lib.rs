//! # gybe_k8s
//!
//! Kubernetes schema types for gybe.
//!
//! The types in this crate mirror the Kubernetes OpenAPI spec. They carry no
//! behavior beyond construction: every type is declared with
//! [`gybe_model::resource!`], which provides the `new` constructor for
//! required fields, same-named builder methods for optional fields, and the
//! descriptor table the transpiler walks.
//!
//! Modules follow the API group layout (`api::core::v1`, `api::apps::v1`,
//! `meta::v1`, ...). The most commonly used types are re-exported at the
//! crate root.
//!
//! ## Example
//!
//! ```rust
//! use gybe_k8s::{Container, ContainerPort, ObjectMeta, Pod, PodSpec};
//!
//! let pod = Pod::new()
//!     .metadata(ObjectMeta::new().name("web"))
//!     .spec(PodSpec::new(vec![Container::new("web")
//!         .image("nginx:1.25")
//!         .ports(vec![ContainerPort::new(80)])]));
//!
//! assert_eq!(pod.kind, "Pod");
//! ```

pub mod api;
pub mod meta;

pub use gybe_model::{ApiObject, Field, IntOrString, OrderedMap, Quantity, Resource};

pub use crate::api::apps::v1::{
    DaemonSet, DaemonSetSpec, Deployment, DeploymentSpec, DeploymentStrategy,
    RollingUpdateDeployment, StatefulSet, StatefulSetSpec,
};
pub use crate::api::batch::v1::{CronJob, CronJobSpec, Job, JobSpec, JobTemplateSpec};
pub use crate::api::core::v1::{
    Affinity, ConfigMap, Container, ContainerPort, EnvFromSource, EnvVar, EnvVarSource,
    HTTPGetAction, Namespace, ObjectFieldSelector, PersistentVolume, PersistentVolumeClaim,
    PersistentVolumeClaimSpec, PersistentVolumeSpec, Pod, PodAffinityTerm, PodAntiAffinity,
    PodSpec, PodTemplateSpec, Probe, ResourceRequirements, Secret, SecretEnvSource,
    SecretKeySelector, SecretVolumeSource, SecurityContext, Service, ServiceAccount, ServicePort,
    ServiceSpec, Volume, VolumeMount, VolumeResourceRequirements, WeightedPodAffinityTerm,
};
pub use crate::api::networking::v1::{
    IPBlock, Ingress, IngressBackend, IngressServiceBackend, IngressSpec, NetworkPolicy,
    NetworkPolicySpec, ServiceBackendPort,
};
pub use crate::meta::v1::{LabelSelector, LabelSelectorRequirement, ObjectMeta};
