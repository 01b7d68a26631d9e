//! Models generated from the Kubernetes OpenAPI spec (`apps/v1`).

use gybe_model::{resource, IntOrString};

use crate::api::core::v1::{PersistentVolumeClaim, PodTemplateSpec};
use crate::meta::v1::{LabelSelector, ObjectMeta};

resource! {
    /// Deployment enables declarative updates for Pods and ReplicaSets.
    pub struct Deployment => "apps/v1", "Deployment" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: DeploymentSpec => "spec",
        }
    }
}

resource! {
    /// DeploymentSpec is the specification of the desired behavior of the Deployment.
    pub struct DeploymentSpec {
        required {
            /// Label selector for pods. Must match the pod template's labels.
            selector: LabelSelector => "selector",
            template: PodTemplateSpec => "template",
        }
        optional {
            min_ready_seconds: i32 => "minReadySeconds",
            paused: bool => "paused",
            progress_deadline_seconds: i32 => "progressDeadlineSeconds",
            replicas: i32 => "replicas",
            revision_history_limit: i32 => "revisionHistoryLimit",
            strategy: DeploymentStrategy => "strategy",
        }
    }
}

resource! {
    /// DeploymentStrategy describes how to replace existing pods with new ones.
    pub struct DeploymentStrategy {
        required {}
        optional {
            rolling_update: RollingUpdateDeployment => "rollingUpdate",
            /// Either `Recreate` or `RollingUpdate`. Default is `RollingUpdate`.
            type_: String => "type",
        }
    }
}

resource! {
    /// Spec to control the desired behavior of rolling update.
    pub struct RollingUpdateDeployment {
        required {}
        optional {
            max_surge: IntOrString => "maxSurge",
            max_unavailable: IntOrString => "maxUnavailable",
        }
    }
}

resource! {
    /// DaemonSet represents the configuration of a daemon set.
    pub struct DaemonSet => "apps/v1", "DaemonSet" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: DaemonSetSpec => "spec",
        }
    }
}

resource! {
    /// DaemonSetSpec is the specification of a daemon set.
    pub struct DaemonSetSpec {
        required {
            selector: LabelSelector => "selector",
            template: PodTemplateSpec => "template",
        }
        optional {
            min_ready_seconds: i32 => "minReadySeconds",
            revision_history_limit: i32 => "revisionHistoryLimit",
            update_strategy: DaemonSetUpdateStrategy => "updateStrategy",
        }
    }
}

resource! {
    /// DaemonSetUpdateStrategy is a struct used to control the update strategy for a DaemonSet.
    pub struct DaemonSetUpdateStrategy {
        required {}
        optional {
            rolling_update: RollingUpdateDaemonSet => "rollingUpdate",
            type_: String => "type",
        }
    }
}

resource! {
    /// Spec to control the desired behavior of daemon set rolling update.
    pub struct RollingUpdateDaemonSet {
        required {}
        optional {
            max_surge: IntOrString => "maxSurge",
            max_unavailable: IntOrString => "maxUnavailable",
        }
    }
}

resource! {
    /// StatefulSet represents a set of pods with consistent identities.
    pub struct StatefulSet => "apps/v1", "StatefulSet" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: StatefulSetSpec => "spec",
        }
    }
}

resource! {
    /// A StatefulSetSpec is the specification of a StatefulSet.
    pub struct StatefulSetSpec {
        required {
            selector: LabelSelector => "selector",
            template: PodTemplateSpec => "template",
        }
        optional {
            min_ready_seconds: i32 => "minReadySeconds",
            /// `OrderedReady` or `Parallel`.
            pod_management_policy: String => "podManagementPolicy",
            replicas: i32 => "replicas",
            revision_history_limit: i32 => "revisionHistoryLimit",
            /// Name of the governing service for this StatefulSet.
            service_name: String => "serviceName",
            update_strategy: StatefulSetUpdateStrategy => "updateStrategy",
            volume_claim_templates: Vec<PersistentVolumeClaim> => "volumeClaimTemplates",
        }
    }
}

resource! {
    /// StatefulSetUpdateStrategy indicates the strategy that the StatefulSet controller will use
    /// to perform updates.
    pub struct StatefulSetUpdateStrategy {
        required {}
        optional {
            rolling_update: RollingUpdateStatefulSetStrategy => "rollingUpdate",
            type_: String => "type",
        }
    }
}

resource! {
    /// RollingUpdateStatefulSetStrategy is used to communicate parameter for the RollingUpdate
    /// strategy type.
    pub struct RollingUpdateStatefulSetStrategy {
        required {}
        optional {
            max_unavailable: IntOrString => "maxUnavailable",
            partition: i32 => "partition",
        }
    }
}
