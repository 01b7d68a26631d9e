//! Models generated from the Kubernetes OpenAPI spec (`core/v1`).

#![allow(clippy::upper_case_acronyms)]

use gybe_model::{resource, IntOrString, OrderedMap, Quantity};

use crate::meta::v1::{LabelSelector, ObjectMeta};

// Workloads

resource! {
    /// Pod is a collection of containers that can run on a host.
    pub struct Pod => "v1", "Pod" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: PodSpec => "spec",
        }
    }
}

resource! {
    /// PodSpec is a description of a pod.
    pub struct PodSpec {
        required {
            /// List of containers belonging to the pod. There must be at least one.
            containers: Vec<Container> => "containers",
        }
        optional {
            affinity: Affinity => "affinity",
            init_containers: Vec<Container> => "initContainers",
            /// Selector which must match a node's labels for the pod to be scheduled on that node.
            node_selector: OrderedMap<String> => "nodeSelector",
            /// One of `Always`, `OnFailure`, `Never`.
            restart_policy: String => "restartPolicy",
            security_context: PodSecurityContext => "securityContext",
            service_account_name: String => "serviceAccountName",
            termination_grace_period_seconds: i64 => "terminationGracePeriodSeconds",
            tolerations: Vec<Toleration> => "tolerations",
            volumes: Vec<Volume> => "volumes",
        }
    }
}

resource! {
    /// PodTemplateSpec describes the data a pod should have when created from a template.
    pub struct PodTemplateSpec {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: PodSpec => "spec",
        }
    }
}

resource! {
    /// A single application container that you want to run within a pod.
    pub struct Container {
        required {
            /// Name of the container specified as a DNS_LABEL. Cannot be updated.
            name: String => "name",
        }
        optional {
            /// Arguments to the entrypoint.
            args: Vec<String> => "args",
            /// Entrypoint array. Not executed within a shell.
            command: Vec<String> => "command",
            env: Vec<EnvVar> => "env",
            env_from: Vec<EnvFromSource> => "envFrom",
            image: String => "image",
            /// One of `Always`, `Never`, `IfNotPresent`.
            image_pull_policy: String => "imagePullPolicy",
            liveness_probe: Probe => "livenessProbe",
            ports: Vec<ContainerPort> => "ports",
            readiness_probe: Probe => "readinessProbe",
            resources: ResourceRequirements => "resources",
            security_context: SecurityContext => "securityContext",
            startup_probe: Probe => "startupProbe",
            volume_mounts: Vec<VolumeMount> => "volumeMounts",
            working_dir: String => "workingDir",
        }
    }
}

resource! {
    /// ContainerPort represents a network port in a single container.
    pub struct ContainerPort {
        required {
            container_port: i32 => "containerPort",
        }
        optional {
            host_ip: String => "hostIP",
            host_port: i32 => "hostPort",
            name: String => "name",
            /// Must be `UDP`, `TCP`, or `SCTP`. Defaults to `TCP`.
            protocol: String => "protocol",
        }
    }
}

resource! {
    /// EnvVar represents an environment variable present in a Container.
    pub struct EnvVar {
        required {
            name: String => "name",
        }
        optional {
            value: String => "value",
            value_from: EnvVarSource => "valueFrom",
        }
    }
}

resource! {
    /// EnvVarSource represents a source for the value of an EnvVar.
    pub struct EnvVarSource {
        required {}
        optional {
            config_map_key_ref: ConfigMapKeySelector => "configMapKeyRef",
            field_ref: ObjectFieldSelector => "fieldRef",
            secret_key_ref: SecretKeySelector => "secretKeyRef",
        }
    }
}

resource! {
    /// Selects a key from a ConfigMap.
    pub struct ConfigMapKeySelector {
        required {
            key: String => "key",
        }
        optional {
            name: String => "name",
            optional: bool => "optional",
        }
    }
}

resource! {
    /// SecretKeySelector selects a key of a Secret.
    pub struct SecretKeySelector {
        required {
            key: String => "key",
        }
        optional {
            name: String => "name",
            optional: bool => "optional",
        }
    }
}

resource! {
    /// ObjectFieldSelector selects an APIVersioned field of an object.
    pub struct ObjectFieldSelector {
        required {
            /// Path of the field to select in the specified API version.
            field_path: String => "fieldPath",
        }
        optional {
            api_version: String => "apiVersion",
        }
    }
}

resource! {
    /// EnvFromSource represents the source of a set of ConfigMaps or Secrets.
    pub struct EnvFromSource {
        required {}
        optional {
            config_map_ref: ConfigMapEnvSource => "configMapRef",
            prefix: String => "prefix",
            secret_ref: SecretEnvSource => "secretRef",
        }
    }
}

resource! {
    /// ConfigMapEnvSource selects a ConfigMap to populate the environment variables with.
    pub struct ConfigMapEnvSource {
        required {}
        optional {
            name: String => "name",
            optional: bool => "optional",
        }
    }
}

resource! {
    /// SecretEnvSource selects a Secret to populate the environment variables with.
    pub struct SecretEnvSource {
        required {}
        optional {
            name: String => "name",
            optional: bool => "optional",
        }
    }
}

// Probes and security

resource! {
    /// Probe describes a health check to be performed against a container.
    pub struct Probe {
        required {}
        optional {
            exec: ExecAction => "exec",
            failure_threshold: i32 => "failureThreshold",
            http_get: HTTPGetAction => "httpGet",
            initial_delay_seconds: i32 => "initialDelaySeconds",
            period_seconds: i32 => "periodSeconds",
            success_threshold: i32 => "successThreshold",
            tcp_socket: TCPSocketAction => "tcpSocket",
            timeout_seconds: i32 => "timeoutSeconds",
        }
    }
}

resource! {
    /// ExecAction describes a "run in container" action.
    pub struct ExecAction {
        required {}
        optional {
            command: Vec<String> => "command",
        }
    }
}

resource! {
    /// HTTPGetAction describes an action based on HTTP Get requests.
    pub struct HTTPGetAction {
        required {
            /// Name or number of the port to access on the container.
            port: IntOrString => "port",
        }
        optional {
            host: String => "host",
            http_headers: Vec<HTTPHeader> => "httpHeaders",
            path: String => "path",
            scheme: String => "scheme",
        }
    }
}

resource! {
    /// HTTPHeader describes a custom header to be used in HTTP probes.
    pub struct HTTPHeader {
        required {
            name: String => "name",
            value: String => "value",
        }
        optional {}
    }
}

resource! {
    /// TCPSocketAction describes an action based on opening a socket.
    pub struct TCPSocketAction {
        required {
            port: IntOrString => "port",
        }
        optional {
            host: String => "host",
        }
    }
}

resource! {
    /// ResourceRequirements describes the compute resource requirements.
    pub struct ResourceRequirements {
        required {}
        optional {
            limits: OrderedMap<Quantity> => "limits",
            requests: OrderedMap<Quantity> => "requests",
        }
    }
}

resource! {
    /// VolumeResourceRequirements describes the storage resource requirements for a volume.
    pub struct VolumeResourceRequirements {
        required {}
        optional {
            limits: OrderedMap<Quantity> => "limits",
            requests: OrderedMap<Quantity> => "requests",
        }
    }
}

resource! {
    /// SecurityContext holds security configuration that will be applied to a container.
    pub struct SecurityContext {
        required {}
        optional {
            allow_privilege_escalation: bool => "allowPrivilegeEscalation",
            capabilities: Capabilities => "capabilities",
            privileged: bool => "privileged",
            read_only_root_filesystem: bool => "readOnlyRootFilesystem",
            run_as_group: i64 => "runAsGroup",
            run_as_non_root: bool => "runAsNonRoot",
            run_as_user: i64 => "runAsUser",
        }
    }
}

resource! {
    /// Adds and removes POSIX capabilities from running containers.
    pub struct Capabilities {
        required {}
        optional {
            add: Vec<String> => "add",
            drop: Vec<String> => "drop",
        }
    }
}

resource! {
    /// PodSecurityContext holds pod-level security attributes and common container settings.
    pub struct PodSecurityContext {
        required {}
        optional {
            fs_group: i64 => "fsGroup",
            run_as_group: i64 => "runAsGroup",
            run_as_non_root: bool => "runAsNonRoot",
            run_as_user: i64 => "runAsUser",
        }
    }
}

resource! {
    /// The pod this Toleration is attached to tolerates any taint that matches the triple
    /// `<key,value,effect>` using the matching operator.
    pub struct Toleration {
        required {}
        optional {
            effect: String => "effect",
            key: String => "key",
            operator: String => "operator",
            toleration_seconds: i64 => "tolerationSeconds",
            value: String => "value",
        }
    }
}

// Scheduling

resource! {
    /// Affinity is a group of affinity scheduling rules.
    pub struct Affinity {
        required {}
        optional {
            pod_affinity: PodAffinity => "podAffinity",
            pod_anti_affinity: PodAntiAffinity => "podAntiAffinity",
        }
    }
}

resource! {
    /// Pod affinity is a group of inter pod affinity scheduling rules.
    pub struct PodAffinity {
        required {}
        optional {
            preferred_during_scheduling_ignored_during_execution: Vec<WeightedPodAffinityTerm> =>
                "preferredDuringSchedulingIgnoredDuringExecution",
            required_during_scheduling_ignored_during_execution: Vec<PodAffinityTerm> =>
                "requiredDuringSchedulingIgnoredDuringExecution",
        }
    }
}

resource! {
    /// Pod anti affinity is a group of inter pod anti affinity scheduling rules.
    pub struct PodAntiAffinity {
        required {}
        optional {
            preferred_during_scheduling_ignored_during_execution: Vec<WeightedPodAffinityTerm> =>
                "preferredDuringSchedulingIgnoredDuringExecution",
            required_during_scheduling_ignored_during_execution: Vec<PodAffinityTerm> =>
                "requiredDuringSchedulingIgnoredDuringExecution",
        }
    }
}

resource! {
    /// Defines a set of pods that this pod should be co-located (affinity) or not co-located
    /// (anti-affinity) with.
    pub struct PodAffinityTerm {
        required {
            topology_key: String => "topologyKey",
        }
        optional {
            label_selector: LabelSelector => "labelSelector",
            namespaces: Vec<String> => "namespaces",
        }
    }
}

resource! {
    /// The weights of all of the matched WeightedPodAffinityTerm fields are added per-node to
    /// find the most preferred node(s).
    pub struct WeightedPodAffinityTerm {
        required {
            pod_affinity_term: PodAffinityTerm => "podAffinityTerm",
            /// In the range 1-100.
            weight: i32 => "weight",
        }
        optional {}
    }
}

// Volumes

resource! {
    /// Volume represents a named volume in a pod.
    pub struct Volume {
        required {
            name: String => "name",
        }
        optional {
            config_map: ConfigMapVolumeSource => "configMap",
            empty_dir: EmptyDirVolumeSource => "emptyDir",
            host_path: HostPathVolumeSource => "hostPath",
            persistent_volume_claim: PersistentVolumeClaimVolumeSource => "persistentVolumeClaim",
            secret: SecretVolumeSource => "secret",
        }
    }
}

resource! {
    /// VolumeMount describes a mounting of a Volume within a container.
    pub struct VolumeMount {
        required {
            mount_path: String => "mountPath",
            name: String => "name",
        }
        optional {
            read_only: bool => "readOnly",
            sub_path: String => "subPath",
        }
    }
}

resource! {
    /// Adapts a ConfigMap into a volume.
    pub struct ConfigMapVolumeSource {
        required {}
        optional {
            default_mode: i32 => "defaultMode",
            items: Vec<KeyToPath> => "items",
            name: String => "name",
            optional: bool => "optional",
        }
    }
}

resource! {
    /// Adapts a Secret into a volume.
    pub struct SecretVolumeSource {
        required {}
        optional {
            default_mode: i32 => "defaultMode",
            items: Vec<KeyToPath> => "items",
            optional: bool => "optional",
            secret_name: String => "secretName",
        }
    }
}

resource! {
    /// Maps a string key to a path within a volume.
    pub struct KeyToPath {
        required {
            key: String => "key",
            path: String => "path",
        }
        optional {
            mode: i32 => "mode",
        }
    }
}

resource! {
    /// Represents an empty directory for a pod.
    pub struct EmptyDirVolumeSource {
        required {}
        optional {
            medium: String => "medium",
            size_limit: Quantity => "sizeLimit",
        }
    }
}

resource! {
    /// Represents a host path mapped into a pod.
    pub struct HostPathVolumeSource {
        required {
            path: String => "path",
        }
        optional {
            type_: String => "type",
        }
    }
}

resource! {
    /// References the user's PVC in the same namespace.
    pub struct PersistentVolumeClaimVolumeSource {
        required {
            claim_name: String => "claimName",
        }
        optional {
            read_only: bool => "readOnly",
        }
    }
}

// Storage

resource! {
    /// PersistentVolumeClaim is a user's request for and claim to a persistent volume.
    pub struct PersistentVolumeClaim => "v1", "PersistentVolumeClaim" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: PersistentVolumeClaimSpec => "spec",
        }
    }
}

resource! {
    /// PersistentVolumeClaimSpec describes the common attributes of storage devices and allows a
    /// Source for provider-specific attributes.
    pub struct PersistentVolumeClaimSpec {
        required {}
        optional {
            access_modes: Vec<String> => "accessModes",
            resources: VolumeResourceRequirements => "resources",
            selector: LabelSelector => "selector",
            storage_class_name: String => "storageClassName",
            volume_mode: String => "volumeMode",
            volume_name: String => "volumeName",
        }
    }
}

resource! {
    /// PersistentVolume is a storage resource provisioned by an administrator.
    pub struct PersistentVolume => "v1", "PersistentVolume" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: PersistentVolumeSpec => "spec",
        }
    }
}

resource! {
    /// PersistentVolumeSpec is the specification of a persistent volume.
    pub struct PersistentVolumeSpec {
        required {}
        optional {
            access_modes: Vec<String> => "accessModes",
            capacity: OrderedMap<Quantity> => "capacity",
            host_path: HostPathVolumeSource => "hostPath",
            persistent_volume_reclaim_policy: String => "persistentVolumeReclaimPolicy",
            storage_class_name: String => "storageClassName",
            volume_mode: String => "volumeMode",
        }
    }
}

// Services and configuration

resource! {
    /// Service is a named abstraction of software service consisting of a local port that the
    /// proxy listens on, and the selector that determines which pods will answer requests.
    pub struct Service => "v1", "Service" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: ServiceSpec => "spec",
        }
    }
}

resource! {
    /// ServiceSpec describes the attributes that a user creates on a service.
    pub struct ServiceSpec {
        required {}
        optional {
            cluster_ip: String => "clusterIP",
            external_traffic_policy: String => "externalTrafficPolicy",
            ports: Vec<ServicePort> => "ports",
            selector: OrderedMap<String> => "selector",
            session_affinity: String => "sessionAffinity",
            /// One of `ExternalName`, `ClusterIP`, `NodePort`, and `LoadBalancer`.
            type_: String => "type",
        }
    }
}

resource! {
    /// ServicePort contains information on service's port.
    pub struct ServicePort {
        required {
            port: i32 => "port",
        }
        optional {
            app_protocol: String => "appProtocol",
            name: String => "name",
            node_port: i32 => "nodePort",
            protocol: String => "protocol",
            target_port: IntOrString => "targetPort",
        }
    }
}

resource! {
    /// Secret holds secret data of a certain type.
    pub struct Secret => "v1", "Secret" {
        required {}
        optional {
            /// Base64 encoded values.
            data: OrderedMap<String> => "data",
            immutable: bool => "immutable",
            metadata: ObjectMeta => "metadata",
            /// Write-only convenience field; merged into `data` by the server.
            string_data: OrderedMap<String> => "stringData",
            type_: String => "type",
        }
    }
}

resource! {
    /// ConfigMap holds configuration data for pods to consume.
    pub struct ConfigMap => "v1", "ConfigMap" {
        required {}
        optional {
            binary_data: OrderedMap<String> => "binaryData",
            data: OrderedMap<String> => "data",
            immutable: bool => "immutable",
            metadata: ObjectMeta => "metadata",
        }
    }
}

resource! {
    /// Namespace provides a scope for Names.
    pub struct Namespace => "v1", "Namespace" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
        }
    }
}

resource! {
    /// ServiceAccount binds together a name, a principal that can be authenticated and
    /// authorized, and a set of secrets.
    pub struct ServiceAccount => "v1", "ServiceAccount" {
        required {}
        optional {
            automount_service_account_token: bool => "automountServiceAccountToken",
            metadata: ObjectMeta => "metadata",
        }
    }
}

resource! {
    /// TypedLocalObjectReference contains enough information to let you locate the typed
    /// referenced object inside the same namespace.
    pub struct TypedLocalObjectReference {
        required {
            kind: String => "kind",
            name: String => "name",
        }
        optional {
            api_group: String => "apiGroup",
        }
    }
}
