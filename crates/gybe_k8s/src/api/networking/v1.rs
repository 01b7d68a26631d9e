//! Models generated from the Kubernetes OpenAPI spec (`networking.k8s.io/v1`).

#![allow(clippy::upper_case_acronyms)]

use gybe_model::{resource, IntOrString};

use crate::api::core::v1::TypedLocalObjectReference;
use crate::meta::v1::{LabelSelector, ObjectMeta};

resource! {
    /// IPBlock describes a particular CIDR (Ex. "192.168.1.0/24","2001:db8::/64") that is
    /// allowed to the pods matched by a NetworkPolicySpec's podSelector.
    pub struct IPBlock {
        required {
            cidr: String => "cidr",
        }
        optional {
            /// CIDRs that should not be included within the block. Values outside the `cidr`
            /// range are rejected.
            except: Vec<String> => "except",
        }
    }
}

// Ingress

resource! {
    /// Ingress is a collection of rules that allow inbound connections to reach the endpoints
    /// defined by a backend.
    pub struct Ingress => "networking.k8s.io/v1", "Ingress" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: IngressSpec => "spec",
        }
    }
}

resource! {
    /// IngressSpec describes the Ingress the user wishes to exist.
    pub struct IngressSpec {
        required {}
        optional {
            default_backend: IngressBackend => "defaultBackend",
            ingress_class_name: String => "ingressClassName",
            rules: Vec<IngressRule> => "rules",
            tls: Vec<IngressTLS> => "tls",
        }
    }
}

resource! {
    /// IngressBackend describes all endpoints for a given service and port.
    pub struct IngressBackend {
        required {}
        optional {
            /// Mutually exclusive with `service`.
            resource: TypedLocalObjectReference => "resource",
            service: IngressServiceBackend => "service",
        }
    }
}

resource! {
    /// IngressServiceBackend references a Kubernetes Service as a Backend.
    pub struct IngressServiceBackend {
        required {
            /// The referenced service. The service must exist in the same namespace as the
            /// Ingress object.
            name: String => "name",
        }
        optional {
            port: ServiceBackendPort => "port",
        }
    }
}

resource! {
    /// ServiceBackendPort is the service port being referenced.
    pub struct ServiceBackendPort {
        required {}
        optional {
            /// Mutually exclusive with `number`.
            name: String => "name",
            number: i32 => "number",
        }
    }
}

resource! {
    /// IngressRule represents the rules mapping the paths under a specified host to the related
    /// backend services.
    pub struct IngressRule {
        required {}
        optional {
            host: String => "host",
            http: HTTPIngressRuleValue => "http",
        }
    }
}

resource! {
    /// HTTPIngressRuleValue is a list of http selectors pointing to backends.
    pub struct HTTPIngressRuleValue {
        required {
            paths: Vec<HTTPIngressPath> => "paths",
        }
        optional {}
    }
}

resource! {
    /// HTTPIngressPath associates a path with a backend.
    pub struct HTTPIngressPath {
        required {
            backend: IngressBackend => "backend",
            /// One of `Exact`, `Prefix` or `ImplementationSpecific`.
            path_type: String => "pathType",
        }
        optional {
            path: String => "path",
        }
    }
}

resource! {
    /// IngressTLS describes the transport layer security associated with an ingress.
    pub struct IngressTLS {
        required {}
        optional {
            hosts: Vec<String> => "hosts",
            secret_name: String => "secretName",
        }
    }
}

resource! {
    /// IngressClass represents the class of the Ingress, referenced by the Ingress Spec.
    pub struct IngressClass => "networking.k8s.io/v1", "IngressClass" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: IngressClassSpec => "spec",
        }
    }
}

resource! {
    /// IngressClassSpec provides information about the class of an Ingress.
    pub struct IngressClassSpec {
        required {}
        optional {
            /// Domain-prefixed name of the controller that should handle this class,
            /// e.g. `acme.io/ingress-controller`.
            controller: String => "controller",
            parameters: IngressClassParametersReference => "parameters",
        }
    }
}

resource! {
    /// IngressClassParametersReference identifies an API object.
    pub struct IngressClassParametersReference {
        required {
            kind: String => "kind",
            name: String => "name",
        }
        optional {
            api_group: String => "apiGroup",
            namespace: String => "namespace",
            /// `Cluster` (default) or `Namespace`.
            scope: String => "scope",
        }
    }
}

// Network policy

resource! {
    /// NetworkPolicy describes what network traffic is allowed for a set of Pods.
    pub struct NetworkPolicy => "networking.k8s.io/v1", "NetworkPolicy" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: NetworkPolicySpec => "spec",
        }
    }
}

resource! {
    /// NetworkPolicySpec provides the specification of a NetworkPolicy.
    pub struct NetworkPolicySpec {
        required {
            /// Selects the pods to which this NetworkPolicy object applies.
            pod_selector: LabelSelector => "podSelector",
        }
        optional {
            egress: Vec<NetworkPolicyEgressRule> => "egress",
            ingress: Vec<NetworkPolicyIngressRule> => "ingress",
            policy_types: Vec<String> => "policyTypes",
        }
    }
}

resource! {
    /// NetworkPolicyIngressRule describes a particular set of traffic that is allowed to the
    /// pods matched by a NetworkPolicySpec's podSelector.
    pub struct NetworkPolicyIngressRule {
        required {}
        optional {
            from: Vec<NetworkPolicyPeer> => "from",
            ports: Vec<NetworkPolicyPort> => "ports",
        }
    }
}

resource! {
    /// NetworkPolicyEgressRule describes a particular set of traffic that is allowed out of
    /// pods matched by a NetworkPolicySpec's podSelector.
    pub struct NetworkPolicyEgressRule {
        required {}
        optional {
            ports: Vec<NetworkPolicyPort> => "ports",
            to: Vec<NetworkPolicyPeer> => "to",
        }
    }
}

resource! {
    /// NetworkPolicyPeer describes a peer to allow traffic to/from.
    pub struct NetworkPolicyPeer {
        required {}
        optional {
            ip_block: IPBlock => "ipBlock",
            namespace_selector: LabelSelector => "namespaceSelector",
            pod_selector: LabelSelector => "podSelector",
        }
    }
}

resource! {
    /// NetworkPolicyPort describes a port to allow traffic on.
    pub struct NetworkPolicyPort {
        required {}
        optional {
            /// Inclusive end of a port range; requires `port` to be numeric.
            end_port: i32 => "endPort",
            port: IntOrString => "port",
            protocol: String => "protocol",
        }
    }
}
