//! Models generated from the Kubernetes OpenAPI spec (`meta/v1`).

use gybe_model::{resource, OrderedMap};

resource! {
    /// ObjectMeta is metadata that all persisted resources must have, which includes all objects
    /// users must create.
    pub struct ObjectMeta {
        required {}
        optional {
            /// Unstructured key value map stored with a resource that may be set by external tools.
            annotations: OrderedMap<String> => "annotations",
            finalizers: Vec<String> => "finalizers",
            /// Optional prefix used by the server to generate a unique name.
            generate_name: String => "generateName",
            /// Map of string keys and values that can be used to organize and categorize objects.
            labels: OrderedMap<String> => "labels",
            name: String => "name",
            namespace: String => "namespace",
            owner_references: Vec<OwnerReference> => "ownerReferences",
        }
    }
}

resource! {
    /// OwnerReference contains enough information to let you identify an owning object.
    pub struct OwnerReference {
        required {
            api_version: String => "apiVersion",
            kind: String => "kind",
            name: String => "name",
            uid: String => "uid",
        }
        optional {
            block_owner_deletion: bool => "blockOwnerDeletion",
            controller: bool => "controller",
        }
    }
}

resource! {
    /// ListMeta describes metadata that synthetic resources must have.
    pub struct ListMeta {
        required {}
        optional {
            /// Set when the server truncated the list; pass back to continue listing.
            continue_: String => "continue",
            remaining_item_count: i64 => "remainingItemCount",
            resource_version: String => "resourceVersion",
            self_link: String => "selfLink",
        }
    }
}

resource! {
    /// A label selector is a label query over a set of resources. An empty label selector matches
    /// all objects.
    pub struct LabelSelector {
        required {}
        optional {
            match_expressions: Vec<LabelSelectorRequirement> => "matchExpressions",
            /// Map of {key,value} pairs, each equivalent to an `In` requirement.
            match_labels: OrderedMap<String> => "matchLabels",
        }
    }
}

resource! {
    /// A label selector requirement is a selector that contains values, a key, and an operator
    /// that relates the key and values.
    pub struct LabelSelectorRequirement {
        required {
            key: String => "key",
            /// One of `In`, `NotIn`, `Exists` and `DoesNotExist`.
            operator: String => "operator",
        }
        optional {
            values: Vec<String> => "values",
        }
    }
}
