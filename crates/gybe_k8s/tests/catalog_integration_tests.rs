//! Integration tests for the generated catalog.

use std::collections::HashSet;

use gybe_k8s::api::apps::v1::RollingUpdateDeployment;
use gybe_k8s::api::core::v1::HostPathVolumeSource;
use gybe_k8s::meta::v1::ListMeta;
use gybe_k8s::*;
use gybe_model::{FieldDescriptor, FieldValue};

fn all_tables() -> Vec<(&'static str, &'static [FieldDescriptor])> {
    vec![
        ("ObjectMeta", ObjectMeta::FIELDS),
        ("LabelSelector", LabelSelector::FIELDS),
        ("ListMeta", ListMeta::FIELDS),
        ("Pod", Pod::FIELDS),
        ("PodSpec", PodSpec::FIELDS),
        ("Container", Container::FIELDS),
        ("Service", Service::FIELDS),
        ("ServiceSpec", ServiceSpec::FIELDS),
        ("Secret", Secret::FIELDS),
        ("ConfigMap", ConfigMap::FIELDS),
        ("Deployment", Deployment::FIELDS),
        ("DeploymentSpec", DeploymentSpec::FIELDS),
        ("DeploymentStrategy", DeploymentStrategy::FIELDS),
        ("StatefulSetSpec", StatefulSetSpec::FIELDS),
        ("Job", Job::FIELDS),
        ("CronJobSpec", CronJobSpec::FIELDS),
        ("Ingress", Ingress::FIELDS),
        ("IPBlock", IPBlock::FIELDS),
        ("NetworkPolicySpec", NetworkPolicySpec::FIELDS),
    ]
}

#[test]
fn test_wire_names_are_unique_per_type() {
    for (name, table) in all_tables() {
        let mut seen = HashSet::new();
        for field in table {
            assert!(
                seen.insert(field.wire_name),
                "duplicate wire name {} on {}",
                field.wire_name,
                name
            );
        }
    }
}

#[test]
fn test_api_objects_lead_with_identity() {
    let objects: Vec<(&[FieldDescriptor], &str, &str)> = vec![
        (Pod::FIELDS, Pod::API_VERSION, Pod::KIND),
        (Deployment::FIELDS, Deployment::API_VERSION, Deployment::KIND),
        (Job::FIELDS, Job::API_VERSION, Job::KIND),
        (Ingress::FIELDS, Ingress::API_VERSION, Ingress::KIND),
        (Secret::FIELDS, Secret::API_VERSION, Secret::KIND),
    ];

    for (table, api_version, kind) in objects {
        assert_eq!(table[0].wire_name, "apiVersion", "{}", kind);
        assert_eq!(table[1].wire_name, "kind", "{}", kind);
        assert!(table[0].required && table[1].required);
        assert!(!api_version.is_empty());
    }

    assert_eq!(Deployment::API_VERSION, "apps/v1");
    assert_eq!(Ingress::API_VERSION, "networking.k8s.io/v1");
    assert_eq!(Pod::API_VERSION, "v1");
}

#[test]
fn test_reserved_words_use_wire_name() {
    let reserved: Vec<&FieldDescriptor> = [
        DeploymentStrategy::FIELDS,
        ServiceSpec::FIELDS,
        Secret::FIELDS,
        HostPathVolumeSource::FIELDS,
        ListMeta::FIELDS,
    ]
    .iter()
    .flat_map(|table| table.iter())
    .filter(|f| f.name.ends_with('_'))
    .collect();

    assert_eq!(reserved.len(), 5);
    for field in reserved {
        assert_eq!(field.name.trim_end_matches('_'), field.wire_name);
    }
}

#[test]
fn test_constructor_fills_identity() {
    let deployment = Deployment::new();
    assert_eq!(deployment.api_version, "apps/v1");
    assert_eq!(deployment.kind, "Deployment");
    assert!(deployment.metadata.is_absent());
    assert!(deployment.spec.is_absent());
}

#[test]
fn test_required_fields_lead_spec_tables() {
    let names: Vec<&str> = DeploymentSpec::FIELDS.iter().map(|f| f.wire_name).collect();
    assert_eq!(&names[..2], &["selector", "template"]);
    assert!(DeploymentSpec::FIELDS[..2].iter().all(|f| f.required));
    assert!(DeploymentSpec::FIELDS[2..].iter().all(|f| !f.required));
}

#[test]
fn test_nested_construction() {
    let labels = OrderedMap::<String>::from([("app", "web")]);

    let spec = DeploymentSpec::new(
        LabelSelector::new().match_labels(labels.clone()),
        PodTemplateSpec::new()
            .metadata(ObjectMeta::new().labels(labels))
            .spec(PodSpec::new(vec![Container::new("web").image("nginx")])),
    )
    .replicas(2)
    .strategy(
        DeploymentStrategy::new().type_("RollingUpdate").rolling_update(
            RollingUpdateDeployment::new()
                .max_surge("25%")
                .max_unavailable(0),
        ),
    );

    assert_eq!(spec.replicas, Field::Present(2));
    let fields = spec.fields();
    assert!(matches!(fields[0].value, FieldValue::Resource(_)));
    assert_eq!(
        fields.iter().filter(|f| !f.is_absent()).count(),
        4,
        "selector, template, replicas and strategy are set"
    );
}

#[test]
fn test_quantities_in_resource_requirements() {
    let limits = OrderedMap::<Quantity>::new()
        .with("memory", Quantity::parse("128Mi").unwrap())
        .with("cpu", Quantity::parse("500m").unwrap());

    let resources = ResourceRequirements::new().limits(limits);
    let limits = resources.limits.get().unwrap();
    assert_eq!(limits.get("cpu").map(Quantity::as_str), Some("500m"));
    assert_eq!(limits.keys().collect::<Vec<_>>(), vec!["memory", "cpu"]);
}
