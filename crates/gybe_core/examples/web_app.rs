//! Render a Deployment, Service and optional Ingress for a web application.
//!
//! ```text
//! cargo run -p gybe_core --example web_app -- --name shop --image shop:2.1 --host shop.example.com
//! ```

use std::process::ExitCode;

use anyhow::bail;
use clap::Parser;
use gybe_core::cli;
use gybe_k8s::api::networking::v1::{HTTPIngressPath, HTTPIngressRuleValue, IngressRule};
use gybe_k8s::*;

#[derive(Parser, Debug)]
#[command(name = "web_app")]
#[command(about = "Render Kubernetes manifests for a web application")]
struct Args {
    /// Application name, used for every object and label
    #[arg(long)]
    name: String,

    /// Container image
    #[arg(long)]
    image: String,

    #[arg(long, default_value_t = 2)]
    replicas: i32,

    /// Container port
    #[arg(long, default_value_t = 8080)]
    port: i32,

    /// Public host name; an Ingress is rendered when set
    #[arg(long)]
    host: Option<String>,
}

fn main() -> ExitCode {
    cli::run(web_app)
}

fn web_app(args: Args) -> anyhow::Result<Vec<Box<dyn Resource>>> {
    if args.replicas < 1 {
        bail!("--replicas must be at least 1, got {}", args.replicas);
    }

    let labels = OrderedMap::<String>::from([("app", args.name.as_str())]);
    let metadata = ObjectMeta::new().name(args.name.as_str()).labels(labels.clone());

    let container = Container::new(args.name.as_str())
        .image(args.image.as_str())
        .ports(vec![ContainerPort::new(args.port).name("http")])
        .readiness_probe(Probe::new().http_get(HTTPGetAction::new("http").path("/healthz")));

    let deployment = Deployment::new().metadata(metadata.clone()).spec(
        DeploymentSpec::new(
            LabelSelector::new().match_labels(labels.clone()),
            PodTemplateSpec::new()
                .metadata(ObjectMeta::new().labels(labels.clone()))
                .spec(PodSpec::new(vec![container])),
        )
        .replicas(args.replicas),
    );

    let service = Service::new().metadata(metadata.clone()).spec(
        ServiceSpec::new()
            .selector(labels)
            .ports(vec![ServicePort::new(80).name("http").target_port("http")]),
    );

    let mut resources: Vec<Box<dyn Resource>> = vec![Box::new(deployment), Box::new(service)];

    if let Some(host) = args.host {
        let backend = IngressBackend::new().service(
            IngressServiceBackend::new(args.name.as_str())
                .port(ServiceBackendPort::new().name("http")),
        );
        let ingress = Ingress::new().metadata(metadata).spec(IngressSpec::new().rules(vec![
            IngressRule::new().host(host).http(HTTPIngressRuleValue::new(vec![
                HTTPIngressPath::new(backend, "Prefix").path("/"),
            ])),
        ]));
        resources.push(Box::new(ingress));
    }

    Ok(resources)
}
