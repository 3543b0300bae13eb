use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{core::DynamicObject, CustomResource};
use kustpatch::{
    crds::{Binding, Overlay},
    error::KustpatchError,
    kustomize::Kustomization,
    parent::TypedParent,
    patchers::{KustomizeOperation, NamespaceNamePrefixer, PatchOverlayGenerator, OVERLAY_FILE_NAME},
};
use pretty_assertions::assert_eq;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Serialize, Deserialize, Default, Clone, JsonSchema)]
#[kube(
    group = "database.example.org",
    version = "v1alpha1",
    kind = "PostgresInstance",
    namespaced
)]
pub struct PostgresInstanceSpec {
    pub storage_gb: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

const KUSTOMIZATION: &str = r"apiVersion: kustomize.config.k8s.io/v1beta1
kind: Kustomization
resources:
- instance.yaml
vars:
- name: INSTANCE_NAME
  objref:
    apiVersion: database.example.org/v1alpha1
    kind: PostgresInstance
    name: placeholder
  fieldref:
    fieldpath: metadata.name
";

fn overlays() -> Vec<Overlay> {
    vec![
        Overlay {
            api_version: String::from("sql.example.org/v1beta1"),
            kind: String::from("DatabaseInstance"),
            name: String::from("instance"),
            namespace: String::new(),
            bindings: vec![
                Binding::new("spec.storage_gb", "spec.forProvider.storageGB"),
                Binding::new("spec.version", "spec.forProvider.databaseVersion"),
            ],
        },
        Overlay {
            api_version: String::from("v1"),
            kind: String::from("Secret"),
            name: String::from("connection"),
            namespace: String::from("db"),
            bindings: vec![Binding::new("metadata.name", "stringData.instance")],
        },
    ]
}

fn instance() -> PostgresInstance {
    let mut instance = PostgresInstance::new(
        "orders",
        PostgresInstanceSpec {
            storage_gb: 20,
            version: None,
        },
    );
    instance.metadata = ObjectMeta {
        name: Some(String::from("orders")),
        namespace: Some(String::from("shop")),
        uid: Some(String::from("5f3c")),
        labels: Some(BTreeMap::from([(
            String::from("env"),
            String::from("staging"),
        )])),
        ..Default::default()
    };
    instance
}

#[test]
fn default_pipeline_with_typed_parent() {
    let instance = instance();
    let mut k = Kustomization::from_yaml(KUSTOMIZATION).unwrap();
    let files = KustomizeOperation::default_for(overlays())
        .apply(&TypedParent(&instance), &mut k)
        .unwrap();

    assert_eq!(k.name_prefix, "orders-");
    assert_eq!(k.vars[0].objref.name, "orders");
    assert_eq!(k.vars[0].objref.namespace, "shop");
    assert_eq!(
        k.common_labels,
        Some(BTreeMap::from([
            (String::from("database.example.org/name"), String::from("orders")),
            (String::from("database.example.org/namespace"), String::from("orders")),
            (String::from("database.example.org/uid"), String::from("5f3c")),
            (String::from("env"), String::from("staging")),
        ]))
    );
    assert_eq!(k.patches_strategic_merge, vec![String::from(OVERLAY_FILE_NAME)]);
    assert_eq!(k.resources, vec![String::from("instance.yaml")]);
    assert!(k
        .to_yaml()
        .unwrap()
        .contains("fieldpath: metadata.name"));

    assert_eq!(files.len(), 1);
    let data = String::from_utf8(files[0].data.clone()).unwrap();
    assert!(data.starts_with("---\n"));
    let documents = serde_yaml::Deserializer::from_str(&data)
        .map(serde_yaml::Value::deserialize)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(
        documents[0]["spec"]["forProvider"]["storageGB"].as_u64(),
        Some(20)
    );
    // Version is not set on the instance, so nothing is copied.
    assert_eq!(
        documents[0]["spec"]["forProvider"].get("databaseVersion"),
        None
    );
    assert_eq!(documents[1]["metadata"]["namespace"], "db");
    assert_eq!(documents[1]["stringData"]["instance"], "orders");
}

#[test]
fn custom_pipeline_with_dynamic_parent() {
    let parent: DynamicObject = serde_yaml::from_str(
        r"
apiVersion: database.example.org/v1alpha1
kind: PostgresInstance
metadata:
  name: billing
  namespace: finance
spec:
  storage_gb: 50
",
    )
    .unwrap();
    let mut k = Kustomization::default();
    let files = KustomizeOperation::new()
        .with_patcher(NamespaceNamePrefixer::new())
        .with_generator(PatchOverlayGenerator::new(overlays()))
        .apply(&parent, &mut k)
        .unwrap();
    assert_eq!(k.name_prefix, "finance-billing-");
    assert_eq!(k.common_labels, None);
    assert_eq!(files[0].name, OVERLAY_FILE_NAME);
}

#[test]
fn pipeline_stops_on_first_error() {
    let instance = instance();
    let broken = Overlay {
        bindings: vec![Binding::new("spec.storage_gb", "metadata.name.value")],
        ..overlays().remove(0)
    };
    let mut k = Kustomization::default();
    let err = KustomizeOperation::default_for(vec![broken])
        .apply(&TypedParent(&instance), &mut k)
        .unwrap_err();
    assert!(matches!(err, KustpatchError::FieldWrite { .. }));
    assert!(k.patches_strategic_merge.is_empty());
}
