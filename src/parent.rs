use std::collections::BTreeMap;

use kube::core::{DynamicObject, GroupVersionKind, Resource};
use serde::Serialize;

use crate::error::KustpatchResult;

/// Splits `apiVersion` into group and version.
/// Core resources have only a version, so the group is empty.
#[must_use]
pub fn parse_api_version(api_version: &str) -> (String, String) {
    match api_version.split_once('/') {
        Some((group, version)) => (String::from(group), String::from(version)),
        None => (String::new(), String::from(api_version)),
    }
}

/// The resource on which behalf kustomization is customized.
///
/// Everything here is read-only. Missing metadata
/// is returned as empty strings.
pub trait ParentResource {
    fn gvk(&self) -> GroupVersionKind;
    fn object_name(&self) -> String;
    fn object_namespace(&self) -> String;
    fn object_uid(&self) -> String;
    fn object_labels(&self) -> BTreeMap<String, String>;
    /// Whole object as an untyped tree.
    fn unstructured_content(&self) -> KustpatchResult<serde_json::Value>;
}

impl ParentResource for DynamicObject {
    fn gvk(&self) -> GroupVersionKind {
        let Some(types) = &self.types else {
            return GroupVersionKind::gvk("", "", "");
        };
        let (group, version) = parse_api_version(&types.api_version);
        GroupVersionKind::gvk(&group, &version, &types.kind)
    }

    fn object_name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }

    fn object_namespace(&self) -> String {
        self.metadata.namespace.clone().unwrap_or_default()
    }

    fn object_uid(&self) -> String {
        self.metadata.uid.clone().unwrap_or_default()
    }

    fn object_labels(&self) -> BTreeMap<String, String> {
        self.metadata.labels.clone().unwrap_or_default()
    }

    fn unstructured_content(&self) -> KustpatchResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Adapter for statically typed resources,
/// such as the ones generated by `#[derive(CustomResource)]`.
#[derive(Debug, Clone, Copy)]
pub struct TypedParent<'a, K>(pub &'a K);

impl<K> ParentResource for TypedParent<'_, K>
where
    K: Resource<DynamicType = ()> + Serialize,
{
    fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()))
    }

    fn object_name(&self) -> String {
        self.0.meta().name.clone().unwrap_or_default()
    }

    fn object_namespace(&self) -> String {
        self.0.meta().namespace.clone().unwrap_or_default()
    }

    fn object_uid(&self) -> String {
        self.0.meta().uid.clone().unwrap_or_default()
    }

    fn object_labels(&self) -> BTreeMap<String, String> {
        self.0.meta().labels.clone().unwrap_or_default()
    }

    fn unstructured_content(&self) -> KustpatchResult<serde_json::Value> {
        Ok(serde_json::to_value(self.0)?)
    }
}
