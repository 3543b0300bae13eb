use std::collections::BTreeMap;

use kube::core::GroupVersionKind;
use serde::{Deserialize, Serialize};

use crate::{error::KustpatchResult, parent::parse_api_version};

/// Name of the file, which is used by kustomize
/// as an entrypoint.
pub const KUSTOMIZATION_FILE_NAME: &str = "kustomization.yaml";

/// Subset of kustomize's `Kustomization` file which
/// is touched by patchers.
///
/// Every other field is kept in `extra` as is,
/// so the file survives parse/serialize cycle.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name_prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name_suffix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_annotations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patches_strategic_merge: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<Var>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Kustomization {
    pub fn from_yaml(source: &str) -> KustpatchResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn to_yaml(&self) -> KustpatchResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Variable which kustomize substitutes
/// in `$(NAME)` references.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Var {
    pub name: String,
    pub objref: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fieldref: Option<FieldSelector>,
}

/// Kustomize spells the key in lowercase.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    #[serde(
        rename = "fieldpath",
        alias = "fieldPath",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub field_path: String,
}

/// Reference to the object, that holds the variable value.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl Target {
    /// Group, version and kind of the target.
    ///
    /// `apiVersion` has priority over explicit group and version.
    #[must_use]
    pub fn gvk(&self) -> GroupVersionKind {
        if self.api_version.is_empty() {
            return GroupVersionKind::gvk(&self.group, &self.version, &self.kind);
        }
        let (group, version) = if self.api_version.contains('/') {
            parse_api_version(&self.api_version)
        } else {
            (self.group.clone(), self.api_version.clone())
        };
        GroupVersionKind::gvk(&group, &version, &self.kind)
    }
}
