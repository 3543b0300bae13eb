use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Object which is generated from the parent resource
/// and applied as a strategic merge patch.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    /// `APIVersion` of the patched object.
    pub api_version: String,
    /// Kind of the patched object.
    pub kind: String,
    /// Name of the patched object.
    /// Kustomize matches it before the name prefix is applied.
    #[serde(default)]
    pub name: String,
    /// Namespace of the patched object.
    #[serde(default)]
    pub namespace: String,
    /// Values to copy from the parent resource.
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// Pair of dot-separated field paths.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq, JsonSchema)]
pub struct Binding {
    /// Path in the parent resource, e.g. `spec.region`.
    pub from: String,
    /// Path in the overlay object, e.g. `spec.forProvider.region`.
    pub to: String,
}

impl Binding {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
