use crate::{error::KustpatchResult, kustomize::Kustomization, parent::ParentResource};

use super::KustomizationPatcher;

/// Uses `<name>-` of the parent as kustomization's name prefix.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamePrefixer;

impl NamePrefixer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KustomizationPatcher for NamePrefixer {
    fn patch(&self, parent: &dyn ParentResource, k: &mut Kustomization) -> KustpatchResult<()> {
        k.name_prefix = format!("{}-", parent.object_name());
        tracing::debug!("Name prefix is set to {}", k.name_prefix);
        Ok(())
    }
}

/// Uses `<namespace>-<name>-` of the parent as kustomization's name prefix.
///
/// Useful for namespaced parents, whose children are cluster-scoped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamespaceNamePrefixer;

impl NamespaceNamePrefixer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KustomizationPatcher for NamespaceNamePrefixer {
    fn patch(&self, parent: &dyn ParentResource, k: &mut Kustomization) -> KustpatchResult<()> {
        k.name_prefix = format!(
            "{}-{}-",
            parent.object_namespace(),
            parent.object_name()
        );
        tracing::debug!("Name prefix is set to {}", k.name_prefix);
        Ok(())
    }
}
