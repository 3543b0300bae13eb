use crate::{error::KustpatchResult, kustomize::Kustomization, parent::ParentResource};

use super::KustomizationPatcher;

/// Copies labels of the parent to `commonLabels`, so every
/// rendered resource has them.
///
/// Also adds `<group>/name`, `<group>/uid` and,
/// for namespaced parents, `<group>/namespace`.
/// Parent's own labels win on collisions.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelPropagator;

impl LabelPropagator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KustomizationPatcher for LabelPropagator {
    fn patch(&self, parent: &dyn ParentResource, k: &mut Kustomization) -> KustpatchResult<()> {
        let group = parent.gvk().group;
        let name = parent.object_name();
        let labels = k.common_labels.get_or_insert_with(Default::default);
        if !parent.object_namespace().is_empty() {
            // Resource packs have always stored the name here.
            labels.insert(format!("{group}/namespace"), name.clone());
        }
        labels.insert(format!("{group}/name"), name);
        labels.insert(format!("{group}/uid"), parent.object_uid());
        labels.extend(parent.object_labels());
        tracing::debug!("Kustomization has {} common labels", labels.len());
        Ok(())
    }
}
