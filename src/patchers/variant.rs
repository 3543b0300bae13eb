use crate::{error::KustpatchResult, kustomize::Kustomization, parent::ParentResource};

use super::KustomizationPatcher;

/// Points variables, that refer to the parent's kind,
/// to the parent itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct VariantFiller;

impl VariantFiller {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KustomizationPatcher for VariantFiller {
    fn patch(&self, parent: &dyn ParentResource, k: &mut Kustomization) -> KustpatchResult<()> {
        if k.vars.is_empty() {
            return Ok(());
        }
        let gvk = parent.gvk();
        for var in k.vars.iter_mut().filter(|var| var.objref.gvk() == gvk) {
            var.objref.name = parent.object_name();
            var.objref.namespace = parent.object_namespace();
            tracing::debug!("Variable {} now refers to {}", var.name, var.objref.name);
        }
        Ok(())
    }
}
