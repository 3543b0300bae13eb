use crate::{crds::Overlay, error::KustpatchResult, kustomize::Kustomization, parent::ParentResource};

pub mod labels;
pub mod overlay;
pub mod prefix;
pub mod variant;

pub use labels::LabelPropagator;
pub use overlay::{PatchOverlayGenerator, OVERLAY_FILE_NAME};
pub use prefix::{NamePrefixer, NamespaceNamePrefixer};
pub use variant::VariantFiller;

/// File which should be written next to the kustomization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Rule that mutates kustomization in place.
pub trait KustomizationPatcher {
    fn patch(&self, parent: &dyn ParentResource, k: &mut Kustomization) -> KustpatchResult<()>;
}

/// Rule that produces extra files for the kustomization.
pub trait KustomizationGenerator {
    fn generate(
        &self,
        parent: &dyn ParentResource,
        k: &mut Kustomization,
    ) -> KustpatchResult<Vec<OverlayFile>>;
}

/// Ordered set of patchers and generators.
///
/// Patchers always run before generators.
#[derive(Default)]
pub struct KustomizeOperation {
    patchers: Vec<Box<dyn KustomizationPatcher + Send + Sync>>,
    generators: Vec<Box<dyn KustomizationGenerator + Send + Sync>>,
}

impl KustomizeOperation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline that a resource pack uses by default.
    #[must_use]
    pub fn default_for(overlays: Vec<Overlay>) -> Self {
        Self::new()
            .with_patcher(VariantFiller::new())
            .with_patcher(NamePrefixer::new())
            .with_patcher(LabelPropagator::new())
            .with_generator(PatchOverlayGenerator::new(overlays))
    }

    #[must_use]
    pub fn with_patcher<P>(mut self, patcher: P) -> Self
    where
        P: KustomizationPatcher + Send + Sync + 'static,
    {
        self.patchers.push(Box::new(patcher));
        self
    }

    #[must_use]
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: KustomizationGenerator + Send + Sync + 'static,
    {
        self.generators.push(Box::new(generator));
        self
    }

    /// Runs all rules and returns files, generated along the way.
    pub fn apply(
        &self,
        parent: &dyn ParentResource,
        k: &mut Kustomization,
    ) -> KustpatchResult<Vec<OverlayFile>> {
        tracing::info!(
            "Patching kustomization for {}/{}",
            parent.object_namespace(),
            parent.object_name()
        );
        for patcher in &self.patchers {
            patcher.patch(parent, k)?;
        }
        let mut files = Vec::new();
        for generator in &self.generators {
            files.extend(generator.generate(parent, k)?);
        }
        Ok(files)
    }
}

impl std::fmt::Debug for KustomizeOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KustomizeOperation")
            .field("patchers", &self.patchers.len())
            .field("generators", &self.generators.len())
            .finish()
    }
}
