use serde_json::{json, Map, Value};

use crate::{
    crds::Overlay,
    error::KustpatchResult,
    kustomize::Kustomization,
    parent::ParentResource,
    utils::fields::{nested_field_copy, set_nested_field, split_path},
};

use super::{KustomizationGenerator, OverlayFile};

/// All generated overlays are stored in this file.
pub const OVERLAY_FILE_NAME: &str = "overlaypatch.yaml";

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Builds strategic merge patches out of the parent's fields.
#[derive(Debug, Default, Clone)]
pub struct PatchOverlayGenerator {
    pub overlays: Vec<Overlay>,
}

impl PatchOverlayGenerator {
    #[must_use]
    pub const fn new(overlays: Vec<Overlay>) -> Self {
        Self { overlays }
    }
}

/// Creates an object with only identity fields set.
/// Empty name and namespace are omitted.
fn overlay_object(overlay: &Overlay) -> Value {
    let mut metadata = Map::new();
    if !overlay.name.is_empty() {
        metadata.insert(String::from("name"), Value::from(overlay.name.as_str()));
    }
    if !overlay.namespace.is_empty() {
        metadata.insert(
            String::from("namespace"),
            Value::from(overlay.namespace.as_str()),
        );
    }
    let mut obj = json!({
        "apiVersion": overlay.api_version,
        "kind": overlay.kind,
    });
    if !metadata.is_empty() {
        obj["metadata"] = Value::Object(metadata);
    }
    obj
}

fn render_overlay(overlay: &Overlay, content: &Value) -> KustpatchResult<String> {
    let mut obj = overlay_object(overlay);
    for binding in &overlay.bindings {
        let Some(val) = nested_field_copy(content, &split_path(&binding.from))? else {
            tracing::debug!("Field {} is not set. Skipping binding.", binding.from);
            continue;
        };
        set_nested_field(&mut obj, val, &split_path(&binding.to))?;
    }
    Ok(serde_yaml::to_string(&obj)?)
}

impl KustomizationGenerator for PatchOverlayGenerator {
    fn generate(
        &self,
        parent: &dyn ParentResource,
        k: &mut Kustomization,
    ) -> KustpatchResult<Vec<OverlayFile>> {
        if self.overlays.is_empty() {
            return Ok(Vec::new());
        }
        let content = parent.unstructured_content()?;
        let mut patch = String::new();
        for overlay in &self.overlays {
            let document = render_overlay(overlay, &content)?;
            patch.push_str(DOCUMENT_SEPARATOR);
            patch.push_str(&document);
        }
        tracing::info!(
            "Generated {} overlays for {}",
            self.overlays.len(),
            parent.object_name()
        );
        k.patches_strategic_merge.push(String::from(OVERLAY_FILE_NAME));
        Ok(vec![OverlayFile {
            name: String::from(OVERLAY_FILE_NAME),
            data: patch.into_bytes(),
        }])
    }
}
