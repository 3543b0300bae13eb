use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use kube::core::DynamicObject;

use crate::{
    crds::Overlay,
    error::KustpatchResult,
    kustomize::{Kustomization, KUSTOMIZATION_FILE_NAME},
    patchers::{
        KustomizeOperation, LabelPropagator, NamePrefixer, NamespaceNamePrefixer, OverlayFile,
        PatchOverlayGenerator, VariantFiller,
    },
};

pub mod args;

use args::{KustpatchArgs, PrefixMode};

/// Builds the operation out of command line flags.
#[must_use]
pub fn build_operation(args: &KustpatchArgs, overlays: Vec<Overlay>) -> KustomizeOperation {
    let mut operation = KustomizeOperation::new();
    if !args.no_vars {
        operation = operation.with_patcher(VariantFiller::new());
    }
    operation = match args.prefix {
        PrefixMode::None => operation,
        PrefixMode::Name => operation.with_patcher(NamePrefixer::new()),
        PrefixMode::NamespaceName => operation.with_patcher(NamespaceNamePrefixer::new()),
    };
    if !args.no_labels {
        operation = operation.with_patcher(LabelPropagator::new());
    }
    operation.with_generator(PatchOverlayGenerator::new(overlays))
}

fn write_file(path: &Path, data: &[u8]) -> KustpatchResult<()> {
    let output = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;
    let mut writer = BufWriter::new(output);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// Puts kustomization and generated files into a directory.
pub fn write_bundle(
    dir: &Path,
    kustomization: &Kustomization,
    files: &[OverlayFile],
) -> KustpatchResult<()> {
    std::fs::create_dir_all(dir)?;
    write_file(
        &dir.join(KUSTOMIZATION_FILE_NAME),
        kustomization.to_yaml()?.as_bytes(),
    )?;
    for file in files {
        tracing::info!("Writing {}", file.name);
        write_file(&dir.join(&file.name), &file.data)?;
    }
    Ok(())
}

/// Renders kustomization and generated files as a single stream.
/// Every file is preceded by a comment with its name.
pub fn render_bundle(kustomization: &Kustomization, files: &[OverlayFile]) -> KustpatchResult<String> {
    let mut out = format!(
        "# {KUSTOMIZATION_FILE_NAME}\n{}",
        kustomization.to_yaml()?
    );
    for file in files {
        out.push_str(&format!("# {}\n", file.name));
        out.push_str(&String::from_utf8(file.data.clone())?);
    }
    Ok(out)
}

pub fn run(args: &KustpatchArgs) -> KustpatchResult<()> {
    tracing::info!("Reading parent resource from {}", args.parent.display());
    let parent: DynamicObject = serde_yaml::from_str(&std::fs::read_to_string(&args.parent)?)?;
    let mut kustomization =
        Kustomization::from_yaml(&std::fs::read_to_string(&args.kustomization)?)?;
    let overlays: Vec<Overlay> = match &args.overlays {
        Some(path) => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    let files = build_operation(args, overlays).apply(&parent, &mut kustomization)?;
    if let Some(out_dir) = &args.out_dir {
        write_bundle(out_dir, &kustomization, &files)?;
    } else {
        print!("{}", render_bundle(&kustomization, &files)?);
    }
    Ok(())
}
