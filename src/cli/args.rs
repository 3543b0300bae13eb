use std::path::PathBuf;

/// Which name prefix should be applied to the kustomization.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixMode {
    /// Leave `namePrefix` as is.
    None,
    /// `<name>-`
    #[default]
    Name,
    /// `<namespace>-<name>-`
    NamespaceName,
}

#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "kustpatch", version, author, about)]
pub struct KustpatchArgs {
    /// Manifest of the parent resource.
    #[clap(long, env = "KUSTPATCH_PARENT")]
    pub parent: PathBuf,

    /// Kustomization file to patch.
    #[clap(
        long,
        env = "KUSTPATCH_KUSTOMIZATION",
        default_value = "kustomization.yaml"
    )]
    pub kustomization: PathBuf,

    /// YAML list of overlays to generate.
    #[clap(long, env = "KUSTPATCH_OVERLAYS")]
    pub overlays: Option<PathBuf>,

    /// Name prefix to apply.
    #[clap(long, env = "KUSTPATCH_PREFIX", value_enum, default_value_t = PrefixMode::Name)]
    pub prefix: PrefixMode,

    /// Don't propagate labels of the parent.
    #[clap(long, env = "KUSTPATCH_NO_LABELS")]
    pub no_labels: bool,

    /// Don't fill variables that refer to the parent.
    #[clap(long, env = "KUSTPATCH_NO_VARS")]
    pub no_vars: bool,

    /// Directory to write the patched kustomization and overlays to.
    /// If not set, everything is printed to stdout.
    #[clap(long, env = "KUSTPATCH_OUT_DIR")]
    pub out_dir: Option<PathBuf>,
}
