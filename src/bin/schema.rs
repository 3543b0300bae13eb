use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
};

use clap::Parser;
use kustpatch::crds::Overlay;

#[cfg(unix)]
extern crate libc;

#[derive(Parser, Debug, Clone)]
struct SchemaArgs {
    out_file: Option<String>,
}

fn generate_schema_def() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(Vec<Overlay>);
    eprintln!("- Adding overlays schema");
    serde_yaml::to_string(&schema).map_err(Into::into)
}

pub fn main() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        unsafe {
            // Default SIGPIPE handling, so piping
            // the output into `head` doesn't panic.
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    dotenvy::dotenv().ok();
    let args = SchemaArgs::parse();
    let defs = generate_schema_def()?;
    if let Some(out_file) = args.out_file {
        let output = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(out_file)?;
        let mut writer = BufWriter::new(output);
        writer.write_all(defs.as_bytes())?;
    } else {
        println!("{defs}");
    }
    Ok(())
}
