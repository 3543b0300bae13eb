use clap::Parser;
use kustpatch::cli::args::KustpatchArgs;
use tracing_subscriber::EnvFilter;

#[cfg(unix)]
extern crate libc;

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
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = KustpatchArgs::parse();
    kustpatch::cli::run(&args)?;
    Ok(())
}
