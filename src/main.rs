use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod term;

/// A line-numbered integer BASIC.
#[derive(Parser, Debug)]
#[command(name = "basic", version, about)]
struct Args {
    /// Program to load before the first prompt
    file: Option<PathBuf>,

    /// RUN the loaded program immediately
    #[arg(long, requires = "file")]
    run: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    term::main(args.file.as_deref(), args.run);
}
