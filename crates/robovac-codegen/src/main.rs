//! Command-line entry point for the model module generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use robovac_catalog::builtin_catalog;
use robovac_codegen::{ModelGenerator, DEFAULT_OUTPUT_DIR};

/// Regenerate the per-model modules of the RoboVac integration.
#[derive(Parser, Debug)]
#[command(name = "robovac-codegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the generated modules are written to. Must exist.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if args.verbose { "debug" } else { "info" };
        tracing_subscriber::EnvFilter::new(format!("robovac_codegen={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let generator = ModelGenerator::new(builtin_catalog(), args.output_dir);
    let report = generator.generate()?;

    println!(
        "Generated {} model modules ({} files)",
        report.models,
        report.files.len()
    );

    Ok(())
}
