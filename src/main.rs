//! cfg2header - Generate the camera config C header
//!
//! Usage: cfg2header [generate|convert|list]
//!
//! With no subcommand the builtin manifest is used, resolved against the
//! current directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfg2header::{CameraConfigManifest, HeaderGenerator};

#[derive(Parser)]
#[command(name = "cfg2header")]
#[command(about = "Embed camera config files into a generated C header")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the header described by a manifest (builtin by default)
    Generate {
        #[command(flatten)]
        source: ManifestArgs,
        /// Compare with the existing header instead of writing it
        #[arg(long)]
        check: bool,
    },

    /// Generate a header from an explicit list of config files
    Convert {
        /// Config files, in table order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Header to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the symbol and display name each input will get
    List {
        #[command(flatten)]
        source: ManifestArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Default)]
struct ManifestArgs {
    /// Manifest YAML file
    #[arg(long, env = "CFG2HEADER_MANIFEST")]
    manifest: Option<PathBuf>,
    /// Directory relative manifest paths are resolved against
    /// (defaults to the manifest's directory, or "." for the builtin one)
    #[arg(long)]
    root: Option<PathBuf>,
}

impl ManifestArgs {
    fn load(&self) -> Result<CameraConfigManifest> {
        let manifest = CameraConfigManifest::load(self.manifest.as_deref(), self.root.as_deref())
            .context("Failed to load manifest")?;
        Ok(manifest)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `list` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cfg2header=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => generate(&ManifestArgs::default(), false),
        Some(Command::Generate { source, check }) => generate(&source, check),
        Some(Command::Convert { inputs, output }) => convert(inputs, output),
        Some(Command::List { source, json }) => list(&source, json),
    }
}

fn generate(source: &ManifestArgs, check: bool) -> Result<()> {
    let manifest = source.load()?;
    let generator = HeaderGenerator::from_manifest(&manifest);

    if check {
        generator
            .ensure_current()
            .context("Generated header check failed")?;
        println!("{} is up to date", generator.output().display());
    } else {
        generator.generate().context("Header generation failed")?;
    }
    Ok(())
}

fn convert(inputs: Vec<PathBuf>, output: PathBuf) -> Result<()> {
    HeaderGenerator::new(inputs, output)
        .generate()
        .context("Header generation failed")?;
    Ok(())
}

fn list(source: &ManifestArgs, json: bool) -> Result<()> {
    let manifest = source.load()?;
    let planned = HeaderGenerator::from_manifest(&manifest).plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&planned)?);
        return Ok(());
    }

    println!("Output: {}\n", manifest.output.display());
    for entry in &planned {
        println!(
            "  {:>3}  {:40} {:30} {}",
            entry.index,
            entry.symbol.symbol,
            entry.symbol.display,
            entry.path.display()
        );
    }
    println!("\n  Total: {} configs", planned.len());
    Ok(())
}
