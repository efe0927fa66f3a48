//! BenchKit CLI
//!
//! Creates design files and prints computed blast layouts.

use anyhow::{Context, Result};
use benchkit::report::Summary;
use benchkit::{default_design_path, init_logging, DesignFile, LogFormat, BUILD_DATE, VERSION};
use benchkit_settings::ConfigError;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "benchkit")]
#[command(about = "Bench and blasthole cross-section layout", long_about = None)]
struct Cli {
    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a design file with default values
    Init {
        /// Target file (.toml or .json); defaults to the user config directory
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Compute the layout of a design and print it
    Layout {
        /// Design file (.toml or .json); defaults to the user config directory
        path: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
        /// Skip all dimension lines
        #[arg(long)]
        no_dims: bool,
    },
    /// Show version and build information
    Version,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human readable report
    Summary,
    /// Ordered scene primitives as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    })?;

    match cli.command {
        Commands::Init { path, force } => init_design(path, force)?,
        Commands::Layout {
            path,
            format,
            no_dims,
        } => print_layout(path, format, no_dims)?,
        Commands::Version => println!("benchkit {} (built {})", VERSION, BUILD_DATE),
    }

    Ok(())
}

fn init_design(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_design_path().context("Cannot locate the user config directory")?,
    };
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.display().to_string()).into());
    }

    DesignFile::default()
        .save_to_file(&path)
        .with_context(|| format!("Writing {}", path.display()))?;
    info!("Wrote default design to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn load_design(path: Option<PathBuf>) -> Result<DesignFile> {
    let path = match path {
        Some(path) => path,
        None => match default_design_path() {
            Ok(path) if path.exists() => path,
            _ => {
                info!("No saved design found; using built-in defaults");
                return Ok(DesignFile::default());
            }
        },
    };
    DesignFile::load_from_file(&path).with_context(|| format!("Reading {}", path.display()))
}

fn print_layout(path: Option<PathBuf>, format: OutputFormat, no_dims: bool) -> Result<()> {
    let file = load_design(path)?;

    let mut design = file.to_design()?;
    if no_dims {
        design.request_mut().enabled = false;
    }
    let layout = design.compute();

    match format {
        OutputFormat::Summary => println!("{}", Summary(&layout)),
        OutputFormat::Json => println!("{}", layout.scene().to_json_pretty()?),
    }
    Ok(())
}
