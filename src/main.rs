//! LatticeKit CLI
//!
//! Usage:
//!   latticekit generate [--config lattice.toml] [--lattice M2 --alpha 45 ...] [-o design.json]
//!   latticekit init-config lattice.toml
//!   latticekit info [--config lattice.toml] [--lattice M4 ...]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use latticekit::{
    generate_design, init_logging_with_level, Config, DesignExporter, JsonExporter,
    LatticeGenerator, LatticeOverrides, OutputMode, BUILD_DATE, VERSION,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Star-polygon lattice toolpath generator
#[derive(Parser, Debug)]
#[command(name = "latticekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a lattice design and write it as JSON
    Generate {
        /// Configuration file (.json or .toml); defaults to the per-user config
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        overrides: LatticeOverrides,
    },

    /// Write a configuration file holding the defaults
    InitConfig {
        /// Where to write (.json or .toml)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the unit cell and tiling for a configuration
    Info {
        /// Configuration file (.json or .toml); defaults to the per-user config
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: LatticeOverrides,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    init_logging_with_level(level)?;

    match cli.command {
        Commands::Generate {
            config,
            output,
            compact,
            overrides,
        } => cmd_generate(config.as_deref(), output.as_deref(), compact, &overrides),
        Commands::InitConfig { path, force } => cmd_init_config(&path, force),
        Commands::Info { config, overrides } => cmd_info(config.as_deref(), &overrides),
    }
}

fn load_config(path: Option<&Path>, overrides: &LatticeOverrides) -> Result<Config> {
    let config = Config::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load the default config".to_string(),
    })?;
    let config = overrides.apply(config);
    config.validate().context("Invalid lattice configuration")?;
    Ok(config)
}

fn cmd_generate(
    config_path: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
    overrides: &LatticeOverrides,
) -> Result<()> {
    let config = load_config(config_path, overrides)?;
    let design = generate_design(&config).context("Failed to generate lattice")?;

    let exporter = if compact {
        JsonExporter::new()
    } else {
        JsonExporter::pretty()
    };

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            exporter
                .export(&design, &mut writer)
                .context("Failed to write design")?;
            writer.flush()?;
            info!(
                path = %path.display(),
                points = design.steps.point_count(),
                "Wrote lattice design"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            exporter
                .export(&design, &mut lock)
                .context("Failed to write design")?;
        }
    }

    Ok(())
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn cmd_info(config_path: Option<&Path>, overrides: &LatticeOverrides) -> Result<()> {
    let config = load_config(config_path, overrides)?;
    let params = &config.lattice;
    let generator = LatticeGenerator::new(params.clone())?;
    let cell = generator.unit_cell()?;
    let toolpath = generator.generate(OutputMode::Export)?;
    let layer = generator.layer()?;

    println!("LatticeKit {VERSION} (built {BUILD_DATE})");
    println!();
    println!("Lattice:          {}", cell.lattice_id);
    if cell.alpha == params.alpha {
        println!("Alpha:            {:.3}°", cell.alpha);
    } else {
        println!("Alpha:            {:.3}° (requested {:.3}°)", cell.alpha, params.alpha);
    }
    println!("Strut length:     {:.3} mm", cell.seg_length);
    println!("Unit points:      {}", cell.steps.point_count());
    println!();
    println!("Repeat offset X:  {:.4} mm", cell.offsets.repeat_offset_x);
    println!("Row offset X:     {:.4} mm", cell.offsets.row_offset_x);
    println!("Row offset Y:     {:.4} mm", cell.offsets.row_offset_y);
    println!("Strips per layer: {}", toolpath.strip_count);
    println!("Bridged seams:    {}", toolpath.bridged_seams);
    println!();
    println!("Points per layer: {}", layer.point_count());
    println!("Layers:           {}", toolpath.layers);
    println!("Total points:     {}", toolpath.steps.point_count());

    Ok(())
}
