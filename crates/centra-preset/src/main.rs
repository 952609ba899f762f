//! centra-preset — generate and publish genesis test fixtures.
//!
//! Usage:
//!   centra-preset list
//!   centra-preset create <name> [alias]
//!
//! `create` loads `<presets>/<name>.json`, expands it into a genesis
//! schema, renders the genesis block via the configured external renderer,
//! and atomically publishes the result under the alias (or the preset
//! name) inside the tmp directory.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use centra_core::error::CentraError;
use centra_genesis::{PresetPublisher, PresetSpec, ProcessRenderer};

mod config;
use config::Config;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "centra-preset",
    version,
    about = "Centra genesis preset tool — build and publish test fixtures"
)]
struct Args {
    /// Path to a JSON configuration file.
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Output debug information.
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    /// Output additional info.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available preset names.
    List,

    /// Build, render and publish a preset.
    Create {
        /// Preset name (a `<name>.json` file in the presets directory).
        name: String,
        /// Publish under this name instead of the preset name.
        alias: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.parse().expect("static filter parses")),
        )
        .init();

    let config = Config::load(args.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match args.command {
        Command::List => list_presets(&config),
        Command::Create { name, alias } => create_preset(&config, &name, alias),
    }
}

/// Enumerate `*.json` files in the presets directory, extension stripped.
fn list_presets(config: &Config) -> anyhow::Result<()> {
    let mut names = Vec::new();
    let entries = fs::read_dir(&config.presets)
        .with_context(|| format!("reading presets dir {}", config.presets.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
    }
    names.sort();
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn create_preset(config: &Config, name: &str, alias: Option<String>) -> anyhow::Result<()> {
    let spec_path = config.presets.join(format!("{name}.json"));
    if !spec_path.exists() {
        return Err(CentraError::UnknownPreset(name.to_string()).into());
    }
    let body = fs::read_to_string(&spec_path)
        .with_context(|| format!("reading preset {}", spec_path.display()))?;
    let spec: PresetSpec = serde_json::from_str(&body)
        .with_context(|| format!("parsing preset {}", spec_path.display()))?;

    fs::create_dir_all(&config.tmp)
        .with_context(|| format!("creating tmp dir {}", config.tmp.display()))?;

    let renderer = ProcessRenderer {
        command: config.renderer_command.clone(),
        args: config.renderer_args.clone(),
    };
    let publisher = PresetPublisher::new(&config.tmp, renderer);

    let target = alias.as_deref().unwrap_or(name);
    let final_dir = publisher
        .publish(&spec, target, &mut rand::thread_rng())
        .with_context(|| format!("publishing preset {target}"))?;

    debug!(dir = %final_dir.display(), "finished");
    Ok(())
}
