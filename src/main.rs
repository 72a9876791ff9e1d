//! CLI entry point for clean-lock
//!
//! Provides command-line interface for launching the cleaning-mode window,
//! checking the settings file, and writing a default config.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use clean_lock::config::ConfigManager;
use clean_lock::ui::App;

#[derive(Parser)]
#[command(name = "clean-lock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the cleaning-mode window (default)
    Gui {
        /// Path to the settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Enter cleaning mode immediately on startup
        #[arg(short, long)]
        locked: bool,
    },

    /// Parse and validate the settings file, printing effective values
    Check {
        /// Path to the settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a commented default settings file
    Init {
        /// Path to the settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Gui {
        config: None,
        locked: false,
    });

    match command {
        Commands::Gui { config, locked } => {
            let path = resolve_config_path(config)?;
            let app = App::new(path, locked)?;
            app.run();
        }
        Commands::Check { config } => check_settings(config)?,
        Commands::Init { config, force } => init_settings(config, force)?,
    }

    Ok(())
}

/// Resolves the settings path, expanding a leading tilde
fn resolve_config_path(config: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match config {
        Some(path) => {
            let expanded = shellexpand::tilde(
                path.to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
            );
            Ok(PathBuf::from(expanded.as_ref()))
        }
        None => Ok(ConfigManager::default_path()),
    }
}

/// Check the settings file and print the effective values
fn check_settings(config: Option<PathBuf>) -> anyhow::Result<()> {
    let path = resolve_config_path(config)?;
    let manager = ConfigManager::new(path.clone());

    println!("{} Checking settings: {}", "→".cyan(), path.display());

    if !manager.exists() {
        println!(
            "{} No settings file found - built-in defaults in effect",
            "→".cyan()
        );
    }

    let settings = match manager.load_or_default() {
        Ok(settings) => settings,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("{} Settings are valid\n", "✓".green());
    println!("  hold_seconds = {}", settings.hold_seconds);
    println!("  modifier     = {}", settings.modifier);
    println!("  sample_ms    = {}", settings.sample_ms);

    Ok(())
}

/// Write the commented default settings file
fn init_settings(config: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = resolve_config_path(config)?;
    let manager = ConfigManager::new(path.clone());

    manager.write_default(force)?;

    println!(
        "{} Default settings written to {}",
        "✓".green(),
        path.display()
    );
    println!("\nEdit the file and run {} to verify.", "clean-lock check".bold());

    Ok(())
}
