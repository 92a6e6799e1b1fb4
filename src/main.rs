use clap::{Parser, Subcommand};
use minitrack_core::{Collection, JsonFileStore};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{ArmyCommand, ConfigCommand, StatsCommand, UnitCommand};
use config::Config;

#[derive(Parser)]
#[command(name = "minis")]
#[command(version)]
#[command(about = "Track miniature armies and their painting progress", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List, create and show armies
    Army(ArmyCommand),

    /// Add, update, re-status and delete unit groups
    Unit(UnitCommand),

    /// Show miniature totals for an army
    Stats(StatsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minitrack=warn,minitrack_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for config commands
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Army(cmd)) => {
            cmd.run(&open_collection(&config))?;
        }
        Some(Commands::Unit(cmd)) => {
            cmd.run(&open_collection(&config))?;
        }
        Some(Commands::Stats(cmd)) => {
            cmd.run(&open_collection(&config))?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli_config_path)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn open_collection(config: &Config) -> Collection<JsonFileStore> {
    let store = JsonFileStore::new(config.data_file.value.clone());
    Collection::new(store).with_status_on_update(config.status_on_update())
}
