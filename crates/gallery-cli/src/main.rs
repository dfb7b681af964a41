use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gallery_core::AppConfig;

mod commands;

use commands::LayoutArgs;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(author, version, about = "A draggable slide gallery for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive gallery
    Run,
    /// Replay a script of pointer and resize events against a headless gallery
    Simulate {
        /// Script file, or `-` for stdin
        script: String,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Print one JSON object per step
        #[arg(long)]
        json: bool,
    },
    /// Print track geometry for a layout
    Geometry {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Runs before the config is read so it can replace a malformed file
    if let Some(Commands::InitConfig { force }) = cli.command {
        return commands::init_config::run(force);
    }

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Simulate {
            script,
            layout,
            json,
        }) => commands::simulate::run(&config, &script, &layout, json),
        Some(Commands::Geometry { layout }) => commands::geometry::run(&config, &layout),
        Some(Commands::InitConfig { force }) => commands::init_config::run(force),
    }
}

/// The TUI owns the terminal, so its logs go to a file instead of stderr
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
