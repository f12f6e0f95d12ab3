//! arc-console: climate transition risk dashboard for commercial real estate.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use arc_console::{
    cli::{self, ExportKind},
    config,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "arc-console")]
#[command(version)]
#[command(about = "Climate transition risk dashboard for commercial real estate", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Export failed / no matching data
    3  Error occurred

EXAMPLES:
    # Launch the interactive dashboard
    arc-console

    # Write the exposure table as CSV without entering the TUI
    arc-console export portfolio -d ./reports

    # Summarize the portfolio under a filter combination
    arc-console summary -f geography=toronto -f property-type=office")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    Tui,

    /// Write a CSV snapshot without entering the TUI
    Export {
        /// What to export: portfolio, projections, or kpi
        kind: String,

        /// Output directory (defaults to config, then current directory)
        #[arg(short = 'd', long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the derived filter summary for category=value specs
    Summary {
        /// Filter spec, repeatable (e.g. -f geography=toronto)
        #[arg(short = 'f', long = "filter")]
        filters: Vec<String>,
    },

    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .arc-console.yaml in the current directory
    Init,
    /// Print the JSON schema for the config file
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let exit_code = cli::run_dashboard(&config)?;
            finish(exit_code)
        }

        Commands::Export { kind, output_dir } => {
            let Some(kind) = ExportKind::parse(&kind) else {
                eprintln!("Unknown export kind '{kind}': expected portfolio, projections, or kpi");
                std::process::exit(3);
            };
            let exit_code = cli::run_export(kind, output_dir, &config)?;
            finish(exit_code)
        }

        Commands::Summary { filters } => {
            let exit_code = cli::run_summary(&filters, &config)?;
            finish(exit_code)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("arc-console").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".arc-console.yaml");
                if target.exists() {
                    eprintln!("{} already exists; not overwriting", target.display());
                    std::process::exit(1);
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Wrote {}", target.display());
                Ok(())
            }
            ConfigAction::Schema => {
                let schema = config::generate_json_schema()?;
                println!("{schema}");
                Ok(())
            }
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "arc-console", &mut io::stdout());
            Ok(())
        }
    }
}

fn finish(exit_code: i32) -> Result<()> {
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
