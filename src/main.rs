mod cli;
mod config;
mod display;
mod error;
mod models;
mod renderer;
mod store;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cli::add::AddArgs;

#[derive(Parser)]
#[command(name = "shiplog")]
#[command(about = "Publish dated log entries to a static site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Validate and publish one entry (page + index)
    Add(AddArgs),
    /// Print the entry index as a table
    List {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show commands
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Audit consistency between the index and the rendered pages
    Check {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// Display the newest entry
    Latest {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize shiplog.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Add(args) => cli::add::run(args),
        Commands::List { config } => cli::list::run(config),
        Commands::Show { command } => match command {
            ShowCommands::Latest { config } => cli::show::latest(config),
        },
        Commands::Check { config } => cli::check::run(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
