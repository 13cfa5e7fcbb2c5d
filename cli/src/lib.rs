use clap::{Parser, Subcommand};

use utils::app_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "run-ntp")]
#[command(version)]
#[command(about = "Snap launcher for the chrony time daemon", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Merge an extra configuration file over the built-in defaults
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the runtime layout and exec the daemon
    Run,

    /// Create directories and install the configuration without launching
    Prepare,

    /// Print the daemon command line that `run` would exec
    Options,

    /// Show the effective launcher configuration
    Config,
}

pub fn cli_match() -> utils::error::Result<()> {
    let cli = Cli::parse();

    // Merge config file over the defaults if provided
    AppConfig::merge_config(cli.config.as_deref())?;

    // Execute the subcommand
    match &cli.command {
        Commands::Run => commands::run_cmd()?,
        Commands::Prepare => commands::prepare_cmd()?,
        Commands::Options => commands::options_cmd()?,
        Commands::Config => commands::config_cmd()?,
    }

    Ok(())
}
