use clap::{Parser, Subcommand};
use revbatch_core::ConfigLoader;

mod commands;

use commands::RunArgs;

#[derive(Parser)]
#[command(name = "revbatch")]
#[command(about = "Daily game-revenue reconciliation batch", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml", global = true)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile one reporting date and persist the records
    Run(RunArgs),
    /// Print the effective per-game platform configuration
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ConfigLoader::load_from(Some(&cli.config))?;

    match cli.command {
        Commands::Run(args) => commands::run_batch(config, args).await?,
        Commands::CheckConfig => commands::check_config(&config),
    }

    Ok(())
}
