use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eol_check::cli;

#[derive(Parser)]
#[command(name = "eol-check")]
#[command(version, about = "Checks installed software against end-of-life data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Force remote fetches, bypassing the local cache
    #[arg(long, global = true)]
    refresh: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the environment and evaluate every detected component (default)
    Scan,
    /// Evaluate one product or package name against an observed version
    Check { identifier: String, version: String },
    /// AI model lifecycle commands
    Ai {
        #[command(subcommand)]
        action: AiAction,
    },
    /// Cache maintenance
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum AiAction {
    /// Evaluate a model-usage string (e.g. "gpt-4-turbo")
    Check { model: String },
    /// List known providers, or a provider's models
    List { provider: Option<String> },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Remove all cached lifecycle data
    Clear,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None | Some(Command::Scan) => runtime.block_on(cli::run_scan(cli.refresh)),
        Some(Command::Check {
            identifier,
            version,
        }) => runtime.block_on(cli::run_check(&identifier, &version, cli.refresh)),
        Some(Command::Ai { action }) => match action {
            AiAction::Check { model } => runtime.block_on(cli::run_ai_check(&model, cli.refresh)),
            AiAction::List { provider } => {
                cli::run_ai_list(provider.as_deref());
                Ok(())
            }
        },
        Some(Command::Cache { action }) => match action {
            CacheAction::Clear => cli::run_cache_clear(),
        },
    }
}
