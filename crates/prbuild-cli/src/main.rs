mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prbuild", about = "Build GitHub pull requests against their OBS package counterpart")]
#[command(version)]
struct Cli {
    /// Enable debug diagnostics (RUST_LOG takes precedence when set)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a pull request into a fresh checkout and build it remotely
    Build {
        /// Pull request descriptor in the form
        /// base_org:base_project:base_branch:pr_number:pr_repo:pr_commit
        descriptor: String,
    },
    /// Check that the external tools the pipeline drives are available
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Build { descriptor } => commands::build(&descriptor).await?,
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
