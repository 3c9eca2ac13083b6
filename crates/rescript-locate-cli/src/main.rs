//! CLI entry point - the composition root.
//!
//! Loads `.env`, installs logging, builds the resolver and routes each
//! command to its handler.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rescript_locate_cli::{Cli, CliError, Commands, handlers};
use rescript_locate_runtime::BinaryResolver;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let resolver = BinaryResolver::new();

    match cli.command {
        Commands::Bin {
            binary,
            platform_path,
        } => {
            let project_root = handlers::project_root(cli.project_root)?;
            handlers::bin::execute(&resolver, project_root, binary, platform_path).await?;
        }
        Commands::MonorepoRoot { path } => {
            handlers::monorepo_root::execute(&path)?;
        }
        Commands::Paths => {
            let project_root = handlers::project_root(cli.project_root)?;
            handlers::paths::execute(&resolver, project_root).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
