//! CLI entry point - the composition root.
//!
//! Settings resolve as flags, then environment, then `.env`, then defaults.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use kontak_cli::error::exit_code_for;
use kontak_cli::{Cli, CliConfig, Commands, bootstrap, handlers};
use kontak_core::ContactInput;

const DEFAULT_LOG_FILTER: &str = "kontak=info,tower_http=info";

#[tokio::main]
async fn main() {
    // Logs go to stderr so `list --json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let config = CliConfig::new(&cli.database);

    match command {
        Commands::Serve { port, static_dir } => {
            handlers::serve::execute(&config.database_path, port, static_dir).await?;
        }
        Commands::List { json } => handlers::list::execute(&bootstrap(&config).await?, json).await?,
        Commands::Show { name } => handlers::show::execute(&bootstrap(&config).await?, &name).await?,
        Commands::Add { nama, email, nohp } => {
            let ctx = bootstrap(&config).await?;
            handlers::add::execute(&ctx, ContactInput::new(nama, email, nohp)).await?;
        }
        Commands::Remove { name } => {
            let ctx = bootstrap(&config).await?;
            handlers::remove::execute(&ctx, &name).await?;
        }
    }
    Ok(())
}
