//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;
use kontak_axum::bootstrap::DEFAULT_DATABASE;

use crate::commands::Commands;

/// Command-line interface for the kontak address book.
#[derive(Parser)]
#[command(name = "kontak")]
#[command(about = "Manage contacts from the browser or the terminal")]
#[command(version)]
pub struct Cli {
    /// SQLite database file
    #[arg(
        long = "database",
        global = true,
        env = "KONTAK_DATABASE",
        default_value = DEFAULT_DATABASE
    )]
    pub database: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_database_after_subcommand() {
        let cli = Cli::parse_from(["kontak", "list", "--database", "/tmp/k.db"]);
        assert_eq!(cli.database, PathBuf::from("/tmp/k.db"));
        assert!(matches!(cli.command, Some(Commands::List { json: false })));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["kontak"]);
        assert!(cli.command.is_none());
    }
}
