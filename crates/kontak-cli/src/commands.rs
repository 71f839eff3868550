//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use kontak_axum::DEFAULT_PORT;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Directory of static assets (defaults to ./public when present)
        #[arg(long, env = "KONTAK_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },

    /// List all contacts
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one contact
    Show {
        /// Contact name
        name: String,
    },

    /// Add a contact, applying the same rules as the web form
    Add {
        /// Contact name (must be unique)
        #[arg(long)]
        nama: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        nohp: String,
    },

    /// Remove a contact by name
    Remove {
        /// Contact name
        name: String,
    },
}
