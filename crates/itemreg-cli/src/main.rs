use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// itemreg: a minimal item-registry service.
///
/// Run the REST service with its embedded web UI, seed a fresh database,
/// or inspect an existing one.
#[derive(Parser)]
#[command(name = "itemreg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service and web UI.
    Serve {
        /// Path to the SQLite database file.
        #[arg(long, default_value = "items.db", env = "ITEMREG_DB")]
        db: String,

        /// Port to listen on.
        #[arg(short, long, default_value = "3000", env = "PORT")]
        port: u16,
    },

    /// Provision a database and insert the sample records.
    ///
    /// Intended for a fresh database; re-running appends the sample
    /// records again.
    Seed {
        /// Path to the SQLite database file.
        #[arg(long, default_value = "items.db", env = "ITEMREG_DB")]
        db: String,
    },

    /// Show item count and database statistics.
    Status {
        /// Path to the SQLite database file.
        #[arg(long, default_value = "items.db", env = "ITEMREG_DB")]
        db: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Serve { db, port } => itemreg_server::start(&db, port).await,
        Commands::Seed { db } => commands::seed(&db),
        Commands::Status { db } => commands::status(&db),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
