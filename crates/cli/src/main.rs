//! LipoImports CLI - Data directory seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Write every seed collection to the data directory
//! lipo-cli seed
//!
//! # Wipe all store documents
//! lipo-cli reset
//!
//! # Print one collection as JSON
//! lipo-cli show products
//!
//! # Check a credential pair against the login table
//! lipo-cli login -e admin@lipoimports.com -p admin123
//! ```
//!
//! The data directory defaults to `data` and can be overridden with
//! `LIPOIMPORTS_DATA_DIR`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use lipoimports_cli::commands;
use lipoimports_store::StoreConfig;

#[derive(Parser)]
#[command(name = "lipo-cli")]
#[command(author, version, about = "LipoImports store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every seed collection to the data directory, overwriting
    /// existing documents
    Seed,
    /// Remove every store document from the data directory
    Reset,
    /// Print a collection as pretty JSON
    Show {
        /// Which collection to print
        #[arg(value_enum)]
        collection: commands::show::Target,
    },
    /// Check a credential pair against the login table
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env();
    match cli.command {
        Commands::Seed => commands::seed::run(&config)?,
        Commands::Reset => commands::reset::run(&config)?,
        Commands::Show { collection } => commands::show::run(&config, collection)?,
        Commands::Login { email, password } => commands::login::run(&config, &email, &password)?,
    }
    Ok(())
}
