//! Trivia server CLI
//!
//! Serves the catalog API and administers its database

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trivia-server")]
#[command(about = "Trivia question catalog service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),
    /// Apply pending database migrations
    Migrate(commands::migrate::MigrateArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args),
        Commands::Migrate(args) => commands::migrate::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
