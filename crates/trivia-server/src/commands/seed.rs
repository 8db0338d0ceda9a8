//! Seed import command
//!
//! Usage: trivia-server seed import <PATH> [--config <PATH>]

use clap::{Args, Subcommand};
use std::path::PathBuf;

use super::ConfigArgs;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file, or every seed file of a directory, into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> anyhow::Result<()> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args),
    }
}

fn execute_import(args: ImportArgs) -> anyhow::Result<()> {
    let settings = args.config.load()?;

    let mut conn = trivia_store::db::open(&settings.database.path)?;
    trivia_store::db::configure(&conn)?;
    trivia_store::migrations::apply_migrations(&mut conn)?;

    println!("Importing {}...", args.path.display());
    let reports = trivia_store::seed::import_seed_path(&args.path, &mut conn)?;
    for report in reports {
        println!(
            "✓ Imported {} categories, {} new questions ({} already present) (digest: {})",
            report.categories,
            report.questions_inserted,
            report.questions_skipped,
            report.digest
        );
    }

    Ok(())
}
