//! Migrate command
//!
//! Usage: trivia-server migrate [--config <PATH>]

use clap::Args;

use super::ConfigArgs;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute migrate command
pub fn execute(args: MigrateArgs) -> anyhow::Result<()> {
    let settings = args.config.load()?;

    let mut conn = trivia_store::db::open(&settings.database.path)?;
    trivia_store::db::configure(&conn)?;
    trivia_store::migrations::apply_migrations(&mut conn)?;

    let applied = trivia_store::migrations::applied_migrations(&conn)?;
    println!(
        "✓ {} migration(s) applied to {}",
        applied.len(),
        settings.database.path.display()
    );
    Ok(())
}
