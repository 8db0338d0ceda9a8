//! CLI subcommands

pub mod migrate;
pub mod seed;
pub mod serve;

use std::path::PathBuf;

use clap::Args;

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Settings file layered over the embedded defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> anyhow::Result<trivia_server::Settings> {
        Ok(trivia_server::Settings::load(self.config.as_deref())?)
    }
}
