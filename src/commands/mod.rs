pub mod init;
pub mod notify;
pub mod task;
pub mod taxonomy;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize storage and default preferences")]
    Init,
    #[command(about = "Manage planner tasks")]
    Task(task::TaskArgs),
    #[command(about = "Show or toggle reminder notifications")]
    Notify(notify::NotifyArgs),
    #[command(about = "Browse the category/activity taxonomy")]
    Taxonomy(taxonomy::TaxonomyArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::Notify(args) => notify::cmd(args),
            Commands::Taxonomy(args) => taxonomy::cmd(args),
        }
    }
}
