use taskseed_config::SeedConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: SeedConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(args, config, flags),
        Commands::Check(args) => commands::check::handle(args, &config, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
