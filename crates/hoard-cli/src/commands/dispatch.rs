use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Refresh(args) => commands::refresh::handle(&args, ctx, flags).await,
        Commands::Targets(args) => commands::targets::handle(&args, ctx, flags),
        Commands::Fetch(args) => commands::fetch::handle(&args, ctx, flags).await,
    }
}
