use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Board(args) => commands::board::handle(&args, ctx, flags),
        Commands::Profile(args) => commands::profile::handle(args, ctx, flags),
        Commands::Records(args) => commands::records::handle(args, ctx, flags).await,
        Commands::Filters => commands::filters::handle(ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(args, ctx, flags).await,
        Commands::Notes { action } => commands::notes::handle(action, ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Countdown(args) => commands::countdown::handle(&args, ctx, flags).await,
    }
}
