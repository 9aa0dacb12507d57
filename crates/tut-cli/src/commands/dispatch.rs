use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::tutorial;
use crate::context::AppContext;

/// Dispatch a parsed database command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Value> {
    match command {
        Commands::Create(args) => tutorial::create(&args, ctx).await,
        Commands::Get { id } => tutorial::get(id, ctx).await,
        Commands::List => tutorial::list(ctx, flags).await,
        Commands::Find(args) => tutorial::find(&args, ctx, flags).await,
        Commands::Exists(args) => tutorial::exists(&args, ctx).await,
        Commands::Update(args) => tutorial::update(&args, ctx).await,
        Commands::Delete { id } => tutorial::delete(id, ctx).await,
        Commands::Reverse(_) | Commands::Resolve { .. } | Commands::Routes => {
            unreachable!("route commands are pre-dispatched in main")
        }
    }
}
