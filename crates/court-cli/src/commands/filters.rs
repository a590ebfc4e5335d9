use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `court filters`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = ctx.open_db().await?;
    let options = db.record_filter_options().await?;
    output(&options, flags.format)
}
