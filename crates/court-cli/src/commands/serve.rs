use court_api::Router;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `court serve`. Runs until Ctrl-C.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let server = &ctx.config.server;
    let host = args.host.as_deref().unwrap_or(&server.host);
    let port = args.port.unwrap_or(server.port);
    let addr = format!("{host}:{port}");

    let db = ctx.open_db().await?;
    let router = Router::new(db);

    court_api::server::serve(router, &addr, async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for ctrl-c");
        }
    })
    .await?;
    Ok(())
}
