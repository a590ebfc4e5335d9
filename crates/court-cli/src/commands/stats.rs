use court_db::query::TeamStatsQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::limit::page_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `court stats`.
pub async fn handle(args: StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = page_limit(flags, &ctx.config);
    let query = stats_query(args, limit);

    let db = ctx.open_db().await?;
    let rows = db.team_stats(&query).await?;
    output(&rows, flags.format)
}

fn stats_query(args: StatsArgs, limit: u32) -> TeamStatsQuery {
    TeamStatsQuery {
        sort_by: args.sort_by,
        sort_order: args.sort_order,
        season: args.season,
        min_pts: args.min_pts,
        max_pts: args.max_pts,
        min_fg_percent: args.min_fg_percent,
        max_fg_percent: args.max_fg_percent,
        min_3p_percent: args.min_3p_percent,
        max_3p_percent: args.max_3p_percent,
        limit: Some(limit),
        offset: args.offset,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::stats_query;
    use crate::cli::{Cli, Commands};

    #[test]
    fn percent_flags_keep_the_hundred_scale() {
        let cli = Cli::try_parse_from([
            "court", "--limit", "5", "stats", "--min-3p-percent", "36.5", "--sort-by", "PTS",
        ])
        .expect("cli should parse");
        let limit = cli.limit;
        let Commands::Stats(args) = cli.command else {
            panic!("expected stats command");
        };

        let query = stats_query(args, limit.unwrap_or(50));
        assert_eq!(query.min_3p_percent, Some(36.5));
        assert_eq!(query.sort_by.as_deref(), Some("PTS"));
        assert_eq!(query.limit, Some(5));
    }
}
