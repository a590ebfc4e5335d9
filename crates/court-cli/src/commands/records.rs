use court_db::query::TeamRecordQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecordsArgs;
use crate::commands::shared::limit::page_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `court records`.
pub async fn handle(args: RecordsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = page_limit(flags, &ctx.config);
    let query = record_query(args, limit);

    let db = ctx.open_db().await?;
    let rows = db.team_records(&query).await?;
    output(&rows, flags.format)
}

fn record_query(args: RecordsArgs, limit: u32) -> TeamRecordQuery {
    TeamRecordQuery {
        sort_by: args.sort_by,
        sort_order: args.sort_order,
        coach: args.coach,
        min_wins: args.min_wins,
        max_wins: args.max_wins,
        min_ortg: args.min_ortg,
        max_ortg: args.max_ortg,
        min_drtg: args.min_drtg,
        max_drtg: args.max_drtg,
        min_pace: args.min_pace,
        max_pace: args.max_pace,
        season: args.season,
        playoffs: args.playoffs,
        limit: Some(limit),
        offset: args.offset,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::record_query;
    use crate::cli::{Cli, Commands};

    #[test]
    fn flags_map_onto_record_filters() {
        let cli = Cli::try_parse_from([
            "court", "records", "--coach", "Carlisle", "--min-ortg", "115", "--offset", "20",
        ])
        .expect("cli should parse");
        let Commands::Records(args) = cli.command else {
            panic!("expected records command");
        };

        let query = record_query(args, 25);
        assert_eq!(query.coach.as_deref(), Some("Carlisle"));
        assert_eq!(query.min_ortg, Some(115.0));
        assert_eq!(query.limit, Some(25));
        assert_eq!(query.offset, Some(20));
        assert!(query.build().sql.contains("coaches LIKE"));
    }
}
