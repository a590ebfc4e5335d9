use serde_json::{Value, json};

use court_board::{PlayerProfile, ReportDraft, ReportLog, assemble};

use crate::cli::root_commands::ProfileArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_sections};

/// Handle `court profile`.
///
/// `--scout/--report` append a session report before assembly; it is shown in
/// this profile only and never written back to the dataset.
pub fn handle(args: ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dataset = ctx.load_dataset()?;
    let mut log = ReportLog::new();

    if let (Some(scout_name), Some(report_text)) = (args.scout, args.report) {
        let draft = ReportDraft {
            scout_name,
            report_text,
            rating: args.rating,
        };
        if log.add(args.player_id, draft, chrono::Utc::now()).is_none() {
            anyhow::bail!("scout name and report text must both be non-blank");
        }
    }

    let Some(profile) = assemble(&dataset, &log, args.player_id, AppContext::today()) else {
        anyhow::bail!("player {} not found", args.player_id);
    };

    if flags.format == OutputFormat::Table {
        return output_sections(&table_sections(&profile)?);
    }
    output(&profile, flags.format)
}

/// Split a profile into the blocks shown in table mode.
fn table_sections(profile: &PlayerProfile) -> anyhow::Result<Vec<(&'static str, Value)>> {
    let p = &profile.prospect;
    let summary = json!({
        "playerId": p.player_id,
        "name": p.name,
        "team": p.current_team,
        "league": p.league,
        "position": p.position,
        "age": profile.age,
        "height": profile.display_height,
        "weight": p.weight,
    });
    let ranks = profile
        .scout_ranks
        .iter()
        .map(|rank| json!({"scout": rank.label(), "rank": rank.rank}))
        .collect::<Vec<_>>();

    let mut sections = vec![("Player", summary), ("Scout ranks", Value::Array(ranks))];
    if let Some(measurements) = &profile.measurements {
        sections.push(("Measurements", serde_json::to_value(measurements)?));
    }
    if let Some(latest) = &profile.latest_season {
        sections.push(("Latest season", serde_json::to_value(latest)?));
    }
    sections.push(("Seasons", serde_json::to_value(&profile.seasons)?));
    sections.push(("Games", serde_json::to_value(&profile.game_logs)?));
    sections.push(("Reports", serde_json::to_value(&profile.reports)?));
    Ok(sections)
}
