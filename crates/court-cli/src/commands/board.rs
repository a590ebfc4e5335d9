use serde::Serialize;
use serde_json::Value;

use court_board::{BigBoard, RankedEntry, aggregate::aggregate_dataset};

use crate::cli::root_commands::BoardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_sections};

#[derive(Debug, Serialize)]
struct BoardResponse<'a> {
    ranked: &'a [RankedEntry],
    unranked: &'a [RankedEntry],
}

/// Condensed row for table output.
#[derive(Debug, Serialize, PartialEq)]
struct BoardRow {
    slot: usize,
    player_id: i64,
    name: String,
    team: Option<String>,
    avg_rank: Option<f64>,
    age: Option<u32>,
    height: Option<String>,
}

/// Handle `court board`.
pub fn handle(args: &BoardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dataset = ctx.load_dataset()?;
    let mut board = BigBoard::from(aggregate_dataset(&dataset, AppContext::today()));
    apply_moves(&mut board, args)?;

    if flags.format == OutputFormat::Table {
        return output_sections(&[
            ("Ranked", rows_value(board.ranked())?),
            ("Unranked", rows_value(board.unranked())?),
        ]);
    }

    output(
        &BoardResponse {
            ranked: board.ranked(),
            unranked: board.unranked(),
        },
        flags.format,
    )
}

fn apply_moves(board: &mut BigBoard, args: &BoardArgs) -> anyhow::Result<()> {
    for mv in &args.moves {
        board
            .apply(*mv)
            .map_err(|error| anyhow::anyhow!("move {mv:?} rejected: {error}"))?;
    }
    Ok(())
}

fn board_rows(entries: &[RankedEntry]) -> Vec<BoardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| BoardRow {
            slot: index,
            player_id: entry.player_id(),
            name: entry.name().to_string(),
            team: entry.prospect.current_team.clone(),
            avg_rank: entry.average_rank,
            age: entry.age,
            height: entry.display_height.clone(),
        })
        .collect()
}

fn rows_value(entries: &[RankedEntry]) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(board_rows(entries))?)
}
