use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use court_board::BoardMove;

use crate::cli::subcommands::NoteCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the REST API server.
    Serve(ServeArgs),
    /// Show the Big Board, optionally applying moves in order.
    Board(BoardArgs),
    /// Show one player's profile.
    Profile(ProfileArgs),
    /// Query historical team records.
    Records(RecordsArgs),
    /// Distinct seasons, coaches and playoff results for record filters.
    Filters,
    /// Query team season stats.
    Stats(StatsArgs),
    /// Scouting notes.
    Notes {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Load team rows from a JSON array file.
    Import(ImportArgs),
    /// Time remaining until the season opener.
    Countdown(CountdownArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.host`
    #[arg(long)]
    pub host: Option<String>,
    /// Override `server.port`
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct BoardArgs {
    /// Move to apply, as `<top|up|down|bottom|unrank|rank>:<index>`. Repeatable.
    #[arg(long = "move", value_name = "OP:INDEX")]
    pub moves: Vec<BoardMove>,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    pub player_id: i64,
    /// Scout name for a session report
    #[arg(long, requires = "report")]
    pub scout: Option<String>,
    /// Report text for a session report
    #[arg(long, requires = "scout")]
    pub report: Option<String>,
    /// Optional rating attached to the session report
    #[arg(long, requires = "report")]
    pub rating: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RecordsArgs {
    /// Substring match on the coaches column
    #[arg(long)]
    pub coach: Option<String>,
    #[arg(long)]
    pub min_wins: Option<f64>,
    #[arg(long)]
    pub max_wins: Option<f64>,
    #[arg(long)]
    pub min_ortg: Option<f64>,
    #[arg(long)]
    pub max_ortg: Option<f64>,
    #[arg(long)]
    pub min_drtg: Option<f64>,
    #[arg(long)]
    pub max_drtg: Option<f64>,
    #[arg(long)]
    pub min_pace: Option<f64>,
    #[arg(long)]
    pub max_pace: Option<f64>,
    /// Exact season label, e.g. `2023-24`
    #[arg(long)]
    pub season: Option<String>,
    /// Substring match on the playoffs column
    #[arg(long)]
    pub playoffs: Option<String>,
    #[arg(long)]
    pub sort_by: Option<String>,
    /// ASC or DESC
    #[arg(long)]
    pub sort_order: Option<String>,
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    #[arg(long)]
    pub season: Option<String>,
    #[arg(long)]
    pub min_pts: Option<f64>,
    #[arg(long)]
    pub max_pts: Option<f64>,
    /// Field-goal percentage floor, 0-100
    #[arg(long)]
    pub min_fg_percent: Option<f64>,
    #[arg(long)]
    pub max_fg_percent: Option<f64>,
    /// Three-point percentage floor, 0-100
    #[arg(long = "min-3p-percent")]
    pub min_3p_percent: Option<f64>,
    #[arg(long = "max-3p-percent")]
    pub max_3p_percent: Option<f64>,
    /// Exact column id, e.g. `PTS` or `FG_percent`
    #[arg(long)]
    pub sort_by: Option<String>,
    #[arg(long)]
    pub sort_order: Option<String>,
    #[arg(long)]
    pub offset: Option<u32>,
}

/// Team table targeted by `court import`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ImportTarget {
    Records,
    Stats,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    pub target: ImportTarget,
    /// JSON file holding an array of row objects
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct CountdownArgs {
    /// Refresh every second until the opener
    #[arg(long)]
    pub watch: bool,
}
