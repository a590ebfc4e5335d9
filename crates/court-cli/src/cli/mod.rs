use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `court` binary.
#[derive(Debug, Parser)]
#[command(
    name = "court",
    version,
    about = "courtside - draft board, scouting notes and team analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above `.courtside/config.toml`
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::NoteCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "court", "--format", "table", "--limit", "10", "--verbose", "filters",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Filters));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["court", "filters", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["court", "--format", "xml", "filters"]).is_err());
    }

    #[test]
    fn board_accepts_repeated_moves() {
        let cli = Cli::try_parse_from([
            "court", "board", "--move", "up:3", "--move", "rank:0",
        ])
        .expect("cli should parse");
        let Commands::Board(args) = cli.command else {
            panic!("expected board command");
        };
        assert_eq!(args.moves.len(), 2);
    }

    #[test]
    fn board_rejects_malformed_move() {
        assert!(Cli::try_parse_from(["court", "board", "--move", "sideways:1"]).is_err());
    }

    #[test]
    fn records_filters_parse() {
        let cli = Cli::try_parse_from([
            "court", "records", "--min-wins", "50", "--season", "2023-24", "--sort-by", "w",
            "--sort-order", "ASC",
        ])
        .expect("cli should parse");
        let Commands::Records(args) = cli.command else {
            panic!("expected records command");
        };
        assert_eq!(args.min_wins, Some(50.0));
        assert_eq!(args.season.as_deref(), Some("2023-24"));
        assert_eq!(args.sort_order.as_deref(), Some("ASC"));
    }

    #[test]
    fn notes_update_takes_id_and_fields() {
        let cli = Cli::try_parse_from([
            "court", "notes", "update", "7", "--player", "Ace Bailey", "--college", "Rutgers",
        ])
        .expect("cli should parse");
        let Commands::Notes { action: NoteCommands::Update { id, fields } } = cli.command else {
            panic!("expected notes update");
        };
        assert_eq!(id, 7);
        assert_eq!(fields.college.as_deref(), Some("Rutgers"));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["court", "--config", "/tmp/court.toml", "filters"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some("/tmp/court.toml"));
    }
}
