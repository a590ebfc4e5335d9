use clap::{Args, Subcommand};
use court_core::entities::NoteFields;

/// Scouting note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// List notes, newest first.
    List,
    /// Get a note by id.
    Get { id: i64 },
    /// Create a note.
    Create {
        #[command(flatten)]
        fields: NoteArgs,
    },
    /// Replace every field of a note. Omitted fields are cleared.
    Update {
        id: i64,
        #[command(flatten)]
        fields: NoteArgs,
    },
    /// Delete a note.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct NoteArgs {
    #[arg(long)]
    pub player: Option<String>,
    #[arg(long)]
    pub height: Option<String>,
    #[arg(long)]
    pub wingspan: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub college: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub intangibles: Option<String>,
    #[arg(long)]
    pub development_needs: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<NoteArgs> for NoteFields {
    fn from(args: NoteArgs) -> Self {
        Self {
            player: args.player,
            height: args.height,
            wingspan: args.wingspan,
            age: args.age,
            college: args.college,
            position: args.position,
            intangibles: args.intangibles,
            development_needs: args.development_needs,
            notes: args.notes,
        }
    }
}
