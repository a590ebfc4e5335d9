use court_core::entities::NoteFields;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `court notes`.
pub async fn handle(
    action: NoteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = ctx.open_db().await?;
    match action {
        NoteCommands::List => {
            let mut notes = db.list_notes().await?;
            if let Some(limit) = flags.limit {
                notes.truncate(usize::try_from(limit)?);
            }
            output(&notes, flags.format)
        }
        NoteCommands::Get { id } => output(&db.get_note(id).await?, flags.format),
        NoteCommands::Create { fields } => {
            let note = db.create_note(&NoteFields::from(fields)).await?;
            tracing::info!(id = note.id, "note created");
            output(&note, flags.format)
        }
        NoteCommands::Update { id, fields } => {
            let note = db.update_note(id, &NoteFields::from(fields)).await?;
            output(&note, flags.format)
        }
        NoteCommands::Delete { id } => {
            let note = db.delete_note(id).await?;
            tracing::info!(id, "note deleted");
            output(&note, flags.format)
        }
    }
}
