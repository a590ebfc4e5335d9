mod notes;

pub use notes::{NoteArgs, NoteCommands};
