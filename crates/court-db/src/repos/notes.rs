//! Scouting note repository: CRUD over `scouting_notes`.

use chrono::{SecondsFormat, Utc};

use court_core::entities::{NoteFields, ScoutingNote};

use crate::CourtDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};

const NOTE_COLUMNS: &str = "id, player, height, wingspan, age, college, position, \
                            intangibles, development_needs, notes, created_at, updated_at";

fn row_to_note(row: &libsql::Row) -> Result<ScoutingNote, DatabaseError> {
    Ok(ScoutingNote {
        id: row.get::<i64>(0)?,
        player: get_opt_string(row, 1)?,
        height: get_opt_string(row, 2)?,
        wingspan: get_opt_string(row, 3)?,
        age: get_opt_string(row, 4)?,
        college: get_opt_string(row, 5)?,
        position: get_opt_string(row, 6)?,
        intangibles: get_opt_string(row, 7)?,
        development_needs: get_opt_string(row, 8)?,
        notes: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn field_params(fields: &NoteFields) -> Vec<libsql::Value> {
    [
        &fields.player,
        &fields.height,
        &fields.wingspan,
        &fields.age,
        &fields.college,
        &fields.position,
        &fields.intangibles,
        &fields.development_needs,
        &fields.notes,
    ]
    .into_iter()
    .map(|field| field.as_deref().into())
    .collect()
}

async fn single_note(mut rows: libsql::Rows) -> Result<Option<ScoutingNote>, DatabaseError> {
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_note(&row)?)),
        None => Ok(None),
    }
}

impl CourtDb {
    /// All notes, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails, or
    /// `DatabaseError::Query` if a row has an unexpected shape.
    pub async fn list_notes(&self) -> Result<Vec<ScoutingNote>, DatabaseError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {NOTE_COLUMNS} FROM scouting_notes ORDER BY created_at DESC, id DESC"
                ),
                (),
            )
            .await?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next().await? {
            notes.push(row_to_note(&row)?);
        }
        Ok(notes)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no note has this `id`.
    pub async fn get_note(&self, id: i64) -> Result<ScoutingNote, DatabaseError> {
        let rows = self
            .query(
                &format!("SELECT {NOTE_COLUMNS} FROM scouting_notes WHERE id = ?1"),
                [id],
            )
            .await?;
        single_note(rows)
            .await?
            .ok_or(DatabaseError::NotFound { entity: "Note", id })
    }

    /// Insert a note stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the insert fails, or
    /// `DatabaseError::NoResult` if it returns no row.
    pub async fn create_note(&self, fields: &NoteFields) -> Result<ScoutingNote, DatabaseError> {
        let now = timestamp();
        let mut params = field_params(fields);
        params.push(now.as_str().into());
        params.push(now.as_str().into());

        let rows = self
            .query(
                &format!(
                    "INSERT INTO scouting_notes (player, height, wingspan, age, college, position,
                         intangibles, development_needs, notes, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                     RETURNING {NOTE_COLUMNS}"
                ),
                libsql::params_from_iter(params),
            )
            .await?;
        let note = single_note(rows).await?.ok_or(DatabaseError::NoResult)?;
        tracing::info!(id = note.id, "scouting note created");
        Ok(note)
    }

    /// Replace every writable field of a note and bump `updated_at`.
    ///
    /// Fields absent from `fields` are cleared, matching a full PUT.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no note has this `id`.
    pub async fn update_note(
        &self,
        id: i64,
        fields: &NoteFields,
    ) -> Result<ScoutingNote, DatabaseError> {
        let mut params = field_params(fields);
        params.push(timestamp().into());
        params.push(id.into());

        let rows = self
            .query(
                &format!(
                    "UPDATE scouting_notes
                     SET player = ?1, height = ?2, wingspan = ?3, age = ?4, college = ?5,
                         position = ?6, intangibles = ?7, development_needs = ?8, notes = ?9,
                         updated_at = ?10
                     WHERE id = ?11
                     RETURNING {NOTE_COLUMNS}"
                ),
                libsql::params_from_iter(params),
            )
            .await?;
        single_note(rows)
            .await?
            .ok_or(DatabaseError::NotFound { entity: "Note", id })
    }

    /// Delete a note, returning the row as it was.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no note has this `id`.
    pub async fn delete_note(&self, id: i64) -> Result<ScoutingNote, DatabaseError> {
        let rows = self
            .query(
                &format!("DELETE FROM scouting_notes WHERE id = ?1 RETURNING {NOTE_COLUMNS}"),
                [id],
            )
            .await?;
        let note = single_note(rows)
            .await?
            .ok_or(DatabaseError::NotFound { entity: "Note", id })?;
        tracing::info!(id, "scouting note deleted");
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn test_db() -> CourtDb {
        CourtDb::open_local(":memory:").await.unwrap()
    }

    fn fields(player: &str) -> NoteFields {
        NoteFields {
            player: Some(player.into()),
            position: Some("F".into()),
            notes: Some("Switchable defender".into()),
            ..NoteFields::default()
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let db = test_db().await;
        let created = db.create_note(&fields("Cooper Flagg")).await.unwrap();

        let fetched = db.get_note(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.player.as_deref(), Some("Cooper Flagg"));
        assert_eq!(fetched.college, None);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let db = test_db().await;
        let first = db.create_note(&fields("First")).await.unwrap();
        let second = db.create_note(&fields("Second")).await.unwrap();

        let ids: Vec<i64> = db.list_notes().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_bumps_timestamp() {
        let db = test_db().await;
        let created = db.create_note(&fields("Ace Bailey")).await.unwrap();

        let update = NoteFields {
            player: Some("Ace Bailey".into()),
            college: Some("Rutgers".into()),
            ..NoteFields::default()
        };
        let updated = db.update_note(created.id, &update).await.unwrap();

        assert_eq!(updated.college.as_deref(), Some("Rutgers"));
        assert_eq!(updated.position, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn missing_note_is_not_found() {
        let db = test_db().await;
        assert!(db.get_note(99).await.unwrap_err().is_not_found());
        assert!(db.update_note(99, &fields("x")).await.unwrap_err().is_not_found());
        assert!(db.delete_note(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_returns_removed_row() {
        let db = test_db().await;
        let created = db.create_note(&fields("Dylan Harper")).await.unwrap();

        let deleted = db.delete_note(created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(db.list_notes().await.unwrap().is_empty());
    }
}
