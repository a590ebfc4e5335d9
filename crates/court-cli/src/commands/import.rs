use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use court_db::repos::import::TeamTable;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ImportArgs, ImportTarget};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportResponse {
    table: &'static str,
    imported: usize,
}

/// Handle `court import`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let table = match args.target {
        ImportTarget::Records => TeamTable::Records,
        ImportTarget::Stats => TeamTable::Stats,
    };
    let rows = read_rows(&args.file)?;

    let db = ctx.open_db().await?;
    let imported = db
        .import_rows(table, &rows)
        .await
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    output(
        &ImportResponse {
            table: table.name(),
            imported,
        },
        flags.format,
    )
}

/// Rows from a file holding a JSON array of objects.
fn read_rows(path: &Path) -> anyhow::Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_rows(&text).with_context(|| format!("malformed import file {}", path.display()))
}

fn parse_rows(text: &str) -> anyhow::Result<Vec<Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(rows) => Ok(rows),
        other => anyhow::bail!("expected a JSON array of rows, found {}", kind(&other)),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
