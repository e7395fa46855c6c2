//! Reading documents exported from the content store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use news_schema::Document;
use serde_json::Value;

/// Read the raw entries of a JSON file holding either one document object or an array of them.
pub fn read_entries(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))?;
    let raw: Value = serde_json::from_str(&text).with_context(|| format!("parsing JSON from '{}'", path.display()))?;

    let entries = match raw {
        Value::Array(items) => items,
        other => vec![other],
    };
    info!("read {} document(s) from '{}'", entries.len(), path.display());
    Ok(entries)
}

/// Load every document in a JSON file; the first entry that does not fit the model is an error.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    read_entries(path)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<Document>(entry)
                .with_context(|| format!("document #{index} in '{}'", path.display()))
        })
        .collect()
}

/// Short label for a document in CLI output: its `_id`, or its position when it has none.
pub fn label(doc: &Document, index: usize) -> String {
    match doc.id() {
        Some(id) => format!("{} {id}", doc.type_name()),
        None => format!("{} #{index}", doc.type_name()),
    }
}

/// Label for an entry that may not have parsed, read straight from its `_type` and `_id`.
pub fn entry_label(entry: &Value, index: usize) -> String {
    let type_name = entry.get("_type").and_then(Value::as_str).unwrap_or("document");
    match entry.get("_id").and_then(Value::as_str) {
        Some(id) => format!("{type_name} {id}"),
        None => format!("{type_name} #{index}"),
    }
}
