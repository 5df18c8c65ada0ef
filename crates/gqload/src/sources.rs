//! CSV and JSON record sources.
//!
//! Both produce the same shape: one JSON object per row. CSV cells are
//! always strings (an empty cell is an empty string, not a missing value);
//! a short row simply lacks its trailing keys.

use anyhow::{bail, Context};
use gqload_core::Record;
use serde_json::Value;
use std::path::Path;

pub fn read_csv(path: &Path) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("could not read CSV file {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("could not read CSV headers from {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.with_context(|| format!("malformed CSV in {}", path.display()))?;
        let mut record = Record::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            record.insert(name.to_string(), Value::String(cell.to_string()));
        }
        rows.push(record);
    }
    Ok(rows)
}

pub fn read_json(path: &Path) -> anyhow::Result<Vec<Record>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read JSON file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("could not parse JSON file {}", path.display()))?;

    let Value::Array(items) = value else {
        bail!("{} must contain a JSON array of objects", path.display());
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => bail!("row {} in {} is not an object", index, path.display()),
        })
        .collect()
}
