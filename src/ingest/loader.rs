//! CSV Loader
//!
//! Reads the tab-separated place dataset and bulk-indexes it. The column
//! layout is fixed: id, name, address, phone, longitude, latitude (lon comes
//! before lat in the file, while the indexed document stores
//! `location: {lat, lon}`). Coordinates are indexed as the strings found in
//! the file; parsing happens at read time in the listing/recommendation
//! pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use serde_json::{json, Value};

use crate::backend::elastic::ElasticBackend;

/// Loads the dataset at `path` into the index. Malformed rows are skipped
/// with a warning; the row stream itself failing is an error.
pub async fn load_csv(backend: &ElasticBackend, path: &Path) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    let mut docs = Vec::new();
    let mut skipped = 0usize;
    for (line, result) in reader.records().enumerate() {
        let record = result.context("failed to read dataset row")?;
        match record_to_doc(&record) {
            Some(doc) => docs.push(doc),
            None => {
                tracing::warn!("skipping malformed dataset row {}", line + 2);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("skipped {} malformed rows", skipped);
    }

    backend.bulk_index(docs).await
}

/// Maps one dataset row to an `(id, document)` pair, or `None` when a column
/// is missing.
pub fn record_to_doc(record: &StringRecord) -> Option<(String, Value)> {
    let id = record.get(0)?;
    let name = record.get(1)?;
    let address = record.get(2)?;
    let phone = record.get(3)?;
    let lon = record.get(4)?;
    let lat = record.get(5)?;

    let doc = json!({
        "name": name,
        "address": address,
        "phone": phone,
        "location": { "lat": lat, "lon": lon },
    });

    Some((id.to_string(), doc))
}
