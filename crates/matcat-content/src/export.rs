//! Catalog export formats.
//!
//! JSON preserves the whole model (and loads back); CSV flattens to one row
//! per entry for spreadsheet use.

use matcat_core::{Catalog, Error, Result};

/// Serializes a catalog to pretty-printed JSON.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Loads a catalog from its JSON form.
pub fn from_json(text: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(text)?)
}

/// Serializes a catalog to CSV, one row per entry.
///
/// Columns: section ordinal, section title, section kind, script name,
/// synopsis.
pub fn to_csv(catalog: &Catalog) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["section", "title", "kind", "name", "synopsis"])
        .map_err(|e| Error::export(e.to_string()))?;

    for (section, entry) in catalog.entries() {
        writer
            .write_record([
                section.number.to_string(),
                section.title.clone(),
                section.kind.to_string(),
                entry.name.to_string(),
                entry.synopsis.clone(),
            ])
            .map_err(|e| Error::export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::export(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
