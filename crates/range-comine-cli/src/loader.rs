//! CSV loading for `id,feature,x,y` object rows.

use std::path::Path;

use range_comine::{Object, ObjectSet};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Row {
    id: String,
    feature: String,
    x: f64,
    y: f64,
}

/// Reads an `ObjectSet` from a CSV file with a header row of
/// `id,feature,x,y`.
pub fn load_csv(path: &Path) -> Result<ObjectSet, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;

    let mut objects = Vec::new();
    for result in reader.deserialize() {
        let row: Row = result.map_err(|e| format!("failed to parse row in {}: {e}", path.display()))?;
        objects.push(Object::new(row.id, row.feature, row.x, row.y));
    }

    Ok(ObjectSet::new(objects))
}
