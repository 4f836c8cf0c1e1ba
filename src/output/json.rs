//! JSON export of an allocation set.

use crate::error::ExportError;
use crate::models::AllocationSet;
use std::path::Path;

/// Write the allocation set as pretty-printed JSON to `path`.
pub fn write_json(set: &AllocationSet, path: &Path) -> Result<(), ExportError> {
    log::info!("Writing {} subnets to JSON {}", set.len(), path.display());
    let json = serde_json::to_string_pretty(set)?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
