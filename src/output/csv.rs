//! CSV export of an allocation set.

use crate::error::ExportError;
use crate::models::{AllocationSet, AssignedSubnet, FIELD_NAMES};
use itertools::Itertools;
use std::path::Path;

const LINE_END: &str = "\r\n";

/// Quote a field when it contains a separator, quote or line break.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(&[',', '"', '\n', '\r'][..]) {
        // Enclose in double quotes and double any quotes within the field.
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

pub fn csv_header() -> String {
    FIELD_NAMES.join(",")
}

/// One CSV row, fields in header order.
pub fn csv_row(subnet: &AssignedSubnet) -> String {
    subnet
        .record()
        .iter()
        .map(|field| escape_csv_field(field))
        .join(",")
}

/// Header plus one row per subnet, in request order.
pub fn to_csv(set: &AllocationSet) -> String {
    let mut out = csv_header();
    out.push_str(LINE_END);
    for subnet in set {
        out.push_str(&csv_row(subnet));
        out.push_str(LINE_END);
    }
    out
}

/// Write the allocation set as CSV to `path`.
pub fn write_csv(set: &AllocationSet, path: &Path) -> Result<(), ExportError> {
    log::info!("Writing {} rows to CSV {}", set.len(), path.display());
    std::fs::write(path, to_csv(set)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
