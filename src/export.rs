// src/export.rs
//! CSV/TSV serialisation of resolved grids.
//!
//! All kept tables of a document go into one file, back to back. Records
//! are flexible: tables of different widths keep their own width.

use std::io::Write;

use crate::config::options::ExportOptions;
use crate::extract::Grid;

/// A row repeats the header when one of its cells is the marker itself
/// (trimmed, case-insensitive).
fn is_header_row(row: &[String], marker: &str) -> bool {
    let marker = marker.trim().to_lowercase();
    !marker.is_empty() && row.iter().any(|cell| cell.trim().to_lowercase() == marker)
}

/// Stream `grids` to `out`.
pub fn write_grids<W: Write>(
    out: W,
    grids: &[Grid],
    export: &ExportOptions,
    header_marker: &str,
) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .flexible(true)
        .from_writer(out);

    let mut wrote_any = false;
    for grid in grids {
        for row in grid.rows() {
            if export.skip_repeated_headers && wrote_any && is_header_row(row, header_marker) {
                continue;
            }
            wtr.write_record(row)?;
            wrote_any = true;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Whole export as a string (same bytes `write_grids` would produce).
pub fn to_export_string(grids: &[Grid], export: &ExportOptions, header_marker: &str) -> csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_grids(&mut buf, grids, export, header_marker)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
