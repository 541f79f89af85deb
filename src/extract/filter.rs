// src/extract/filter.rs
//! Picks the tables worth extracting from a document.
//!
//! Candidates come from the structural path only; tables anywhere else are
//! never looked at. A candidate survives when one of its `th`/`td` cells
//! contains the header marker.

use crate::config::ExtractOptions;
use crate::core::sanitize::{decode_entities, normalize_ws};
use crate::core::{Document, Element, TablePath};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Kept,
    Skipped,
}

/// One candidate table and what the filter decided about it.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Position among all candidates, document order.
    pub index: usize,
    pub table: Element,
    pub verdict: Verdict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableFilter {
    header_marker: String,
    table_path: TablePath,
}

impl TableFilter {
    pub fn new(header_marker: &str, table_path: TablePath) -> Self {
        Self { header_marker: s!(header_marker), table_path }
    }

    pub fn from_options(opts: &ExtractOptions) -> Self {
        Self::new(&opts.header_marker, opts.table_path.clone())
    }

    pub fn header_marker(&self) -> &str {
        &self.header_marker
    }

    /// Every candidate with its verdict. Skips are logged.
    pub fn classify(&self, doc: &Document) -> Vec<Candidate> {
        doc.select(&self.table_path)
            .into_iter()
            .enumerate()
            .map(|(index, table)| {
                let verdict = if self.has_marker(&table) {
                    Verdict::Kept
                } else {
                    log::info!(
                        "skipping table {index} under {:?}: no cell contains {:?}",
                        self.table_path.as_str(),
                        self.header_marker
                    );
                    log::debug!("skipped table {index} starts with {:?}", preview(&table));
                    Verdict::Skipped
                };
                Candidate { index, table, verdict }
            })
            .collect()
    }

    /// Kept tables only, document order.
    pub fn select(&self, doc: &Document) -> Vec<Element> {
        self.classify(doc)
            .into_iter()
            .filter(|c| c.verdict == Verdict::Kept)
            .map(|c| c.table)
            .collect()
    }

    /// Does any `th`/`td` of `table` contain the marker?
    pub fn has_marker(&self, table: &Element) -> bool {
        table
            .descendants()
            .into_iter()
            .filter(|el| el.tag().is_cell())
            .any(|cell| decode_entities(&cell.text()).trim().contains(self.header_marker.as_str()))
    }
}

/// First few words of a table, for log lines.
fn preview(table: &Element) -> String {
    normalize_ws(&table.text()).chars().take(60).collect()
}
