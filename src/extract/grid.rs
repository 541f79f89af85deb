// src/extract/grid.rs
//! Span resolution: rows of possibly merged cells in, dense grid out.
//!
//! 1. Width is the largest per-row colspan sum; height is the row count.
//! 2. Every position starts unset.
//! 3. Rows top to bottom, cells in order. The cursor skips positions already
//!    claimed by a rowspan from above; once it runs off the right edge the
//!    rest of the row is dropped. Each placed cell fills its
//!    `rowspan × colspan` rectangle, clipped to the grid.
//! 4. Whatever is still unset becomes "".

use super::cell::CellText;
use crate::core::sanitize::{parse_colspan, parse_rowspan};
use crate::core::{Element, Tag};

/// Dense, rectangular, span-resolved table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Irregularities met while resolving. All zero for well-formed tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanReport {
    /// Cells never placed because the cursor was past the last column.
    pub dropped: usize,
    /// Placed cells whose rectangle reached past the last row or column.
    pub clipped: usize,
    /// Positions written by more than one cell (last writer wins).
    pub overwritten: usize,
}

impl SpanReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolve `table`, tolerating malformed spans.
pub fn resolve<E: CellText + ?Sized>(table: &Element, extractor: &E) -> Grid {
    resolve_with_report(table, extractor).0
}

/// [`resolve`], plus a count of what had to be dropped or clipped.
pub fn resolve_with_report<E: CellText + ?Sized>(table: &Element, extractor: &E) -> (Grid, SpanReport) {
    let rows: Vec<Vec<&Element>> = table_rows(table).into_iter().map(row_cells).collect();
    let mut report = SpanReport::default();

    let height = rows.len();
    if height == 0 {
        return (Grid::default(), report);
    }
    let width = width_of(&rows);

    // Slots index into `texts`; None is "unset", distinct from "".
    let mut slots: Vec<Option<usize>> = vec![None; height * width];
    let mut texts: Vec<String> = Vec::new();

    for (r, cells) in rows.iter().enumerate() {
        let mut col = 0;
        for (i, cell) in cells.iter().enumerate() {
            while col < width && slots[r * width + col].is_some() {
                col += 1;
            }
            if col >= width {
                report.dropped += cells.len() - i;
                break;
            }

            let rowspan = parse_rowspan(cell.attr("rowspan"));
            let colspan = parse_colspan(cell.attr("colspan"));
            let id = texts.len();
            texts.push(extractor.extract(cell));

            let row_end = (r + rowspan).min(height);
            let col_end = (col + colspan).min(width);
            if row_end < r + rowspan || col_end < col + colspan {
                report.clipped += 1;
            }
            for rr in r..row_end {
                for cc in col..col_end {
                    let slot = &mut slots[rr * width + cc];
                    if slot.is_some() {
                        report.overwritten += 1;
                    }
                    *slot = Some(id);
                }
            }
            col += colspan;
        }
    }

    let rows = (0..height)
        .map(|r| {
            slots[r * width..(r + 1) * width]
                .iter()
                .map(|slot| slot.map_or_else(|| s!(), |id| texts[id].clone()))
                .collect()
        })
        .collect();

    (Grid { width, rows }, report)
}

/// `(height, width)` the resolved grid of `table` will have, without
/// resolving it.
pub fn dimensions(table: &Element) -> (usize, usize) {
    let rows: Vec<Vec<&Element>> = table_rows(table).into_iter().map(row_cells).collect();
    (rows.len(), width_of(&rows))
}

/// Widest row, counting colspans.
fn width_of(rows: &[Vec<&Element>]) -> usize {
    rows.iter()
        .map(|cells| cells.iter().map(|c| parse_colspan(c.attr("colspan"))).sum::<usize>())
        .max()
        .unwrap_or(0)
}

/// `tr` elements of `table`: direct children, or children of its
/// thead/tbody/tfoot sections. Nested tables are not entered.
pub fn table_rows(table: &Element) -> Vec<&Element> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        match child.tag() {
            Tag::Tr => rows.push(child),
            t if t.is_section() => rows.extend(child.child_elements().filter(|e| e.tag() == Tag::Tr)),
            _ => {}
        }
    }
    rows
}

/// Direct `th`/`td` children of a row.
pub fn row_cells(row: &Element) -> Vec<&Element> {
    row.child_elements().filter(|e| e.tag().is_cell()).collect()
}
