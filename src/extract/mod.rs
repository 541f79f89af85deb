// src/extract/mod.rs
//! # Table extraction
//!
//! The three pieces that turn a parsed document into grids:
//!
//! ```text
//! Document ──TableFilter::select──▶ [Element]    (candidates with the marker)
//!     each table ──grid::resolve──▶ Grid         (span-expanded, rectangular)
//!                     └─ CellText::extract, once per physical cell
//! ```
//!
//! Nothing here does I/O or keeps state between calls, so documents and
//! tables can be processed in parallel.

pub mod cell;
pub mod filter;
pub mod grid;

pub use cell::{CellText, CellTextExtractor};
pub use filter::{Candidate, TableFilter, Verdict};
pub use grid::{Grid, SpanReport, dimensions, resolve, resolve_with_report};
