// src/lib.rs
//! Extract span-resolved grids from HTML tables.
//!
//! ```text
//! html ─parse─▶ Document ─TableFilter─▶ tables ─resolve─▶ Grid ─export─▶ csv/tsv
//! ```

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod extract;
pub mod file;
pub mod logger;
pub mod progress;
pub mod runner;

pub use config::{AppOptions, ExportFormat, ExportOptions, ExtractOptions};
pub use crate::core::{Document, Element, Node, Tag, TablePath, parse_document};
pub use error::{Error, Result};
pub use extract::{CellText, CellTextExtractor, Grid, SpanReport, TableFilter, resolve};
pub use runner::{DocumentOutcome, Extraction, RunSummary, extract_html, process_document, run};
