// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning documents into grids.
///
/// A document without matching tables is not here: that is a normal
/// outcome (see `runner::DocumentOutcome::NoMatchingTables`).
#[derive(Debug, Error)]
pub enum Error {
    /// The source document could not be read.
    #[error("cannot read document {path}: {source}")]
    DocumentAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only raised in strict mode; tolerant resolution never fails.
    #[error(
        "table {table} has malformed spans: {dropped} cell(s) dropped, \
         {clipped} span(s) clipped, {overwritten} position(s) overwritten"
    )]
    MalformedSpan {
        table: usize,
        dropped: usize,
        clipped: usize,
        overwritten: usize,
    },

    /// Only raised in strict mode, before the grid is allocated.
    #[error("table {table} is too large: {height} row(s) x {width} column(s)")]
    TableTooLarge { table: usize, height: usize, width: usize },

    #[error("invalid table path {path:?}: {reason}")]
    InvalidTablePath { path: String, reason: String },

    #[error("cannot export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid document pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("logger already installed")]
    LoggerInit(#[from] log::SetLoggerError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
