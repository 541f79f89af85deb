// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::config::consts::{DEFAULT_LOG_FILE, HEADER_MARKER, TABLE_PATH, WORKERS};
use crate::config::{AppOptions, ExportFormat};
use crate::core::TablePath;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, DocumentOutcome, DocumentResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Extract span-resolved grids from HTML tables into CSV/TSV files.
#[derive(Debug, Parser)]
#[command(name = "tablegrid", version, about)]
pub struct Args {
    /// Directory searched recursively for *.html
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Substring a header/data cell must contain for its table to be kept
    #[arg(short, long, default_value = HEADER_MARKER)]
    pub marker: String,

    /// Where candidate tables live (descendant ' ' and child '>' steps)
    #[arg(long, default_value = TABLE_PATH)]
    pub table_path: TablePath,

    /// Cell children whose full text is kept, comma separated
    #[arg(long, value_delimiter = ',', default_value = "p,li,pre,a")]
    pub inline_tags: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Write exports here (mirroring sub-directories) instead of next to each document
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Fail a document when a table has dropped, clipped or overlapping cells
    #[arg(long)]
    pub strict: bool,

    /// Keep only the first header row when a document has several tables
    #[arg(long)]
    pub skip_repeated_headers: bool,

    /// Documents processed in parallel (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = WORKERS)]
    pub workers: usize,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log to stderr only
    #[arg(long)]
    pub no_log_file: bool,

    /// -v for debug, -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::new(&self.input);
        opts.workers = self.workers;

        opts.extract.header_marker = self.marker.clone();
        opts.extract.table_path = self.table_path.clone();
        opts.extract.set_inline_tags(&self.inline_tags.join(","));
        opts.extract.strict_spans = self.strict;

        opts.export.format = self.format.into();
        opts.export.out_dir = self.out_dir.clone();
        opts.export.skip_repeated_headers = self.skip_repeated_headers;
        opts
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Prints one line per document to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Processing {total} document(s)");
    }

    fn item_done(&mut self, doc: &DocumentResult) {
        let src = doc.source.display();
        match &doc.outcome {
            Ok(DocumentOutcome::Exported { output, tables, .. }) => {
                println!("  {src} -> {} ({tables} table(s))", output.display())
            }
            Ok(DocumentOutcome::NoMatchingTables { skipped }) => {
                println!("  {src}: no matching tables ({skipped} skipped)")
            }
            Err(e) => println!("  {src}: FAILED: {e}"),
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let log_path = (!args.no_log_file).then_some(args.log_file.as_path());
    crate::logger::init(log_path, args.log_level())?;

    let opts = args.to_options();
    let mut progress = ConsoleProgress;
    let summary = runner::run(&opts, Some(&mut progress as &mut dyn Progress))?;

    println!(
        "Done: {} exported, {} without matching tables, {} failed",
        summary.exported().count(),
        summary.no_match().count(),
        summary.failed().count()
    );
    Ok(())
}
