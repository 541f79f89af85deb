// src/runner.rs
//! Batch pipeline: discover → read → filter → resolve → export.
//!
//! Documents are independent, so they fan out over a rayon pool. A failing
//! document is logged and recorded in the summary; it never stops the rest.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    config::{AppOptions, ExtractOptions, consts::MAX_GRID_CELLS},
    core::{Document, parse_document},
    error::{Error, Result},
    extract::{CellTextExtractor, Grid, TableFilter, Verdict, dimensions, resolve_with_report},
    file::{discover_documents, write_export},
    progress::Progress,
};

/// Grids of the kept tables of one document, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub grids: Vec<Grid>,
    /// Candidates rejected by the header marker.
    pub skipped: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentOutcome {
    Exported { output: PathBuf, tables: usize, skipped: usize },
    /// Normal, reportable: nothing in the document carried the marker.
    NoMatchingTables { skipped: usize },
}

#[derive(Debug)]
pub struct DocumentResult {
    pub source: PathBuf,
    pub outcome: Result<DocumentOutcome>,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub documents: Vec<DocumentResult>,
}

impl RunSummary {
    pub fn exported(&self) -> impl Iterator<Item = &DocumentResult> {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, Ok(DocumentOutcome::Exported { .. })))
    }

    pub fn no_match(&self) -> impl Iterator<Item = &DocumentResult> {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, Ok(DocumentOutcome::NoMatchingTables { .. })))
    }

    pub fn failed(&self) -> impl Iterator<Item = &DocumentResult> {
        self.documents.iter().filter(|d| d.outcome.is_err())
    }
}

/// Filter and resolve every table of an already parsed document.
/// Errors only in strict mode, on the first table with malformed spans or
/// more than `MAX_GRID_CELLS` grid positions.
pub fn extract_document(doc: &Document, opts: &ExtractOptions) -> Result<Extraction> {
    let filter = TableFilter::from_options(opts);
    let extractor = CellTextExtractor::new(&opts.inline_tags);

    let mut out = Extraction::default();
    for candidate in filter.classify(doc) {
        if candidate.verdict == Verdict::Skipped {
            out.skipped += 1;
            continue;
        }
        if opts.strict_spans {
            let (height, width) = dimensions(&candidate.table);
            if height.saturating_mul(width) > MAX_GRID_CELLS {
                return Err(Error::TableTooLarge { table: candidate.index, height, width });
            }
        }
        let (grid, report) = resolve_with_report(&candidate.table, &extractor);
        if !report.is_clean() {
            if opts.strict_spans {
                return Err(Error::MalformedSpan {
                    table: candidate.index,
                    dropped: report.dropped,
                    clipped: report.clipped,
                    overwritten: report.overwritten,
                });
            }
            log::debug!("table {}: tolerated irregular spans {report:?}", candidate.index);
        }
        out.grids.push(grid);
    }
    Ok(out)
}

/// [`extract_document`] on raw HTML.
pub fn extract_html(html: &str, opts: &ExtractOptions) -> Result<Extraction> {
    extract_document(&parse_document(html), opts)
}

/// Read one document, extract, and export next to it (or under `out_dir`).
pub fn process_document(path: &Path, opts: &AppOptions) -> Result<DocumentOutcome> {
    let html = fs::read_to_string(path)
        .map_err(|source| Error::DocumentAccess { path: path.to_path_buf(), source })?;

    let Extraction { grids, skipped } = extract_html(&html, &opts.extract)?;
    if grids.is_empty() {
        log::warn!(
            "no tables with header {:?} found in {}",
            opts.extract.header_marker,
            path.display()
        );
        return Ok(DocumentOutcome::NoMatchingTables { skipped });
    }

    let target = opts.export.out_path_for(path, &opts.input_dir);
    let output = write_export(&target, &grids, &opts.export, &opts.extract.header_marker)?;
    log::info!("wrote {} table(s) from {} to {}", grids.len(), path.display(), output.display());
    Ok(DocumentOutcome::Exported { output, tables: grids.len(), skipped })
}

/// Top-level runner over `opts.input_dir`.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let docs = discover_documents(&opts.input_dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(docs.len());
    }
    if docs.is_empty() {
        let msg = format!("no HTML files found in {}", opts.input_dir.display());
        log::warn!("{msg}");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&msg);
        }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(opts.workers).build()?;
    let documents: Vec<DocumentResult> = pool.install(|| {
        docs.par_iter()
            .map(|path| {
                log::info!("processing {}", path.display());
                let outcome = process_document(path, opts);
                if let Err(e) = &outcome {
                    log::error!("error processing {}: {e}", path.display());
                }
                DocumentResult { source: path.clone(), outcome }
            })
            .collect()
    });

    if let Some(p) = progress.as_deref_mut() {
        for doc in &documents {
            p.item_done(doc);
        }
        p.finish();
    }
    Ok(RunSummary { documents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{NullProgress, Progress};

    #[derive(Default)]
    struct Recorder {
        total: Option<usize>,
        lines: Vec<String>,
        done: usize,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) {
            self.total = Some(total);
        }
        fn log(&mut self, msg: &str) {
            self.lines.push(s!(msg));
        }
        fn item_done(&mut self, _doc: &DocumentResult) {
            self.done += 1;
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn empty_directory_is_reported_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let opts = AppOptions::new(dir.path());

        let mut rec = Recorder::default();
        let summary = run(&opts, Some(&mut rec as &mut dyn Progress)).unwrap();
        assert!(summary.documents.is_empty());
        assert_eq!(rec.total, Some(0));
        assert_eq!(rec.lines.len(), 1);
        assert!(rec.lines[0].starts_with("no HTML files found"));
        assert!(rec.finished);

        let mut null = NullProgress;
        assert!(run(&opts, Some(&mut null as &mut dyn Progress)).unwrap().documents.is_empty());
    }

    #[test]
    fn progress_sees_every_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "<p>nothing</p>").unwrap();
        std::fs::write(dir.path().join("b.html"), "<p>here</p>").unwrap();

        let mut rec = Recorder::default();
        let summary = run(&AppOptions::new(dir.path()), Some(&mut rec as &mut dyn Progress)).unwrap();
        assert_eq!(rec.total, Some(2));
        assert_eq!(rec.done, 2);
        assert_eq!(summary.no_match().count(), 2);
    }

    #[test]
    fn strict_mode_refuses_oversized_grids_before_allocating() {
        let mut html = String::from(
            r#"<div class="table-wrap"><div class="table-block"><table>
               <tr><th>タイトル</th><td colspan=1000></td></tr>"#,
        );
        html.push_str(&"<tr></tr>".repeat(4200));
        html.push_str("</table></div></div>");

        let strict = ExtractOptions { strict_spans: true, ..ExtractOptions::default() };
        match extract_html(&html, &strict) {
            Err(Error::TableTooLarge { table, height, width }) => {
                assert_eq!(table, 0);
                assert_eq!((height, width), (4201, 1001));
            }
            other => panic!("expected TableTooLarge, got {other:?}"),
        }
    }
}
