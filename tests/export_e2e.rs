// tests/export_e2e.rs
//
// Whole pipeline over a directory of documents.
//
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tablegrid::export::to_export_string;
use tablegrid::runner::DocumentOutcome;
use tablegrid::{AppOptions, Error, ExportFormat, ExtractOptions, extract_html, process_document, run};

fn page(tables: &[&str]) -> String {
    let body: String = tables
        .iter()
        .map(|t| format!(r#"<div class="table-wrap"><div class="table-block">{t}</div></div>"#))
        .collect();
    format!("<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>{body}</body></html>")
}

const PROPS: &str = "<table>
    <tr><th>タイトル</th><th>en</th><th>ja</th></tr>
    <tr><td rowspan=2>greeting</td><td>Hello</td><td>こんにちは</td></tr>
    <tr><td colspan=2>Hi, &amp; welcome</td></tr>
  </table>";

const MORE: &str = "<table>
    <tr><th>タイトル</th><th>en</th><th>ja</th></tr>
    <tr><td>bye</td><td>Bye</td><td>さようなら</td></tr>
  </table>";

const OTHER: &str = "<table><tr><th>Unrelated</th></tr><tr><td>x</td></tr></table>";

fn write(dir: &Path, rel: &str, contents: &[u8]) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn document_tables_are_exported_back_to_back() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "strings.html", page(&[PROPS, OTHER, MORE]).as_bytes());

    let opts = AppOptions::new(dir.path());
    let outcome = process_document(&dir.path().join("strings.html"), &opts).unwrap();

    let out = dir.path().join("strings.csv");
    assert_eq!(outcome, DocumentOutcome::Exported { output: out.clone(), tables: 2, skipped: 1 });
    assert_eq!(
        lines(&out),
        [
            "タイトル,en,ja",
            "greeting,Hello,こんにちは",
            "greeting,\"Hi, & welcome\",\"Hi, & welcome\"",
            "タイトル,en,ja",
            "bye,Bye,さようなら",
        ]
    );
}

#[test]
fn repeated_headers_can_be_skipped_and_tsv_chosen() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "strings.html", page(&[PROPS, MORE]).as_bytes());

    let mut opts = AppOptions::new(dir.path());
    opts.export.format = ExportFormat::Tsv;
    opts.export.skip_repeated_headers = true;
    process_document(&dir.path().join("strings.html"), &opts).unwrap();

    let got = lines(&dir.path().join("strings.tsv"));
    assert_eq!(got.len(), 4);
    assert_eq!(got[0], "タイトル\ten\tja");
    assert_eq!(got[3], "bye\tBye\tさようなら");
}

#[test]
fn no_matching_tables_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "plain.html", page(&[OTHER]).as_bytes());

    let opts = AppOptions::new(dir.path());
    let outcome = process_document(&dir.path().join("plain.html"), &opts).unwrap();
    assert_eq!(outcome, DocumentOutcome::NoMatchingTables { skipped: 1 });
    assert!(!dir.path().join("plain.csv").exists());
}

#[test]
fn batch_survives_a_bad_document() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.html", page(&[PROPS]).as_bytes());
    write(dir.path(), "nested/b.html", page(&[MORE]).as_bytes());
    write(dir.path(), "plain.html", page(&[OTHER]).as_bytes());
    write(dir.path(), "broken.html", &[0xff, 0xfe, b'<', 0x80]);
    write(dir.path(), "notes.txt", b"<table></table>");

    let out_dir = dir.path().join("out");
    let mut opts = AppOptions::new(dir.path());
    opts.export.out_dir = Some(out_dir.clone());
    let summary = run(&opts, None).unwrap();

    assert_eq!(summary.documents.len(), 4);
    assert_eq!(summary.exported().count(), 2);
    assert_eq!(summary.no_match().count(), 1);

    let failed: Vec<_> = summary.failed().collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].source.ends_with("broken.html"));
    assert!(matches!(failed[0].outcome, Err(Error::DocumentAccess { .. })));

    assert!(out_dir.join("a.csv").exists());
    assert!(out_dir.join("nested").join("b.csv").exists());
}

#[test]
fn strict_mode_rejects_overflowing_rows() {
    let html = page(&["<table>
        <tr><th>タイトル</th><td rowspan=2>r</td></tr>
        <tr><td>a</td><td>overflow</td></tr>
      </table>"]);

    let tolerant = extract_html(&html, &ExtractOptions::default()).unwrap();
    assert_eq!(tolerant.grids.len(), 1);
    assert_eq!(tolerant.grids[0].rows()[1], ["a", "r"]);

    let strict = ExtractOptions { strict_spans: true, ..ExtractOptions::default() };
    match extract_html(&html, &strict) {
        Err(Error::MalformedSpan { table, dropped, .. }) => {
            assert_eq!(table, 0);
            assert_eq!(dropped, 1);
        }
        other => panic!("expected MalformedSpan, got {other:?}"),
    }
}

#[test]
fn in_memory_export_matches_file_format() {
    let extraction = extract_html(&page(&[MORE]), &ExtractOptions::default()).unwrap();
    let text = to_export_string(&extraction.grids, &Default::default(), "タイトル").unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), ["タイトル,en,ja", "bye,Bye,さようなら"]);
}
