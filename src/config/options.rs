// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::core::TablePath;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    /// Directory scanned recursively for `*.html`.
    pub input_dir: PathBuf,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
    /// Documents processed concurrently. 0 lets rayon decide.
    pub workers: usize,
}

impl AppOptions {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            workers: WORKERS,
            ..Self::default()
        }
    }
}

/// What counts as a relevant table and how its cells are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Substring one `th`/`td` must contain for the table to be kept.
    pub header_marker: String,
    pub table_path: TablePath,
    /// Direct children of a cell whose full text is pulled in.
    pub inline_tags: Vec<String>,
    /// Turn dropped/clipped/overlapping cells into an error instead of
    /// tolerating them.
    pub strict_spans: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_marker: s!(HEADER_MARKER),
            table_path: TablePath::parse(TABLE_PATH).expect("TABLE_PATH is a compile-time constant"),
            inline_tags: INLINE_TAGS.iter().map(|t| s!(*t)).collect(),
            strict_spans: false,
        }
    }
}

impl ExtractOptions {
    /// Replace the inline tag set from a comma list (`"p,li,pre,a"`).
    /// Names are lowercased; blanks and duplicates are dropped.
    pub fn set_inline_tags(&mut self, list: &str) {
        let mut tags: Vec<String> = Vec::new();
        for tag in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let tag = tag.to_ascii_lowercase();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        self.inline_tags = tags;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delim(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Where exports go. `None` writes next to each source document.
    pub out_dir: Option<PathBuf>,
    /// When a document has several tables, keep only the first header row.
    pub skip_repeated_headers: bool,
}

impl ExportOptions {
    /// `<stem>.<ext>` next to `doc`. With `out_dir` set, the file goes there
    /// instead, keeping `doc`'s sub-directory relative to `root` so documents
    /// with the same name in different folders do not collide.
    pub fn out_path_for(&self, doc: &Path, root: &Path) -> PathBuf {
        let stem = doc.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| s!("table"));
        let file_name = join!(&stem, ".", self.format.ext());
        match &self.out_dir {
            Some(dir) => {
                let rel_dir = doc.strip_prefix(root).ok().and_then(Path::parent).unwrap_or(Path::new(""));
                dir.join(rel_dir).join(file_name)
            }
            None => doc.with_file_name(file_name),
        }
    }
}
