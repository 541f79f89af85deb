// src/config/consts.rs

// Table selection
pub const HEADER_MARKER: &str = "タイトル";
pub const TABLE_PATH: &str = "div.table-wrap div.table-block table";

// Cell text
pub const INLINE_TAGS: &[&str] = &["p", "li", "pre", "a"];

// Span limits (HTML caps colspan at 1000, rowspan at 65534)
pub const MAX_COLSPAN: usize = 1000;
pub const MAX_ROWSPAN: usize = 65534;
// Grid positions (rows x width) a strict run will allocate for one table
pub const MAX_GRID_CELLS: usize = 1 << 22;

// Discovery
pub const HTML_GLOB: &str = "**/*.html";

// Logging
pub const DEFAULT_LOG_FILE: &str = "log.txt";

// Concurrency
pub const WORKERS: usize = 4;
