// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::consts::HTML_GLOB;
use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::export::write_grids;
use crate::extract::Grid;

/// Every `*.html` file under `dir`, recursively, sorted.
/// Unreadable entries are logged and skipped.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&root).join(HTML_GLOB);

    let mut found = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        match entry {
            Ok(path) if path.is_file() => found.push(path),
            Ok(_) => {}
            Err(e) => log::warn!("skipping {}: {}", e.path().display(), e.error()),
        }
    }
    found.sort();
    Ok(found)
}

/// Write `grids` to `path` in the configured format, creating parent
/// directories as needed. Returns the path written.
pub fn write_export(
    path: &Path,
    grids: &[Grid],
    export: &ExportOptions,
    header_marker: &str,
) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    write_grids(BufWriter::new(file), grids, export, header_marker)
        .map_err(|source| Error::Export { path: path.to_path_buf(), source })?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
