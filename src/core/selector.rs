// src/core/selector.rs
//! Structural selector used to locate candidate tables.
//!
//! Any CSS selector `scraper` understands: descendant and child combinators,
//! classes, ids, attribute tests (`div[class="table-wrap"] > table`), and so
//! on. The source string is kept for logs and round-tripping.

use std::fmt;
use std::str::FromStr;

use scraper::Selector;

use crate::error::Error;

/// Parsed `container → block → table` style path.
#[derive(Clone, Debug)]
pub struct TablePath {
    source: String,
    selector: Selector,
}

impl TablePath {
    pub fn parse(source: &str) -> Result<Self, Error> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidTablePath { path: s!(source), reason: s!("empty path") });
        }
        let selector = Selector::parse(trimmed)
            .map_err(|e| Error::InvalidTablePath { path: s!(source), reason: e.to_string() })?;
        Ok(Self { source: s!(trimmed), selector })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// Two paths are the same when they were written the same.
impl PartialEq for TablePath {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for TablePath {}

impl FromStr for TablePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
