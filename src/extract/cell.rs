// src/extract/cell.rs
//! Cell text policy.
//!
//! Shallow on purpose: only the cell's direct children are looked at. Text
//! children count as-is; element children count only when their tag is in
//! the inline set, and then with their whole recursive text. Anything else,
//! including an allowed tag buried inside a `div` or `span`, contributes
//! nothing.

use crate::config::consts::INLINE_TAGS;
use crate::core::sanitize::decode_entities;
use crate::core::{Element, Node};

/// Turns one `th`/`td` into the string stored in the grid.
pub trait CellText {
    fn extract(&self, cell: &Element) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellTextExtractor {
    inline_tags: Vec<String>,
}

impl Default for CellTextExtractor {
    fn default() -> Self {
        Self::new(INLINE_TAGS.iter().map(|t| s!(*t)))
    }
}

impl CellTextExtractor {
    pub fn new<I, S>(inline_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            inline_tags: inline_tags.into_iter().map(|t| t.as_ref().to_ascii_lowercase()).collect(),
        }
    }

    fn is_inline(&self, el: &Element) -> bool {
        self.inline_tags.iter().any(|t| t == el.name())
    }

    fn fragment(&self, child: &Node) -> Option<String> {
        let text = match child {
            Node::Text(t) => s!(t.trim()),
            Node::Element(el) if self.is_inline(el) => s!(el.text().trim()),
            Node::Element(_) => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

impl CellText for CellTextExtractor {
    fn extract(&self, cell: &Element) -> String {
        let fragments: Vec<String> = cell.children().iter().filter_map(|c| self.fragment(c)).collect();
        decode_entities(&fragments.join(" "))
    }
}
