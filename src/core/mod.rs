// src/core/mod.rs

pub mod dom;
pub mod parse;
pub mod sanitize;
pub mod selector;

pub use dom::{Element, Node, Tag};
pub use parse::{Document, parse_document};
pub use selector::TablePath;
