// src/core/parse.rs
//! Adapter from `scraper` (html5ever) to our read-only tree.
//!
//! A [`Document`] keeps the parsed `scraper::Html`; structural queries run on
//! it directly and only the matched elements are converted. Only elements and
//! text survive the conversion; comments, doctypes and processing
//! instructions are dropped. Text arrives entity-decoded from the tokenizer.

use scraper::{ElementRef, Html};

use super::dom::{Element, Node};
use super::selector::TablePath;

/// A parsed HTML document.
#[derive(Clone, Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document. html5ever never fails; broken markup is
    /// repaired the way browsers do (implicit `<tbody>`, closed cells, ...).
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Every element matching `path`, in document order.
    pub fn select(&self, path: &TablePath) -> Vec<Element> {
        self.html.select(path.selector()).map(convert).collect()
    }

    /// The whole tree, converted.
    pub fn root(&self) -> Element {
        convert(self.html.root_element())
    }
}

pub fn parse_document(html: &str) -> Document {
    Document::parse(html)
}

fn convert(el: ElementRef<'_>) -> Element {
    let value = el.value();
    let mut out = Element::new(value.name());
    for (name, attr) in value.attrs() {
        out.set_attr(name, attr);
    }
    for child in el.children() {
        match child.value() {
            scraper::Node::Text(text) => out.push(Node::Text(s!(&**text))),
            scraper::Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    out.push(Node::Element(convert(child_el)));
                }
            }
            _ => {}
        }
    }
    out
}
