// src/core/dom.rs
//! Read-only document tree the extraction core works against.
//!
//! Elements are converted by [`crate::core::parse`] (or built by hand in
//! tests) and never mutated afterwards. Children are either text or elements; the
//! element tag is classified into the handful of kinds the core dispatches on,
//! everything else lands in [`Tag::Other`] and is matched by name only.

/// Tag kinds the core cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Table,
    Thead,
    Tbody,
    Tfoot,
    Tr,
    Th,
    Td,
    P,
    Li,
    Pre,
    A,
    Div,
    Other,
}

impl Tag {
    /// Classify a tag name. Matching is ASCII case-insensitive.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "table" => Tag::Table,
            "thead" => Tag::Thead,
            "tbody" => Tag::Tbody,
            "tfoot" => Tag::Tfoot,
            "tr" => Tag::Tr,
            "th" => Tag::Th,
            "td" => Tag::Td,
            "p" => Tag::P,
            "li" => Tag::Li,
            "pre" => Tag::Pre,
            "a" => Tag::A,
            "div" => Tag::Div,
            _ => Tag::Other,
        }
    }

    pub fn is_cell(self) -> bool {
        matches!(self, Tag::Th | Tag::Td)
    }

    pub fn is_section(self) -> bool {
        matches!(self, Tag::Thead | Tag::Tbody | Tag::Tfoot)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    tag: Tag,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        let tag = Tag::from_name(&name);
        Self { name, tag, attrs: Vec::new(), children: Vec::new() }
    }

    /// Builder-style attribute setter. Attribute names are lowercased.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child appender.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_child(Node::Text(s!(text)))
    }

    pub fn with_element(self, el: Element) -> Self {
        self.with_child(Node::Element(el))
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = s!(value),
            None => self.attrs.push((name, s!(value))),
        }
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, text skipped.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Recursive text content: every descendant text node, concatenated in
    /// document order with nothing inserted between them.
    pub fn text(&self) -> String {
        let mut out = s!();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// All descendant elements in pre-order, `self` excluded.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack: Vec<&Element> = self.child_elements().collect();
        stack.reverse();
        while let Some(el) = stack.pop() {
            out.push(el);
            let len = stack.len();
            stack.extend(el.child_elements());
            stack[len..].reverse();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_attr("class", "outer wrap")
            .with_text(" a ")
            .with_element(Element::new("P").with_text("b").with_element(Element::new("span").with_text("c")))
            .with_element(Element::new("ul").with_element(Element::new("li").with_text("d")))
    }

    #[test]
    fn text_is_recursive_and_unseparated() {
        assert_eq!(sample().text(), " a bcd");
    }

    #[test]
    fn names_are_lowercased_and_classified() {
        let el = sample();
        let p = el.child_elements().next().unwrap();
        assert_eq!(p.name(), "p");
        assert_eq!(p.tag(), Tag::P);
        assert_eq!(Tag::from_name("SPAN"), Tag::Other);
    }

    #[test]
    fn descendants_are_pre_order() {
        let el = sample();
        let names: Vec<&str> = el.descendants().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["p", "span", "ul", "li"]);
    }

    #[test]
    fn class_lookup_splits_on_whitespace() {
        let el = sample();
        assert!(el.has_class("wrap"));
        assert!(!el.has_class("wra"));
        assert_eq!(el.attr("CLASS"), Some("outer wrap"));
    }
}
