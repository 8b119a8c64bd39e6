//! A minimal SVG element tree.

use std::fmt::Write;

use crate::types::Attributes;

use super::namespace;

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Character data, escaped on output.
    Text(String),
    /// Markup written verbatim, e.g. user supplied definitions.
    Raw(String),
}

/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Set one attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Set every attribute from a style map.
    pub fn attrs(mut self, attributes: &Attributes) -> Self {
        self.attributes.extend_from(attributes);
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.children.extend(elements.into_iter().map(Node::Element));
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id")
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search for an element by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|e| e.find_by_id(id))
    }

    /// Every element of the subtree with the given tag name.
    pub fn descendants_named<'a>(&'a self, name: &'a str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in self.elements() {
            if child.name == name {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }

    /// Concatenated character data of the element's direct children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every identifier declared in the subtree, including ids inside raw
    /// markup.
    pub fn declared_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<String>) {
        if let Some(id) = self.id() {
            ids.push(id.to_string());
        }
        for child in &self.children {
            match child {
                Node::Element(e) => e.collect_ids(ids),
                Node::Raw(markup) => ids.extend(
                    namespace::references(markup)
                        .into_iter()
                        .filter(|r| r.kind == namespace::ReferenceKind::Id)
                        .map(|r| r.name.to_string()),
                ),
                Node::Text(_) => {}
            }
        }
    }

    /// Serialize as indented SVG markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out, 0);
        out
    }

    fn write_svg(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.name);
        for (key, value) in self.attributes.iter() {
            let _ = write!(out, " {}=\"{}\"", key, escape_xml(value));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        let inline = self
            .children
            .iter()
            .all(|node| matches!(node, Node::Text(_)));
        if inline {
            let _ = writeln!(out, ">{}</{}>", escape_xml(&self.text_content()), self.name);
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_svg(out, depth + 1),
                Node::Text(t) => {
                    let _ = writeln!(out, "{indent}  {}", escape_xml(t));
                }
                Node::Raw(markup) => {
                    let _ = writeln!(out, "{markup}");
                }
            }
        }
        let _ = writeln!(out, "{indent}</{}>", self.name);
    }
}

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
