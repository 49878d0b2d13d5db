use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A generic XML element.
///
/// Trees are built top-down with [`Element::new`], [`Element::with_text`] and
/// [`Element::push`], and read back with the `get_*` accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name.
    pub attrs: BTreeMap<String, String>,
    /// Child elements, in document order.
    pub children: Vec<Element>,
    /// Optional text content.
    pub text: Option<String>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create an element carrying only text content.
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = Self::new(tag);
        node.text = Some(text.into());
        node
    }

    /// Set an attribute, returning the element for chained construction.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append a child element, returning the element for chained construction.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Return an attribute value by name.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Return all children with the provided tag.
    pub fn get_children(&self, tag: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Walk a nested child path, taking the first match at each step.
    pub fn descend(&self, path: &[&str]) -> Option<&Element> {
        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        Some(current)
    }

    /// Walk a nested child path and return terminal node text if found.
    pub fn get_text<'a>(&'a self, path: &[&str]) -> Option<&'a str> {
        self.descend(path)?.text.as_deref()
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attrs {
            write!(f, " {}=\"{}\"", key, value)?;
        }

        if self.children.is_empty() && self.text.is_none() {
            return write!(f, "/>");
        }

        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", text)?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
