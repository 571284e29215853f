//! XML data model

use indexmap::IndexMap;

/// XML document with exactly one root element
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element: tag name, ordered attributes, ordered children
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get the first child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| match c {
            Content::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Iterate over child elements with the given name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |c| match c {
            Content::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Concatenated text content of this element's direct text children
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let Content::Text(text) = child {
                out.push_str(text);
            }
        }
        out
    }

    /// Whether any child is an element
    pub fn has_element_children(&self) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, Content::Element(_)))
    }
}
