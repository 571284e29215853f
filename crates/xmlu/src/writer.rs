//! Deterministic XML serializer
//!
//! Output is a pure function of the tree and the options: the same
//! input always produces byte-identical output. Defaults reproduce the
//! Salesforce metadata convention (declaration line, four-space indent,
//! LF line endings).

use crate::model::{Content, Document, Element};

/// Line terminator for serialized output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Serialization options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Insert indentation and newlines between elements
    pub pretty: bool,
    /// Spaces per nesting level
    pub indent: usize,
    /// Line terminator sequence
    pub newline: Newline,
    /// Emit the XML declaration line
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 4,
            newline: Newline::Lf,
            declaration: true,
        }
    }
}

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Serialize a document to text
pub fn write(doc: &Document, options: &WriteOptions) -> String {
    let mut output = String::new();
    if options.declaration {
        output.push_str(DECLARATION);
        if options.pretty {
            output.push_str(options.newline.as_str());
        }
    }
    write_element(&doc.root, 0, options, &mut output);
    if options.pretty {
        output.push_str(options.newline.as_str());
    }
    output
}

fn write_element(element: &Element, depth: usize, options: &WriteOptions, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (key, value) in element.attributes.iter() {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }

    if element.children.is_empty() {
        output.push_str("/>");
        return;
    }

    output.push('>');

    if element.has_element_children() {
        for child in &element.children {
            if options.pretty {
                output.push_str(options.newline.as_str());
                push_indent(depth + 1, options, output);
            }
            match child {
                Content::Element(child) => write_element(child, depth + 1, options, output),
                Content::Text(text) => output.push_str(&escape_text(text.trim())),
            }
        }
        if options.pretty {
            output.push_str(options.newline.as_str());
            push_indent(depth, options, output);
        }
    } else {
        // text-only content stays inline and verbatim
        for child in &element.children {
            if let Content::Text(text) = child {
                output.push_str(&escape_text(text));
            }
        }
    }

    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

fn push_indent(depth: usize, options: &WriteOptions, output: &mut String) {
    for _ in 0..depth * options.indent {
        output.push(' ');
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
