//! XML parser
//!
//! Recursive-descent decoder for the subset of XML that Salesforce
//! metadata files use. Element order, attribute order, and text content
//! survive a round trip; whitespace-only text between elements, the XML
//! declaration, processing instructions, comments, and DOCTYPE do not.
//! CDATA sections are captured as text.

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result, Span};
use crate::model::{Content, Document, Element};

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Maximum nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// XML parser with depth and size limits
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    input_len: usize,
}

impl<'a> Parser<'a> {
    /// Create a new XML parser with default limits
    pub const fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::new(128, 10 * 1024 * 1024))
    }

    /// Create a new XML parser with a custom configuration
    pub const fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            input_len: input.len(),
        }
    }

    /// Parse an XML document
    pub fn parse(&mut self) -> Result<Document> {
        if self.config.max_size > 0 && self.input_len > self.config.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Span::empty(),
            ));
        }

        self.skip_prolog()?;
        let root = self.parse_element(1)?;
        self.skip_whitespace();

        if !self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::TrailingContent));
        }

        Ok(Document { root })
    }

    /// Skip whitespace, the declaration, PIs, comments, and DOCTYPE
    /// that may precede the root element.
    fn skip_prolog(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            match (self.cursor.current(), self.cursor.peek(1)) {
                (Some(b'<'), Some(b'?')) => {
                    self.cursor.advance_by(2);
                    self.skip_until(b"?>")?;
                }
                (Some(b'<'), Some(b'!')) => {
                    if self.cursor.peek_bytes(4) == Some(b"<!--") {
                        self.cursor.advance_by(4);
                        self.skip_until(b"-->")?;
                    } else {
                        // DOCTYPE or other markup declaration
                        self.cursor.advance_by(2);
                        self.skip_until(b">")?;
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_element(&mut self, depth: u16) -> Result<Element> {
        if self.config.max_depth > 0 && depth > self.config.max_depth {
            return Err(self.error_here(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            }));
        }

        self.expect_byte(b'<')?;

        if self.cursor.current() == Some(b'/') {
            return Err(self.error_with_message(ErrorKind::UnexpectedToken, "unexpected closing tag"));
        }

        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.current() == Some(b'/') {
            self.cursor.advance();
            self.expect_byte(b'>')?;
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        loop {
            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'/') {
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(self.error_here(ErrorKind::MismatchedTag {
                        expected: name,
                        found: close_name,
                    }));
                }
                self.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.peek_bytes(4) == Some(b"<!--") {
                self.cursor.advance_by(4);
                self.skip_until(b"-->")?;
                continue;
            }

            if self.cursor.peek_bytes(9) == Some(b"<![CDATA[") {
                self.cursor.advance_by(9);
                let text = self.parse_cdata()?;
                push_text(&mut children, text);
                continue;
            }

            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'?') {
                self.cursor.advance_by(2);
                self.skip_until(b"?>")?;
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                let child = self.parse_element(depth.saturating_add(1))?;
                children.push(Content::Element(child));
                continue;
            }

            if self.cursor.is_eof() {
                return Err(self.error_with_message(
                    ErrorKind::UnexpectedEof,
                    format!("unterminated <{name}> element"),
                ));
            }

            if let Some(text) = self.parse_text()? {
                push_text(&mut children, text);
            }
        }

        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, String>> {
        let mut attrs = IndexMap::new();

        loop {
            self.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => return Err(self.error_here(ErrorKind::UnexpectedEof)),
            }

            let name = self.parse_name()?;
            self.skip_whitespace();
            self.expect_byte(b'=')?;
            self.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains_key(&name) {
                return Err(self.error_here(ErrorKind::DuplicateAttribute { name }));
            }
            attrs.insert(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => {
                return Err(self.error_with_message(
                    ErrorKind::UnexpectedToken,
                    "expected quoted attribute value",
                ));
            }
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = self.bytes_to_string(raw)?;
                return self.decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_with_message(ErrorKind::UnexpectedEof, "unterminated attribute value"))
    }

    fn parse_text(&mut self) -> Result<Option<String>> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = self.bytes_to_string(raw)?;
        let text = self.decode_entities(&text)?;

        // indentation between elements is insignificant
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn parse_cdata(&mut self) -> Result<String> {
        let start = self.cursor.pos();
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(3) == Some(b"]]>") {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance_by(3);
                return self.bytes_to_string(raw);
            }
            self.cursor.advance();
        }
        Err(self.error_with_message(ErrorKind::UnexpectedEof, "unterminated CDATA section"))
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        let Some(first) = self.cursor.current() else {
            return Err(self.error_with_message(ErrorKind::UnexpectedEof, "expected name"));
        };
        if !is_name_start(first) {
            return Err(self.error_with_message(ErrorKind::UnexpectedToken, "expected name"));
        }

        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let raw = self.cursor.slice_from(start);
        self.bytes_to_string(raw)
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(pattern.len()) == Some(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_with_message(ErrorKind::UnexpectedEof, "unterminated markup"))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else if self.cursor.is_eof() {
            Err(self.error_here(ErrorKind::UnexpectedEof))
        } else {
            Err(self.error_here(ErrorKind::UnexpectedToken))
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.cursor.current() {
            if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| self.error_here(ErrorKind::InvalidUtf8))
    }

    fn decode_entities(&self, input: &str) -> Result<String> {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '&' {
                result.push(ch);
                continue;
            }

            let mut entity = String::new();
            let mut terminated = false;
            for next in chars.by_ref() {
                if next == ';' {
                    terminated = true;
                    break;
                }
                entity.push(next);
            }

            let decoded = if terminated {
                match entity.as_str() {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ => decode_numeric_entity(&entity),
                }
            } else {
                None
            };

            match decoded {
                Some(ch) => result.push(ch),
                None => return Err(self.error_here(ErrorKind::InvalidEntity { entity })),
            }
        }

        Ok(result)
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        let pos = self.cursor.position();
        Error::at(kind, pos.offset, pos.line, pos.col)
    }

    fn error_with_message(&self, kind: ErrorKind, message: impl Into<String>) -> Error {
        let pos = self.cursor.position();
        Error::with_message(kind, Span::new(pos, pos), message)
    }
}

/// Append text, merging with a preceding text run.
fn push_text(children: &mut Vec<Content>, text: String) {
    if let Some(Content::Text(last)) = children.last_mut() {
        last.push_str(&text);
    } else {
        children.push(Content::Text(text));
    }
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
