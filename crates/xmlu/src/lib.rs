//! xmlu - canonical sorter for Salesforce CustomLabels metadata XML
//!
//! Parses a CustomLabels document, reorders its `<labels>` records by
//! the text of their `<fullName>` field with a stable byte-ordinal
//! comparison, and re-serializes the tree in a deterministic
//! pretty-printed form. Everything outside the record order survives
//! the round trip.
//!
//! # Quick Start
//!
//! ```
//! use xmlu::{sort_str, SortSpec, WriteOptions};
//! # fn main() -> Result<(), xmlu::Error> {
//! let input = "<CustomLabels>\
//!     <labels><fullName>Zeta</fullName></labels>\
//!     <labels><fullName>Alpha</fullName></labels>\
//! </CustomLabels>";
//! let sorted = sort_str(input, &SortSpec::custom_labels(), &WriteOptions::default())?;
//! let alpha = sorted.find("Alpha").unwrap_or_default();
//! let zeta = sorted.find("Zeta").unwrap_or_default();
//! assert!(alpha < zeta);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod cursor;
pub use cursor::Cursor;

pub mod model;
pub use model::{Content, Document, Element};

pub mod parser;
pub use parser::{Config, Parser};

pub mod writer;
pub use writer::{write, Newline, WriteOptions};

pub mod sort;
pub use sort::{sort_records, SortSpec};

pub mod file;
pub use file::{read_file, sort_file, write_file};

/// Parse an XML document from a string
pub fn parse_str(s: &str) -> Result<Document> {
    let mut parser = Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse an XML document from bytes
pub fn parse_bytes(bytes: &[u8]) -> Result<Document> {
    let mut parser = Parser::new(bytes);
    parser.parse()
}

/// Parse with custom configuration
pub fn parse_str_with_config(s: &str, config: Config) -> Result<Document> {
    let mut parser = Parser::with_config(s.as_bytes(), config);
    parser.parse()
}

/// Run the whole pipeline on a string: decode, sort, encode
pub fn sort_str(s: &str, spec: &SortSpec, options: &WriteOptions) -> Result<String> {
    let mut doc = parse_str(s)?;
    sort_records(&mut doc, spec)?;
    Ok(write(&doc, options))
}
