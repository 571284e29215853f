//! Error types for xmlu
//!
//! Every failure the tool can hit falls into one of four families:
//! a missing input file (`NotFound`), a malformed document (the parse
//! kinds), a well-formed document without the expected collection shape
//! (the structure kinds), or a filesystem failure (`Read`/`Write`).

use std::fmt;
use thiserror::Error;

/// Position in the source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in the source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound { path: String },
    Read { path: String },
    Write { path: String },
    InvalidUtf8,
    UnexpectedEof,
    UnexpectedToken,
    MismatchedTag { expected: String, found: String },
    DuplicateAttribute { name: String },
    InvalidEntity { entity: String },
    TrailingContent,
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
    UnexpectedRoot { expected: String, found: String },
    NoRecords { record: String },
    MissingKeyField { field: String, record: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "file not found: {path}"),
            Self::Read { path } => write!(f, "cannot read {path}"),
            Self::Write { path } => write!(f, "cannot write {path}"),
            Self::InvalidUtf8 => write!(f, "input is not valid utf-8"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::UnexpectedToken => write!(f, "unexpected token"),
            Self::MismatchedTag { expected, found } => {
                write!(f, "mismatched closing tag: expected </{expected}>, found </{found}>")
            }
            Self::DuplicateAttribute { name } => {
                write!(f, "duplicate attribute: {name}")
            }
            Self::InvalidEntity { entity } => write!(f, "invalid xml entity: &{entity};"),
            Self::TrailingContent => write!(f, "content after the root element"),
            Self::MaxDepthExceeded { max } => {
                write!(f, "max depth exceeded: {max}")
            }
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
            Self::UnexpectedRoot { expected, found } => {
                write!(f, "expected <{expected}> root element, found <{found}>")
            }
            Self::NoRecords { record } => write!(f, "no <{record}> records to sort"),
            Self::MissingKeyField { field, record } => {
                write!(f, "record {record} has no <{field}> field")
            }
        }
    }
}

/// Main error type for xmlu
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span == Span::empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for xmlu
pub type Result<T> = std::result::Result<T, Error>;
