//! File pipeline
//!
//! Read entirely, transform entirely, write entirely. The target file
//! is rewritten only after the whole decode/sort/encode pipeline has
//! succeeded, so a failure never leaves a partial write behind.

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{Error, ErrorKind, Result, Span};
use crate::parser::Parser;
use crate::sort::{sort_records, SortSpec};
use crate::writer::{write, WriteOptions};

/// Read a file to a string, mapping a missing file to `NotFound`
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let kind = match e.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound {
                path: path.display().to_string(),
            },
            _ => ErrorKind::Read {
                path: path.display().to_string(),
            },
        };
        Error::with_message(kind.clone(), Span::empty(), format!("{kind}: {e}"))
    })
}

/// Write a string to a file
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        let kind = ErrorKind::Write {
            path: path.display().to_string(),
        };
        Error::with_message(kind.clone(), Span::empty(), format!("{kind}: {e}"))
    })
}

/// Sort the record collection of the file at `path` in place, returning
/// the number of records sorted.
#[instrument(skip(spec, options), fields(path = %path.display()))]
pub fn sort_file(path: &Path, spec: &SortSpec, options: &WriteOptions) -> Result<usize> {
    debug!("reading {}", path.display());
    let content = read_file(path)?;

    let mut doc = Parser::new(content.as_bytes()).parse()?;
    let count = sort_records(&mut doc, spec)?;
    let output = write(&doc, options);

    write_file(path, &output)?;
    info!("sorted {count} <{}> records in {}", spec.record, path.display());
    Ok(count)
}
