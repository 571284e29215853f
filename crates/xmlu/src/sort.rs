//! Canonical record sorter
//!
//! Reorders the repeated record elements of a collection document by
//! the text of a designated key field. The comparison is `str::cmp`:
//! byte-wise, case-sensitive, per-code-point ordinal. No locale rules,
//! no case folding, and no tie-breaking beyond input order (the sort is
//! stable).

use crate::error::{Error, ErrorKind, Result, Span};
use crate::model::{Content, Document, Element};

/// Names the collection shape: root collection tag, record tag, and the
/// child field whose text is the sort key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub collection: String,
    pub record: String,
    pub key: String,
}

impl SortSpec {
    pub fn new(
        collection: impl Into<String>,
        record: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            record: record.into(),
            key: key.into(),
        }
    }

    /// The CustomLabels shape: `<labels>` records under a
    /// `<CustomLabels>` root, keyed by `<fullName>`.
    pub fn custom_labels() -> Self {
        Self::new("CustomLabels", "labels", "fullName")
    }
}

/// Sort the document's record elements in place, returning the record
/// count.
///
/// Every key is validated before any mutation, so on failure the tree
/// is untouched. Record elements move between record slots; every
/// non-record sibling keeps its exact position.
pub fn sort_records(doc: &mut Document, spec: &SortSpec) -> Result<usize> {
    let root = &mut doc.root;
    if root.name != spec.collection {
        return Err(Error::new(
            ErrorKind::UnexpectedRoot {
                expected: spec.collection.clone(),
                found: root.name.clone(),
            },
            Span::empty(),
        ));
    }

    let mut keys = Vec::new();
    for child in &root.children {
        if let Content::Element(el) = child {
            if el.name == spec.record {
                let key = el.child(&spec.key).map(Element::text).ok_or_else(|| {
                    Error::new(
                        ErrorKind::MissingKeyField {
                            field: spec.key.clone(),
                            record: keys.len() + 1,
                        },
                        Span::empty(),
                    )
                })?;
                keys.push(key);
            }
        }
    }

    if keys.is_empty() {
        return Err(Error::new(
            ErrorKind::NoRecords {
                record: spec.record.clone(),
            },
            Span::empty(),
        ));
    }

    // pull the records out of their slots, pairing each with its key
    let mut records: Vec<(String, Element)> = Vec::with_capacity(keys.len());
    let mut keys = keys.into_iter();
    for child in &mut root.children {
        if let Content::Element(el) = child {
            if el.name == spec.record {
                let Some(key) = keys.next() else { break };
                let record = std::mem::replace(el, Element::new(spec.record.clone()));
                records.push((key, record));
            }
        }
    }

    // stable: equal keys keep their original relative order
    records.sort_by(|a, b| a.0.cmp(&b.0));

    let count = records.len();
    let mut sorted = records.into_iter();
    for child in &mut root.children {
        if let Content::Element(el) = child {
            if el.name == spec.record {
                if let Some((_, record)) = sorted.next() {
                    *el = record;
                }
            }
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn parse(input: &str) -> Document {
        Parser::new(input.as_bytes())
            .parse()
            .unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    fn label(full_name: &str, value: &str) -> String {
        format!("<labels><fullName>{full_name}</fullName><value>{value}</value></labels>")
    }

    fn key_order(doc: &Document) -> Vec<String> {
        doc.root
            .children_named("labels")
            .map(|el| el.child("fullName").map(Element::text).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_sorts_by_full_name() -> Result<()> {
        let input = format!(
            "<CustomLabels>{}{}{}</CustomLabels>",
            label("Zeta", "z"),
            label("Alpha", "a"),
            label("Mike", "m"),
        );
        let mut doc = parse(&input);
        let count = sort_records(&mut doc, &SortSpec::custom_labels())?;
        assert_eq!(count, 3);
        assert_eq!(key_order(&doc), ["Alpha", "Mike", "Zeta"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_keys_keep_input_order() -> Result<()> {
        let input = format!(
            "<CustomLabels>{}{}{}</CustomLabels>",
            label("Beta", "first"),
            label("Alpha", "a"),
            label("Beta", "second"),
        );
        let mut doc = parse(&input);
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        let values: Vec<String> = doc
            .root
            .children_named("labels")
            .map(|el| el.child("value").map(Element::text).unwrap_or_default())
            .collect();
        assert_eq!(values, ["a", "first", "second"]);
        Ok(())
    }

    #[test]
    fn test_ordinal_comparison_is_case_sensitive() -> Result<()> {
        // uppercase sorts before lowercase under byte ordering
        let input = format!(
            "<CustomLabels>{}{}{}</CustomLabels>",
            label("apple", "1"),
            label("Banana", "2"),
            label("Apple", "3"),
        );
        let mut doc = parse(&input);
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        assert_eq!(key_order(&doc), ["Apple", "Banana", "apple"]);
        Ok(())
    }

    #[test]
    fn test_empty_key_sorts_first() -> Result<()> {
        let input = format!(
            "<CustomLabels>{}<labels><fullName/></labels></CustomLabels>",
            label("Alpha", "a"),
        );
        let mut doc = parse(&input);
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        assert_eq!(key_order(&doc), ["", "Alpha"]);
        Ok(())
    }

    #[test]
    fn test_non_record_siblings_keep_position() -> Result<()> {
        let input = format!(
            "<CustomLabels><marker>top</marker>{}{}</CustomLabels>",
            label("Zeta", "z"),
            label("Alpha", "a"),
        );
        let mut doc = parse(&input);
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        match doc.root.children.first() {
            Some(Content::Element(el)) => assert_eq!(el.name, "marker"),
            other => panic!("expected marker first, got {other:?}"),
        }
        assert_eq!(key_order(&doc), ["Alpha", "Zeta"]);
        Ok(())
    }

    #[test]
    fn test_wrong_root_is_structure_error() {
        let mut doc = parse("<Other><labels><fullName>A</fullName></labels></Other>");
        let err = sort_records(&mut doc, &SortSpec::custom_labels()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnexpectedRoot {
                expected: "CustomLabels".to_string(),
                found: "Other".to_string()
            }
        );
    }

    #[test]
    fn test_no_records_is_structure_error() {
        let mut doc = parse("<CustomLabels><other/></CustomLabels>");
        let err = sort_records(&mut doc, &SortSpec::custom_labels()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::NoRecords {
                record: "labels".to_string()
            }
        );
    }

    #[test]
    fn test_missing_key_field_leaves_tree_untouched() {
        let input = format!(
            "<CustomLabels>{}<labels><value>orphan</value></labels></CustomLabels>",
            label("Zeta", "z"),
        );
        let mut doc = parse(&input);
        let before = doc.clone();
        let err = sort_records(&mut doc, &SortSpec::custom_labels()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MissingKeyField {
                field: "fullName".to_string(),
                record: 2
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_sort_is_idempotent() -> Result<()> {
        let input = format!(
            "<CustomLabels>{}{}</CustomLabels>",
            label("Zeta", "z"),
            label("Alpha", "a"),
        );
        let mut doc = parse(&input);
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        let once = doc.clone();
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        assert_eq!(doc, once);
        Ok(())
    }

    #[test]
    fn test_record_content_preserved() -> Result<()> {
        let input = format!(
            "<CustomLabels>{}{}</CustomLabels>",
            label("Zeta", "z"),
            label("Alpha", "a"),
        );
        let mut doc = parse(&input);
        let mut before: Vec<Element> = doc.root.children_named("labels").cloned().collect();
        sort_records(&mut doc, &SortSpec::custom_labels())?;
        let mut after: Vec<Element> = doc.root.children_named("labels").cloned().collect();
        before.sort_by_key(|el| el.child("fullName").map(Element::text));
        after.sort_by_key(|el| el.child("fullName").map(Element::text));
        assert_eq!(before, after);
        Ok(())
    }
}
