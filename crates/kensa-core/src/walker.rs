//! Generic depth-first traversal of article documents.
//!
//! Checkers never pattern-match on article shapes themselves. They ask the
//! walker for every reachable string together with its `FieldPath`, minus the
//! fields they were told to exclude. Excluded names apply at any depth.
//!
//! Documents are acyclic by construction, but a malformed source can still
//! nest absurdly deep; both traversals stop at `MAX_DEPTH` with
//! `KensaError::DocumentTooDeep` instead of recursing without bound.

use std::collections::BTreeMap;

use kensa_contracts::{
    document::{Document, FieldPath},
    error::{KensaError, KensaResult},
};

/// Deepest nesting either traversal will follow.
pub const MAX_DEPTH: usize = 64;

/// A string value reachable from the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField<'a> {
    pub path: FieldPath,
    pub text: &'a str,
}

/// Lazy depth-first iterator over the string fields of a document.
///
/// Yields fields in document order: object keys ascending, list items by
/// index. Non-string scalars are skipped. After a `DocumentTooDeep` error the
/// iterator is exhausted.
pub struct TextFields<'a> {
    stack: Vec<(FieldPath, &'a Document)>,
    excluded: &'a [String],
    exhausted: bool,
}

impl<'a> TextFields<'a> {
    pub fn new(document: &'a Document, excluded: &'a [String]) -> Self {
        Self {
            stack: vec![(FieldPath::root(), document)],
            excluded,
            exhausted: false,
        }
    }

    fn is_excluded(&self, key: &str) -> bool {
        self.excluded.iter().any(|e| e == key)
    }
}

impl<'a> Iterator for TextFields<'a> {
    type Item = KensaResult<TextField<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        while let Some((path, node)) = self.stack.pop() {
            if path.depth() > MAX_DEPTH {
                self.exhausted = true;
                self.stack.clear();
                return Some(Err(too_deep(&path)));
            }
            match node {
                Document::Text(text) => return Some(Ok(TextField { path, text })),
                // Children are pushed in reverse so they pop in document order.
                Document::List(items) => {
                    for (i, item) in items.iter().enumerate().rev() {
                        self.stack.push((path.index(i), item));
                    }
                }
                Document::Object(fields) => {
                    for (key, value) in fields.iter().rev() {
                        if !self.is_excluded(key) {
                            self.stack.push((path.key(key.as_str()), value));
                        }
                    }
                }
                Document::Null | Document::Bool(_) | Document::Number(_) => {}
            }
        }
        self.exhausted = true;
        None
    }
}

/// Iterate over every non-excluded string field of `document`.
pub fn walk<'a>(document: &'a Document, excluded: &'a [String]) -> TextFields<'a> {
    TextFields::new(document, excluded)
}

/// Collect every non-excluded string field, failing on excessive depth.
pub fn text_fields<'a>(
    document: &'a Document,
    excluded: &'a [String],
) -> KensaResult<Vec<TextField<'a>>> {
    walk(document, excluded).collect()
}

/// Build a new document in which every non-excluded string has been passed
/// through `f`. Excluded fields and non-string scalars are copied unchanged.
pub fn map_text<F>(document: &Document, excluded: &[String], mut f: F) -> KensaResult<Document>
where
    F: FnMut(&FieldPath, &str) -> String,
{
    map_node(document, &FieldPath::root(), excluded, &mut f)
}

fn map_node<F>(
    node: &Document,
    path: &FieldPath,
    excluded: &[String],
    f: &mut F,
) -> KensaResult<Document>
where
    F: FnMut(&FieldPath, &str) -> String,
{
    if path.depth() > MAX_DEPTH {
        return Err(too_deep(path));
    }
    Ok(match node {
        Document::Text(text) => Document::Text(f(path, text)),
        Document::List(items) => Document::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| map_node(item, &path.index(i), excluded, f))
                .collect::<KensaResult<Vec<_>>>()?,
        ),
        Document::Object(fields) => {
            let mut mapped = BTreeMap::new();
            for (key, value) in fields {
                let value = if excluded.iter().any(|e| e == key) {
                    value.clone()
                } else {
                    map_node(value, &path.key(key.as_str()), excluded, f)?
                };
                mapped.insert(key.clone(), value);
            }
            Document::Object(mapped)
        }
        scalar => scalar.clone(),
    })
}

/// Fail with `InputError` unless the document root is an object.
pub fn require_object(document: &Document) -> KensaResult<()> {
    if document.is_object() {
        Ok(())
    } else {
        Err(KensaError::InputError {
            reason: format!("document root must be an object, found {}", document.kind()),
        })
    }
}

fn too_deep(path: &FieldPath) -> KensaError {
    KensaError::DocumentTooDeep {
        path: path.to_string(),
        limit: MAX_DEPTH,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn excluded(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn paths(document: &Document, skip: &[String]) -> Vec<(String, String)> {
        text_fields(document, skip)
            .unwrap()
            .into_iter()
            .map(|f| (f.path.to_string(), f.text.to_string()))
            .collect()
    }

    #[test]
    fn walks_nested_strings_in_document_order() {
        let doc = Document::from(json!({
            "summary": "要約",
            "benefits": [
                { "title": "一", "description": "説明一" },
                { "title": "二", "rank": 2 }
            ],
            "rating": 4.5,
            "flag": true
        }));

        assert_eq!(
            paths(&doc, &[]),
            vec![
                ("benefits[0].description".to_string(), "説明一".to_string()),
                ("benefits[0].title".to_string(), "一".to_string()),
                ("benefits[1].title".to_string(), "二".to_string()),
                ("summary".to_string(), "要約".to_string()),
            ]
        );
    }

    #[test]
    fn excluded_fields_skipped_at_any_depth() {
        let doc = Document::from(json!({
            "name_en": "Vitamin C",
            "faq": [{ "name_en": "hidden", "answer": "見える" }]
        }));

        let fields = paths(&doc, &excluded(&["name_en"]));
        assert_eq!(fields, vec![("faq[0].answer".to_string(), "見える".to_string())]);
    }

    #[test]
    fn walker_is_lazy() {
        let doc = Document::from(json!({ "a": "1", "b": "2", "c": "3" }));
        let empty: Vec<String> = vec![];
        let mut iter = walk(&doc, &empty);

        let first = iter.next().unwrap().unwrap();
        assert_eq!(first.path.to_string(), "a");
        assert_eq!(iter.count(), 2);
    }

    fn nested(depth: usize) -> Document {
        let mut doc = Document::from("leaf");
        for _ in 0..depth {
            doc = Document::List(vec![doc]);
        }
        doc
    }

    #[test]
    fn depth_cap_fails_fast() {
        let empty: Vec<String> = vec![];

        assert!(text_fields(&nested(MAX_DEPTH), &empty).is_ok());

        let deep = nested(MAX_DEPTH + 1);
        match text_fields(&deep, &empty) {
            Err(KensaError::DocumentTooDeep { limit, .. }) => assert_eq!(limit, MAX_DEPTH),
            other => panic!("expected DocumentTooDeep, got {:?}", other),
        }
        assert!(matches!(
            map_text(&deep, &empty, |_, t| t.to_string()),
            Err(KensaError::DocumentTooDeep { .. })
        ));
    }

    #[test]
    fn map_text_rewrites_only_included_strings() {
        let doc = Document::from(json!({
            "name_en": "keep",
            "summary": "change",
            "faq": [{ "answer": "change" }],
            "count": 3
        }));

        let mapped = map_text(&doc, &excluded(&["name_en"]), |path, text| {
            format!("{text}@{path}")
        })
        .unwrap();

        assert_eq!(
            mapped.to_json(),
            json!({
                "name_en": "keep",
                "summary": "change@summary",
                "faq": [{ "answer": "change@faq[0].answer" }],
                "count": 3.0
            })
        );
        assert_eq!(doc.get("summary").and_then(Document::as_text), Some("change"));
    }

    #[test]
    fn require_object_rejects_other_roots() {
        assert!(require_object(&Document::from(json!({}))).is_ok());

        match require_object(&Document::from(json!(["a"]))) {
            Err(KensaError::InputError { reason }) => assert!(reason.contains("list")),
            other => panic!("expected InputError, got {:?}", other),
        }
    }
}
