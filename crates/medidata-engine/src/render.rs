//! Flattening of nested card fields into display rows.
//!
//! A [`FieldMap`] is walked in insertion order. Every nested map produces a
//! header row at its own depth followed by its children one level deeper, so
//! a view only needs the row depth to indent correctly.
//!
//! ```text
//! {"A": 1, "B": {"C": 2}}   =>   Leaf   {depth: 0, key: "A", value: 1}
//!                                Header {depth: 0, key: "B"}
//!                                Leaf   {depth: 1, key: "C", value: 2}
//! ```
//!
//! The walk keeps an explicit stack of map iterators instead of recursing,
//! so input depth is bounded by memory rather than by the call stack.

use medidata_types::{FieldIter, FieldMap, FieldValue, Scalar};
use serde::Serialize;

/// One display line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row<'a> {
    /// Section title for a nested map. Its rows follow at `depth + 1`.
    Header { depth: usize, key: &'a str },
    Leaf {
        depth: usize,
        key: &'a str,
        value: &'a Scalar,
    },
}

impl<'a> Row<'a> {
    pub fn depth(&self) -> usize {
        match self {
            Row::Header { depth, .. } | Row::Leaf { depth, .. } => *depth,
        }
    }

    pub fn key(&self) -> &'a str {
        match self {
            Row::Header { key, .. } | Row::Leaf { key, .. } => *key,
        }
    }

    pub fn value(&self) -> Option<&'a Scalar> {
        match self {
            Row::Header { .. } => None,
            Row::Leaf { value, .. } => Some(*value),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header { .. })
    }
}

/// Lazy row sequence over a borrowed [`FieldMap`].
///
/// Cloning yields an independent cursor at the same position; a fresh call to
/// [`render_fields`] restarts from the first row.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    stack: Vec<(usize, FieldIter<'a>)>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, entries) = self.stack.last_mut()?;
            let depth = *depth;

            match entries.next() {
                None => {
                    self.stack.pop();
                }
                Some((key, FieldValue::Scalar(value))) => {
                    return Some(Row::Leaf {
                        depth,
                        key: key.as_str(),
                        value,
                    });
                }
                Some((key, FieldValue::Nested(children))) => {
                    self.stack.push((depth + 1, children.iter()));
                    return Some(Row::Header {
                        depth,
                        key: key.as_str(),
                    });
                }
            }
        }
    }
}

/// Flatten `fields` into display rows, starting at depth 0.
pub fn render_fields(fields: &FieldMap) -> Rows<'_> {
    Rows {
        stack: vec![(0, fields.iter())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldMap {
        FieldMap::new()
            .with("A", 1i64)
            .with("B", FieldMap::new().with("C", 2i64).with("D", 3i64))
    }

    #[test]
    fn test_documented_scenario() {
        let fields = sample();
        let rows: Vec<Row> = render_fields(&fields).collect();

        let one = Scalar::from(1i64);
        let two = Scalar::from(2i64);
        let three = Scalar::from(3i64);
        assert_eq!(
            rows,
            vec![
                Row::Leaf { depth: 0, key: "A", value: &one },
                Row::Header { depth: 0, key: "B" },
                Row::Leaf { depth: 1, key: "C", value: &two },
                Row::Leaf { depth: 1, key: "D", value: &three },
            ]
        );
    }

    #[test]
    fn test_rows_serialize_without_kind_tag() {
        let fields = sample();
        let rows: Vec<Row> = render_fields(&fields).collect();
        insta::assert_json_snapshot!(rows, @r#"
        [
          {
            "depth": 0,
            "key": "A",
            "value": 1
          },
          {
            "depth": 0,
            "key": "B"
          },
          {
            "depth": 1,
            "key": "C",
            "value": 2
          },
          {
            "depth": 1,
            "key": "D",
            "value": 3
          }
        ]
        "#);
    }

    #[test]
    fn test_empty_map_yields_no_rows() {
        assert_eq!(render_fields(&FieldMap::new()).count(), 0);
    }

    #[test]
    fn test_empty_nested_map_still_gets_header() {
        let fields = FieldMap::new().with("Empty", FieldMap::new()).with("After", "x");
        let keys: Vec<(usize, &str, bool)> = render_fields(&fields)
            .map(|row| (row.depth(), row.key(), row.is_header()))
            .collect();
        assert_eq!(keys, vec![(0, "Empty", true), (0, "After", false)]);
    }

    #[test]
    fn test_clone_restarts_independently() {
        let fields = sample();
        let mut rows = render_fields(&fields);
        rows.next();
        let snapshot = rows.clone();

        let rest: Vec<Row> = rows.collect();
        let again: Vec<Row> = snapshot.collect();
        assert_eq!(rest, again);
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn test_siblings_after_nested_return_to_parent_depth() {
        let fields = FieldMap::new()
            .with("outer", FieldMap::new().with("inner", FieldMap::new().with("x", 1i64)))
            .with("tail", 2i64);
        let depths: Vec<(&str, usize)> = render_fields(&fields).map(|r| (r.key(), r.depth())).collect();
        assert_eq!(depths, vec![("outer", 0), ("inner", 1), ("x", 2), ("tail", 0)]);
    }
}
