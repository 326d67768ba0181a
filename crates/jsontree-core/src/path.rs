//! Dot-separated path lookup into a tree.
//!
//! # Path syntax
//!
//! - `""` -- the root itself
//! - `"servers"` -- key `servers` of the root object
//! - `"servers.0"` -- first element of the array under `servers`
//! - `"a.b.c"` -- nested keys
//!
//! On an array a segment must be a decimal index; on an object it is a key. Walking into
//! any scalar is a type mismatch.

use crate::error::{JsonError, Result};
use crate::value::Value;

/// A parsed path, split on dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    pub fn parse(path: &'a str) -> Self {
        let segments = if path.is_empty() {
            Vec::new()
        } else {
            path.split('.').collect()
        };
        Self { segments }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

/// Borrow the value at `path`.
///
/// # Examples
///
/// ```
/// use jsontree_core::{parse, path::lookup};
///
/// let value = parse(r#"{"servers":["main","backup"]}"#).unwrap();
/// assert_eq!(lookup(&value, "servers.1").unwrap().get_str().unwrap(), "backup");
/// ```
pub fn lookup<'v>(root: &'v Value, path: &str) -> Result<&'v Value> {
    let mut current = root;
    for segment in Path::parse(path).segments() {
        current = match current {
            Value::Array(_) => current.get_arr_at(parse_index(segment)?)?,
            Value::Object(_) => current.get_obj_at(segment)?,
            other => return Err(JsonError::mismatch("array or object", other.kind())),
        };
    }
    Ok(current)
}

/// Mutably borrow the value at `path`.
pub fn lookup_mut<'v>(root: &'v mut Value, path: &str) -> Result<&'v mut Value> {
    let mut current = root;
    for segment in Path::parse(path).segments() {
        current = match current {
            Value::Array(items) => {
                let index = parse_index(segment)?;
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(JsonError::IndexOutOfRange { index, len })?
            }
            Value::Object(map) => map
                .get_mut(segment)
                .ok_or_else(|| JsonError::KeyNotFound(segment.to_string()))?,
            other => return Err(JsonError::mismatch("array or object", other.kind())),
        };
    }
    Ok(current)
}

fn parse_index(segment: &str) -> Result<usize> {
    segment
        .parse()
        .map_err(|_| JsonError::KeyNotFound(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::value::Kind;

    #[test]
    fn splits_segments() {
        assert!(Path::parse("").segments().is_empty());
        assert_eq!(Path::parse("a.0.b").segments(), &["a", "0", "b"]);
    }

    #[test]
    fn walks_arrays_and_objects() {
        let v = parse(r#"{"a":[{"b":true}]}"#).unwrap();
        assert_eq!(lookup(&v, "a.0.b").unwrap(), &Value::Bool(true));
        assert_eq!(lookup(&v, "").unwrap(), &v);
    }

    #[test]
    fn reports_each_failure_mode() {
        let v = parse(r#"{"a":[1],"s":"x"}"#).unwrap();
        assert!(matches!(
            lookup(&v, "a.5"),
            Err(JsonError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(lookup(&v, "a.x"), Err(JsonError::KeyNotFound(_))));
        assert!(matches!(lookup(&v, "b"), Err(JsonError::KeyNotFound(_))));
        assert!(matches!(
            lookup(&v, "s.0"),
            Err(JsonError::TypeMismatch {
                found: Kind::String,
                ..
            })
        ));
    }

    #[test]
    fn mutable_lookup_edits_in_place() {
        let mut v = parse(r#"{"a":{"b":1}}"#).unwrap();
        lookup_mut(&mut v, "a.b").unwrap().set_int(5).unwrap();
        assert_eq!(v.to_string(), r#"{"a":{"b":5}}"#);
    }
}
