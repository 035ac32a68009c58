//! Path-level surgery on raw JSON documents.
//!
//! The request travels as raw bytes until it is parsed for the auction, so
//! the global FPD blobs are cut out of those bytes directly. Documents are
//! parsed into a generic tree, edited, and re-encoded; key order is preserved,
//! so nothing outside the removed key changes.

use crate::{FpdError, FpdResult};
use serde_json::{Map, Value};

/// Removes the element at `path` from `doc`.
///
/// Returns the edited document and the removed value's raw bytes. When the
/// path does not exist (a segment is missing or `null`), the input is
/// returned unchanged with no extracted value.
///
/// # Errors
///
/// [`FpdError::MalformedDocument`] if `doc` is not valid JSON or a segment on
/// the way to the element is neither an object nor `null`.
pub fn find_and_drop_element(doc: &[u8], path: &[&str]) -> FpdResult<(Vec<u8>, Option<Vec<u8>>)> {
    let mut root = parse_document(doc)?;
    let Some((leaf, parents)) = path.split_last() else {
        return Ok((doc.to_vec(), None));
    };

    let removed = match parent_object(&mut root, parents)? {
        Some(parent) => parent.shift_remove(*leaf),
        None => None,
    };
    let Some(removed) = removed else {
        return Ok((doc.to_vec(), None));
    };

    let edited = encode(&root)?;
    let extracted = encode(&removed)?;
    Ok((edited, Some(extracted)))
}

/// Inserts `value` at `path`, creating intermediate objects as needed.
///
/// An existing element at `path` is replaced.
///
/// # Errors
///
/// [`FpdError::MalformedDocument`] if `doc` or `value` is not valid JSON, or
/// a segment on the way is neither an object, `null`, nor missing.
pub fn insert_element(doc: &[u8], path: &[&str], value: &[u8]) -> FpdResult<Vec<u8>> {
    let mut root = parse_document(doc)?;
    let value = parse_document(value)?;
    let Some((leaf, parents)) = path.split_last() else {
        return encode(&value);
    };

    let mut current = &mut root;
    for (depth, segment) in parents.iter().enumerate() {
        if current.is_null() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            return Err(not_an_object(&parents[..depth]));
        };
        current = map
            .entry((*segment).to_string())
            .or_insert(Value::Null);
    }
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    let Value::Object(parent) = current else {
        return Err(not_an_object(parents));
    };
    parent.insert((*leaf).to_string(), value);

    encode(&root)
}

/// Walks `segments` from `root` and returns the object they lead to.
fn parent_object<'a>(
    root: &'a mut Value,
    segments: &[&str],
) -> FpdResult<Option<&'a mut Map<String, Value>>> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = match current {
            Value::Object(map) => match map.get_mut(*segment) {
                Some(next) => next,
                None => return Ok(None),
            },
            Value::Null => return Ok(None),
            _ => return Err(not_an_object(&segments[..depth])),
        };
    }
    match current {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        _ => Err(not_an_object(segments)),
    }
}

fn parse_document(doc: &[u8]) -> FpdResult<Value> {
    serde_json::from_slice(doc).map_err(|e| FpdError::MalformedDocument(e.to_string()))
}

fn encode(value: &Value) -> FpdResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| FpdError::MalformedDocument(e.to_string()))
}

fn not_an_object(segments: &[&str]) -> FpdError {
    if segments.is_empty() {
        FpdError::MalformedDocument("document root is not an object".to_string())
    } else {
        FpdError::MalformedDocument(format!("`{}` is not an object", segments.join(".")))
    }
}
