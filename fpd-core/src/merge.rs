//! JSON merge patch (RFC 7396).
//!
//! - Objects are merged key by key, recursively
//! - A `null` in the patch deletes the key from the target
//! - Any other patch value (scalar or array) replaces the target value
//!
//! A patch that is not an object replaces the whole target.

use serde_json::{Map, Value};

/// Applies `patch` onto `target` in place.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *target = patch.clone();
        return;
    };
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(target_map) = target {
        for (key, value) in patch_map {
            if value.is_null() {
                target_map.shift_remove(key);
            } else {
                merge_patch(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

/// Applies a raw `patch` document onto a raw `target` document.
///
/// # Errors
///
/// Fails if either side is not valid JSON.
pub fn merge_patch_bytes(target: &[u8], patch: &[u8]) -> serde_json::Result<Vec<u8>> {
    let mut merged: Value = serde_json::from_slice(target)?;
    let patch: Value = serde_json::from_slice(patch)?;
    merge_patch(&mut merged, &patch);
    serde_json::to_vec(&merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merged(target: Value, patch: Value) -> Value {
        let mut target = target;
        merge_patch(&mut target, &patch);
        target
    }

    // Cases from RFC 7396 appendix A.

    #[test]
    fn replaces_scalar() {
        assert_eq!(merged(json!({"a": "b"}), json!({"a": "c"})), json!({"a": "c"}));
    }

    #[test]
    fn adds_key() {
        assert_eq!(merged(json!({"a": "b"}), json!({"b": "c"})), json!({"a": "b", "b": "c"}));
    }

    #[test]
    fn null_deletes_key() {
        assert_eq!(merged(json!({"a": "b"}), json!({"a": null})), json!({}));
        assert_eq!(merged(json!({"a": "b", "b": "c"}), json!({"a": null})), json!({"b": "c"}));
    }

    #[test]
    fn array_replaces_array() {
        assert_eq!(merged(json!({"a": ["b"]}), json!({"a": "c"})), json!({"a": "c"}));
        assert_eq!(merged(json!({"a": "c"}), json!({"a": ["b"]})), json!({"a": ["b"]}));
        assert_eq!(merged(json!({"a": [{"b": "c"}]}), json!({"a": [1]})), json!({"a": [1]}));
    }

    #[test]
    fn nested_objects_merge() {
        assert_eq!(
            merged(json!({"a": {"b": "c"}}), json!({"a": {"b": "d", "c": null}})),
            json!({"a": {"b": "d"}})
        );
    }

    #[test]
    fn non_object_patch_replaces_target() {
        assert_eq!(merged(json!(["a", "b"]), json!(["c", "d"])), json!(["c", "d"]));
        assert_eq!(merged(json!({"a": "b"}), json!(["c"])), json!(["c"]));
        assert_eq!(merged(json!({"a": "foo"}), json!(null)), json!(null));
        assert_eq!(merged(json!({"a": "foo"}), json!("bar")), json!("bar"));
    }

    #[test]
    fn object_patch_onto_scalar_target() {
        assert_eq!(merged(json!(["a"]), json!({"a": "b"})), json!({"a": "b"}));
        assert_eq!(merged(json!({"e": null}), json!({"a": 1})), json!({"e": null, "a": 1}));
    }

    #[test]
    fn nulls_inside_new_object_are_dropped() {
        assert_eq!(merged(json!({}), json!({"a": {"bb": {"ccc": null}}})), json!({"a": {"bb": {}}}));
    }

    #[test]
    fn bytes_rejects_malformed_sides() {
        assert!(merge_patch_bytes(b"{", br#"{"a":1}"#).is_err());
        assert!(merge_patch_bytes(br#"{"a":1}"#, b"not json").is_err());
    }

    #[test]
    fn bytes_merges() {
        let out = merge_patch_bytes(br#"{"a":1,"b":2}"#, br#"{"b":null,"c":3}"#).unwrap();
        assert_eq!(out, br#"{"a":1,"c":3}"#.to_vec());
    }
}
