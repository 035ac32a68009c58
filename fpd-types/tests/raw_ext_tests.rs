use fpd_types::{RawExt, User};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_bytes_keeps_bytes_verbatim() {
    let ext = RawExt::from_bytes(b"{ \"a\" : 1 }".to_vec());
    assert_eq!(ext.as_bytes(), b"{ \"a\" : 1 }");
    assert!(!ext.is_empty());
    assert!(RawExt::default().is_empty());
}

#[test]
fn malformed_bytes_are_accepted_until_parsed() {
    let ext = RawExt::from("{oops");
    assert!(ext.to_value().is_err());
}

#[test]
fn debug_shows_json_text() {
    let ext = RawExt::from(r#"{"k":"v"}"#);
    assert_eq!(format!("{ext:?}"), r#"RawExt({"k":"v"})"#);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn decodes_any_json_value_in_key_order() {
    let user: User = serde_json::from_value(json!({"ext": {"z": 1, "a": [true, null]}})).unwrap();
    assert_eq!(user.ext.unwrap().as_bytes(), br#"{"z":1,"a":[true,null]}"#);
}

#[test]
fn encodes_as_embedded_json() {
    let user = User {
        id: "u".to_string(),
        ext: Some(RawExt::from(r#"{"consent":"abc"}"#)),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&user).unwrap(),
        r#"{"id":"u","ext":{"consent":"abc"}}"#
    );
}

#[test]
fn encoding_malformed_bytes_fails() {
    let user = User {
        ext: Some(RawExt::from("[1,")),
        ..Default::default()
    };
    assert!(serde_json::to_vec(&user).is_err());
}
