use fpd_core::{
    BidderFpdMap, EntityKey, FpdError, GlobalRawFpd, GlobalStructuredFpd, ParticipationSet, StructuredKey,
    build_resolved_fpd_for_bidders, resolve_app, resolve_site, resolve_user,
};
use fpd_types::{App, BidRequest, BidderName, Content, Data, FpdData, RawExt, Site, User};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn ext(value: Value) -> Option<RawExt> {
    Some(RawExt::from_value(&value).unwrap())
}

fn ext_value(ext: Option<&RawExt>) -> Value {
    ext.unwrap().to_value().unwrap()
}

fn data(id: &str) -> Data {
    Data {
        id: id.to_string(),
        ..Default::default()
    }
}

fn participants(names: &[&str]) -> ParticipationSet {
    names.iter().map(|n| BidderName::from(*n)).collect()
}

// ── Absence ──────────────────────────────────────────────────────

#[test]
fn nothing_to_resolve_yields_none() {
    assert!(resolve_user(None, None, None, None, false).unwrap().is_none());
    assert!(resolve_site(None, None, Some(br#"{"a":1}"#), None, false).unwrap().is_none());
    assert!(resolve_app(None, None, None, Some(&[data("d")]), false).unwrap().is_none());
}

#[test]
fn participating_bidder_gets_entity_from_global_data_alone() {
    let user = resolve_user(None, None, Some(br#"{"a":1}"#), None, true).unwrap().unwrap();
    assert_eq!(ext_value(user.ext.as_ref()), json!({"data": {"a": 1}}));

    let site = resolve_site(None, None, None, Some(&[data("s")]), true).unwrap().unwrap();
    assert_eq!(site.content.unwrap().data, vec![data("s")]);
}

#[test]
fn base_only_is_copied_unchanged() {
    let base = User {
        id: "u1".to_string(),
        keywords: "base".to_string(),
        ext: ext(json!({"consent": "c"})),
        ..Default::default()
    };
    let resolved = resolve_user(None, Some(&base), Some(br#"{"x":1}"#), None, false).unwrap();
    assert_eq!(resolved, Some(base));
}

// ── Global FPD ───────────────────────────────────────────────────

#[test]
fn global_raw_fpd_is_wrapped_under_data() {
    let base = Site {
        page: "p".to_string(),
        ext: ext(json!({"amp": 1, "data": {"old": true}})),
        ..Default::default()
    };
    let site = resolve_site(None, Some(&base), Some(br#"{"new":true}"#), None, true)
        .unwrap()
        .unwrap();

    assert_eq!(ext_value(site.ext.as_ref()), json!({"amp": 1, "data": {"old": true, "new": true}}));
    assert_eq!(site.page, "p");
}

#[test]
fn global_structured_data_replaces_content_data() {
    let base = App {
        bundle: "com.example".to_string(),
        content: Some(Content {
            title: "t".to_string(),
            data: vec![data("stale")],
            ..Default::default()
        }),
        ..Default::default()
    };
    let app = resolve_app(None, Some(&base), None, Some(&[data("fresh")]), true)
        .unwrap()
        .unwrap();

    let content = app.content.unwrap();
    assert_eq!(content.data, vec![data("fresh")]);
    assert_eq!(content.title, "t");
}

#[test]
fn site_content_is_created_when_absent() {
    let base = Site::default();
    let site = resolve_site(None, Some(&base), None, Some(&[data("d")]), true)
        .unwrap()
        .unwrap();
    assert_eq!(site.content.unwrap().data, vec![data("d")]);
}

// ── Bidder overrides ─────────────────────────────────────────────

#[test]
fn override_fields_replace_even_with_empty_values() {
    let base = User {
        id: "keep".to_string(),
        keywords: "base-kw".to_string(),
        gender: "M".to_string(),
        yob: 1980,
        ..Default::default()
    };
    let user = resolve_user(Some(&User::default()), Some(&base), None, None, false)
        .unwrap()
        .unwrap();

    assert_eq!(user.id, "keep");
    assert_eq!(user.keywords, "");
    assert_eq!(user.gender, "");
    assert_eq!(user.yob, 0);
}

#[test]
fn site_override_replaces_named_fields_only() {
    let base = Site {
        id: "site-id".to_string(),
        name: "base".to_string(),
        page: "https://base".to_string(),
        referrer: "https://ref".to_string(),
        cat: vec!["IAB1".to_string()],
        ..Default::default()
    };
    let over = Site {
        id: "ignored".to_string(),
        name: "override".to_string(),
        domain: "override.com".to_string(),
        pagecat: vec!["IAB2".to_string()],
        search: "q".to_string(),
        keywords: "k".to_string(),
        ..Default::default()
    };
    let site = resolve_site(Some(&over), Some(&base), None, None, false).unwrap().unwrap();

    assert_eq!(site.id, "site-id");
    assert_eq!(site.referrer, "https://ref");
    assert_eq!(site.name, "override");
    assert_eq!(site.domain, "override.com");
    assert!(site.cat.is_empty());
    assert_eq!(site.pagecat, vec!["IAB2".to_string()]);
    assert_eq!(site.page, "");
    assert_eq!(site.search, "q");
    assert_eq!(site.keywords, "k");
}

#[test]
fn app_override_replaces_named_fields_only() {
    let base = App {
        id: "app-id".to_string(),
        bundle: "com.base".to_string(),
        ver: "1.0".to_string(),
        paid: 1,
        ..Default::default()
    };
    let over = App {
        name: "n".to_string(),
        bundle: "com.override".to_string(),
        storeurl: "https://store".to_string(),
        sectioncat: vec!["IAB3".to_string()],
        ..Default::default()
    };
    let app = resolve_app(Some(&over), Some(&base), None, None, false).unwrap().unwrap();

    assert_eq!(app.id, "app-id");
    assert_eq!(app.paid, 1);
    assert_eq!(app.name, "n");
    assert_eq!(app.bundle, "com.override");
    assert_eq!(app.storeurl, "https://store");
    assert_eq!(app.sectioncat, vec!["IAB3".to_string()]);
    assert_eq!(app.ver, "");
}

#[test]
fn override_without_base_starts_from_empty_entity() {
    let over = User {
        keywords: "kw".to_string(),
        ext: ext(json!({"k": 1})),
        ..Default::default()
    };
    let user = resolve_user(Some(&over), None, None, None, false).unwrap().unwrap();
    assert_eq!(user.keywords, "kw");
    assert_eq!(ext_value(user.ext.as_ref()), json!({"k": 1}));
}

#[test]
fn global_then_override_ext_merge() {
    let base = User {
        ext: ext(json!({"a": 1})),
        ..Default::default()
    };
    let over = User {
        ext: ext(json!({"a": null, "c": 3})),
        ..Default::default()
    };
    let user = resolve_user(Some(&over), Some(&base), Some(br#"{"b":2}"#), None, true)
        .unwrap()
        .unwrap();

    assert_eq!(ext_value(user.ext.as_ref()), json!({"data": {"b": 2}, "c": 3}));
}

// ── Merge failures ───────────────────────────────────────────────

#[test]
fn malformed_override_ext_is_a_merge_error() {
    let over = Site {
        ext: Some(RawExt::from("{not json")),
        ..Default::default()
    };
    let err = resolve_site(Some(&over), Some(&Site::default()), None, None, false).unwrap_err();
    assert!(matches!(err, FpdError::FpdMerge { entity: EntityKey::Site, .. }));
    assert!(err.is_merge_error());
}

#[test]
fn malformed_global_blob_is_a_merge_error() {
    let err = resolve_app(None, Some(&App::default()), Some(b"{broken"), None, true).unwrap_err();
    assert!(matches!(err, FpdError::FpdMerge { entity: EntityKey::App, .. }));
}

#[test]
fn malformed_base_ext_is_a_merge_error() {
    let base = User {
        ext: Some(RawExt::from("[")),
        ..Default::default()
    };
    let over = User {
        ext: ext(json!({"a": 1})),
        ..Default::default()
    };
    assert!(resolve_user(Some(&over), Some(&base), None, None, false).unwrap_err().is_merge_error());
}

// ── All bidders ──────────────────────────────────────────────────

fn shared_request() -> BidRequest {
    BidRequest {
        id: "req".to_string(),
        user: Some(User {
            id: "u".to_string(),
            ext: ext(json!({"consent": "c"})),
            ..Default::default()
        }),
        site: Some(Site {
            page: "https://example.com".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn globals() -> (GlobalRawFpd, GlobalStructuredFpd) {
    let mut raw = GlobalRawFpd::new();
    raw.insert(EntityKey::User, br#"{"segment":"sports"}"#.to_vec());
    raw.insert(EntityKey::Site, br#"{"section":"news"}"#.to_vec());
    let mut structured = GlobalStructuredFpd::new();
    structured.insert(StructuredKey::UserData, vec![data("global-user")]);
    (raw, structured)
}

#[test]
fn only_participating_bidders_see_global_fpd() {
    let request = shared_request();
    let (raw, structured) = globals();
    let mut bidder_fpd = BidderFpdMap::new();
    bidder_fpd.insert(BidderName::from("a"), FpdData::default());
    bidder_fpd.insert(BidderName::from("b"), FpdData::default());

    let resolved =
        build_resolved_fpd_for_bidders(&request, &bidder_fpd, &raw, &structured, &participants(&["a"])).unwrap();

    let a_user = resolved[&BidderName::from("a")].user.clone().unwrap();
    assert_eq!(a_user.data, vec![data("global-user")]);
    assert_eq!(
        ext_value(a_user.ext.as_ref()),
        json!({"consent": "c", "data": {"segment": "sports"}})
    );

    let b_user = resolved[&BidderName::from("b")].user.clone().unwrap();
    assert!(b_user.data.is_empty());
    assert_eq!(ext_value(b_user.ext.as_ref()), json!({"consent": "c"}));
    assert!(resolved[&BidderName::from("b")].app.is_none());
}

#[test]
fn merge_failure_rejects_every_bidder() {
    let request = shared_request();
    let (raw, structured) = globals();
    let mut bidder_fpd = BidderFpdMap::new();
    bidder_fpd.insert(BidderName::from("a"), FpdData::default());
    bidder_fpd.insert(
        BidderName::from("bad"),
        FpdData {
            user: Some(User {
                ext: Some(RawExt::from("{\"a\":")),
                ..Default::default()
            }),
            ..Default::default()
        },
    );

    let err = build_resolved_fpd_for_bidders(&request, &bidder_fpd, &raw, &structured, &participants(&["a"]))
        .unwrap_err();
    assert!(matches!(err, FpdError::FpdMerge { entity: EntityKey::User, .. }));
}

#[test]
fn resolved_entities_are_isolated() {
    let request = shared_request();
    let (raw, structured) = globals();
    let mut bidder_fpd = BidderFpdMap::new();
    bidder_fpd.insert(BidderName::from("a"), FpdData::default());
    bidder_fpd.insert(BidderName::from("b"), FpdData::default());
    let all = participants(&["a", "b"]);

    let mut resolved = build_resolved_fpd_for_bidders(&request, &bidder_fpd, &raw, &structured, &all).unwrap();
    let before_b = resolved[&BidderName::from("b")].clone();

    let a = resolved.get_mut(&BidderName::from("a")).unwrap();
    let a_user = a.user.as_mut().unwrap();
    a_user.ext = ext(json!({"mutated": true}));
    a_user.data.push(data("extra"));
    a.site.as_mut().unwrap().page = "changed".to_string();

    assert_eq!(resolved[&BidderName::from("b")], before_b);
    assert_eq!(request, shared_request());
}

#[test]
fn resolution_is_deterministic() {
    let request = shared_request();
    let (raw, structured) = globals();
    let mut bidder_fpd = BidderFpdMap::new();
    bidder_fpd.insert(
        BidderName::from("a"),
        FpdData {
            site: Some(Site {
                name: "n".to_string(),
                ext: ext(json!({"x": [1, 2], "y": {"z": null}})),
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    let all = participants(&["a"]);

    let first = build_resolved_fpd_for_bidders(&request, &bidder_fpd, &raw, &structured, &all).unwrap();
    let second = build_resolved_fpd_for_bidders(&request, &bidder_fpd, &raw, &structured, &all).unwrap();

    assert_eq!(serde_json::to_vec(&first).unwrap(), serde_json::to_vec(&second).unwrap());
}
