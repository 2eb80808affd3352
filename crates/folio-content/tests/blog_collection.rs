//! Integration test: blog posts validated and decoded end to end.

use folio_content::collections::{BlogPost, BLOG, DEFAULT_AUTHOR};
use folio_content::{build_registry, get_entry, get_entry_as, ContentConfig, ContentError};
use folio_core::RawRecord;
use folio_schema::{IssueCode, UnknownFieldPolicy};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn post(yaml: &str) -> RawRecord {
    RawRecord::from_yaml_str(yaml).unwrap()
}

const HELLO: &str = r#"
title: Hello, world
description: The first post
date: 2024-03-10T08:30:00+02:00
author: Sam Rivera
tags: [intro, meta]
draft: true
"#;

#[test]
fn valid_post_keeps_declared_values() {
    init_tracing();
    let entry = get_entry(BLOG, &post(HELLO)).unwrap();

    assert_eq!(entry.get_str("title"), Some("Hello, world"));
    assert_eq!(entry.get_str("author"), Some("Sam Rivera"));
    assert_eq!(entry.get_bool("draft"), Some(true));
    assert_eq!(entry.get_strings("tags"), Some(vec!["intro", "meta"]));
    assert_eq!(
        entry.get_datetime("date").unwrap().to_string(),
        "2024-03-10T06:30:00Z"
    );
}

#[test]
fn defaults_fill_author_and_draft() {
    init_tracing();
    let entry = get_entry(
        BLOG,
        &post("title: T\ndescription: D\ndate: 2024-01-01\ntags: []\n"),
    )
    .unwrap();

    assert_eq!(entry.get_str("author"), Some(DEFAULT_AUTHOR));
    assert_eq!(entry.get_bool("draft"), Some(false));
    assert_eq!(entry.get_strings("tags"), Some(vec![]));
}

#[test]
fn decodes_into_blog_post() {
    init_tracing();
    let decoded: BlogPost = get_entry_as(BLOG, &post(HELLO)).unwrap();
    assert_eq!(decoded.title, "Hello, world");
    assert_eq!(decoded.tags, ["intro", "meta"]);
    assert!(decoded.draft);
    assert_eq!(decoded.date.to_string(), "2024-03-10T06:30:00Z");

    let via_record = BlogPost::from_record(&get_entry(BLOG, &post(HELLO)).unwrap()).unwrap();
    assert_eq!(via_record, decoded);
}

#[test]
fn missing_fields_are_all_reported() {
    init_tracing();
    let err = get_entry(BLOG, &post("title: Only a title\n")).unwrap_err();
    let issues = err.validation().expect("validation failure");

    assert_eq!(issues.paths(), ["description", "date", "tags"]);
    assert!(issues
        .issues()
        .iter()
        .all(|i| i.code() == IssueCode::MissingRequiredField));
}

#[test]
fn bad_tag_is_reported_by_index() {
    init_tracing();
    let raw = post("title: T\ndescription: D\ndate: 2024-01-01\ntags: [rust, 2024, web]\n");
    let err = get_entry(BLOG, &raw).unwrap_err();
    let issues = err.validation().unwrap();

    assert_eq!(issues.paths(), ["tags[1]"]);
    assert!(err.to_string().contains("tags[1]: expected string, got integer"));
}

#[test]
fn decode_mismatch_is_a_decode_error() {
    init_tracing();

    #[derive(Debug, serde::Deserialize)]
    struct NeedsSlug {
        #[allow(dead_code)]
        slug: String,
    }

    let err = get_entry_as::<NeedsSlug>(BLOG, &post(HELLO)).unwrap_err();
    assert!(matches!(err, ContentError::Decode { ref collection, .. } if collection == BLOG));
}

#[test]
fn unknown_collection() {
    init_tracing();
    let err = get_entry("newsletter", &post(HELLO)).unwrap_err();
    assert!(err.is_unknown_collection());
    assert!(err.validation().is_none());
}

#[test]
fn unknown_fields_dropped_by_default_rejected_when_configured() {
    init_tracing();
    let raw = post("title: T\ndescription: D\ndate: 2024-01-01\ntags: []\nlayout: wide\n");

    let lenient = build_registry(&ContentConfig::default()).unwrap();
    assert!(!lenient.validate(BLOG, &raw).unwrap().contains("layout"));

    let config = ContentConfig::from_lookup(|_| Some("reject".to_string()));
    assert_eq!(config.validation.unknown_fields, UnknownFieldPolicy::Reject);
    let strict = build_registry(&config).unwrap();
    let err = strict.validate(BLOG, &raw).unwrap_err();
    let issues = err.validation().unwrap();
    assert_eq!(issues.paths(), ["layout"]);
    assert_eq!(issues.issues()[0].code(), IssueCode::UnknownField);
}

#[test]
fn concurrent_lookups_share_one_registry() {
    init_tracing();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = RawRecord::new()
                    .with("title", format!("Post {i}"))
                    .with("description", "d")
                    .with("date", "2024-05-01 12:00:00")
                    .with("tags", vec!["t"]);
                let decoded: BlogPost = get_entry_as(BLOG, &raw).unwrap();
                assert_eq!(decoded.title, format!("Post {i}"));
                folio_content::registry().unwrap() as *const _ as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn yaml_timestamp_forms_are_accepted() {
    init_tracing();
    for (date, expected) in [
        ("2024-03-10 08:30:00 +02:00", "2024-03-10T06:30:00Z"),
        ("2024-03-10T08:30:00+02", "2024-03-10T06:30:00Z"),
        ("2024-03-10 08:30:00 -05", "2024-03-10T13:30:00Z"),
        ("2024-03-10T08:30:00Z", "2024-03-10T08:30:00Z"),
        ("2024-03-10", "2024-03-10T00:00:00Z"),
    ] {
        let raw = RawRecord::new()
            .with("title", "T")
            .with("description", "D")
            .with("date", date)
            .with("tags", Vec::<&str>::new());
        let entry = get_entry(BLOG, &raw).unwrap_or_else(|e| panic!("{date:?} rejected: {e}"));
        assert_eq!(entry.get_datetime("date").unwrap().to_string(), expected, "{date:?}");
    }
}
