//! Integration test: frontmatter parsed from YAML text, validated through a
//! registry, with every problem in a document reported in one pass.

use folio_core::{CollectionName, RawRecord};
use folio_schema::{
    FieldSpec, FieldType, IssueCode, RegistryError, SchemaDefinition, SchemaRegistry,
};

fn registry() -> SchemaRegistry {
    let docs = SchemaDefinition::builder()
        .field("title", FieldSpec::string())
        .field("updated", FieldSpec::datetime().optional())
        .field("sidebar", FieldSpec::boolean().optional().with_default(true))
        .field("aliases", FieldSpec::sequence_of(FieldType::String).optional())
        .build()
        .unwrap();

    let mut registry = SchemaRegistry::new();
    registry
        .register(CollectionName::new("docs").unwrap(), docs)
        .unwrap();
    registry
}

#[test]
fn well_formed_document() {
    let raw = RawRecord::from_yaml_str(
        r#"
title: Getting started
updated: 2024-06-01 09:15:00
aliases: [intro, quickstart]
layout: wide
"#,
    )
    .unwrap();

    let entry = registry().validate("docs", &raw).unwrap();
    assert_eq!(entry.get_str("title"), Some("Getting started"));
    assert_eq!(
        entry.get_datetime("updated").map(ToString::to_string).as_deref(),
        Some("2024-06-01T09:15:00Z")
    );
    assert_eq!(entry.get_bool("sidebar"), Some(true));
    assert_eq!(entry.get_strings("aliases"), Some(vec!["intro", "quickstart"]));
    assert!(!entry.contains("layout"));
}

#[test]
fn every_problem_reported_at_once() {
    let raw = RawRecord::from_yaml_str(
        r#"
updated: last week
sidebar: "no"
aliases:
  - intro
  - 3
  - [nested]
"#,
    )
    .unwrap();

    let err = registry().validate("docs", &raw).unwrap_err();
    let RegistryError::Validation { collection, source } = &err else {
        panic!("expected a validation failure, got: {err}");
    };
    assert_eq!(collection.as_str(), "docs");
    assert_eq!(
        source.paths(),
        ["title", "updated", "sidebar", "aliases[1]", "aliases[2]"]
    );
    assert_eq!(source.issues()[0].code(), IssueCode::MissingRequiredField);

    let report = err.to_string();
    for line in [
        "title: required field is missing",
        "updated: expected datetime, got string (unrecognized date/time \"last week\")",
        "sidebar: expected boolean, got string",
        "aliases[1]: expected string, got integer",
        "aliases[2]: expected string, got sequence",
    ] {
        assert!(report.contains(line), "missing {line:?} in:\n{report}");
    }
}

#[test]
fn yaml_null_is_a_type_error_not_absence() {
    let raw = RawRecord::from_yaml_str("title: Intro\nupdated:\n").unwrap();
    let err = registry().validate("docs", &raw).unwrap_err();
    assert_eq!(err.validation().unwrap().paths(), ["updated"]);
}

#[test]
fn undeclared_collection() {
    let raw = RawRecord::from_yaml_str("title: x\n").unwrap();
    let err = registry().validate("blog", &raw).unwrap_err();
    assert_eq!(err, RegistryError::UnknownCollection("blog".into()));
}
