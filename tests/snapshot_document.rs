//! Snapshot of a formatted document built from the default layout.

mod common;

use common::GLOSSARY_JSON;
use insta::{assert_json_snapshot, assert_snapshot};
use metacsv::config::Config;
use metacsv::sync::{export_entities, import_document, parse_entities};
use metacsv_codec::{format, parse_document};

#[test]
fn snapshot_default_layout_document() {
    let entities = parse_entities(GLOSSARY_JSON).unwrap();
    let (document, _) = export_entities(&entities, &Config::default()).unwrap();
    let text = format(&document).unwrap();

    assert!(text.ends_with("\r\n"));
    assert_snapshot!(text.replace("\r\n", "\n"), @r#"
    parent,name*,displayName,description,synonyms,relatedTerms,tags,glossaryTerms,tiers,reviewers,owners,deprecated,extension
    Finance,Revenue,Revenue,"Income from sales, before costs","income;""sales; gross""",Finance.Cost,PII.None,Finance.Metrics,Tier.Tier1,user:bob,team:finance,false,"steward:user:alice;window:1700000000000:1700000360000;""note:audited, quarterly"""
    ,Margin,,,,,,,,,,,
    "#);
}

#[test]
fn snapshot_imported_extension() {
    let document = parse_document(
        "name*,extension\r\norders,\"steward:user:alice;levels:low|high;\"\"note:a;b\"\"\"\r\n",
    )
    .unwrap();
    let (entities, _) = import_document(&document, &Config::default()).unwrap();

    assert_json_snapshot!(entities, @r#"
    [
      {
        "name": "orders",
        "extension": {
          "steward": "user:alice",
          "levels": "low|high",
          "note": "a;b"
        }
      }
    ]
    "#);
}
