//! Property-based tests for the cell grammar.
//!
//! Uses proptest to verify that:
//! - `;`-joined lists split back into the same values
//! - extension cells keep one `key:value` entry per key through the quote-aware splitter,
//!   including lists, opaque maps and values with balanced quotes
//! - string lists with embedded delimiters survive a full document round trip
//! - free text survives top-level CSV quoting

use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use metacsv_codec::decode::{
    decode_extension, decode_string_list, split_extension, split_multi_value,
};
use metacsv_codec::encode::{encode_extension, encode_string_list, format_extension_value};
use metacsv_codec::{Document, Extension, ExtensionValue, Header, RecordBuilder};
use metacsv_codec::{format, parse_document};

fn opaque_map() -> impl Strategy<Value = ExtensionValue> {
    prop::collection::btree_map("[a-z]{1,6}", "[a-z ;,\"|]{0,8}", 1..4).prop_map(|entries| {
        ExtensionValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect::<Map<String, Value>>(),
        )
    })
}

fn leaf_value() -> impl Strategy<Value = ExtensionValue> {
    prop_oneof![
        ("[a-z]{1,8}", "[a-zA-Z0-9_.]{1,20}")
            .prop_map(|(t, fqn)| ExtensionValue::entity_reference(t, fqn)),
        (any::<u32>(), any::<u32>())
            .prop_map(|(start, end)| ExtensionValue::time_interval(start.to_string(), end.to_string())),
        "[a-z ,;]{0,12}".prop_map(ExtensionValue::string),
        ("[a-z ]{0,4}", "[a-z]{1,5}", "[a-z ]{0,4}")
            .prop_map(|(before, quoted, after)| ExtensionValue::string(format!("{before}\"{quoted}\"{after}"))),
        opaque_map(),
    ]
}

fn extension_value() -> impl Strategy<Value = ExtensionValue> {
    prop_oneof![
        3 => leaf_value(),
        1 => prop::collection::vec(leaf_value(), 1..4).prop_map(ExtensionValue::List),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..Default::default()
    })]

    /// Property: separator-free values split back unchanged.
    #[test]
    fn multi_value_roundtrip(values in prop::collection::vec("[A-Za-z0-9_.-]{1,12}", 1..8)) {
        let cell = encode_string_list(&values);
        prop_assert_eq!(split_multi_value(cell.as_deref()), Some(values));
    }

    /// Property: one entry per key, each equal to `key:formattedValue`.
    #[test]
    fn extension_entries_survive_split(
        entries in prop::collection::btree_map("[a-z][a-zA-Z0-9]{0,10}", extension_value(), 1..6)
    ) {
        let entries: BTreeMap<String, ExtensionValue> = entries;
        let extension: Extension = entries.clone().into_iter().collect();
        let cell = encode_extension(Some(&extension));
        let split = split_extension(cell.as_deref());

        let expected: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{key}:{}", format_extension_value(value)))
            .collect();
        prop_assert_eq!(split, expected);
    }

    /// Property: extension entries survive top-level CSV quoting as well.
    #[test]
    fn extension_document_roundtrip(
        entries in prop::collection::btree_map("[a-z][a-zA-Z0-9]{0,10}", extension_value(), 1..5)
    ) {
        let entries: BTreeMap<String, ExtensionValue> = entries;
        let extension: Extension = entries.clone().into_iter().collect();
        let doc = Document::from_parts(
            vec![Header::required("name"), Header::optional("extension")],
            vec![RecordBuilder::new().string(Some("term")).extension(Some(&extension)).build()],
        ).unwrap();

        let parsed = parse_document(&format(&doc).unwrap()).unwrap();
        let expected: Vec<(String, String)> = entries
            .iter()
            .map(|(key, value)| (key.clone(), format_extension_value(value)))
            .collect();
        prop_assert_eq!(decode_extension(parsed.cell(0, 1)), expected);
    }

    /// Property: string lists with `,` and `;` inside values survive the full document.
    #[test]
    fn string_list_document_roundtrip(values in prop::collection::vec("[a-z,;]{1,8}", 1..6)) {
        let doc = Document::from_parts(
            vec![Header::required("name"), Header::optional("synonyms")],
            vec![RecordBuilder::new().string(Some("term")).string_list(&values).build()],
        ).unwrap();

        let parsed = parse_document(&format(&doc).unwrap()).unwrap();
        prop_assert_eq!(decode_string_list(parsed.cell(0, 1)), values);
    }

    /// Property: free text comes back verbatim through top-level quoting.
    #[test]
    fn free_text_document_roundtrip(text in "[a-zA-Z0-9 ,;:\"|\n]{1,40}") {
        let doc = Document::from_parts(
            vec![Header::optional("description"), Header::optional("name")],
            vec![vec![Some(text.clone()), Some("x".to_string())]],
        ).unwrap();

        let parsed = parse_document(&format(&doc).unwrap()).unwrap();
        prop_assert_eq!(parsed.cell(0, 0), Some(text.as_str()));
    }
}
