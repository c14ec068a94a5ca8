//! Core data types for metacsv-codec.
//!
//! Serde shapes follow the camelCase JSON of entity payloads so values can be
//! deserialized straight from exported entity documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

/// First path segment that marks a classification tag as a tier assignment.
pub const TIER_PREFIX: &str = "Tier";

/// Column header metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl Header {
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }

    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

/// One already-encoded row. `None` cells carry no value.
pub type Row = Vec<Option<String>>;

/// Typed reference to another entity.
///
/// Two references are equal when their fully-qualified names are equal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub fully_qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityReference {
    #[must_use]
    pub fn new(entity_type: impl Into<String>, fully_qualified_name: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fully_qualified_name: fully_qualified_name.into(),
            name: None,
        }
    }

    /// Reference whose short name and fully-qualified name are the same, as
    /// for users and teams.
    #[must_use]
    pub fn named(entity_type: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            entity_type: entity_type.into(),
            fully_qualified_name: name.clone(),
            name: Some(name),
        }
    }

    /// Short name, falling back to the fully-qualified name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.fully_qualified_name)
    }
}

impl PartialEq for EntityReference {
    fn eq(&self, other: &Self) -> bool {
        self.fully_qualified_name == other.fully_qualified_name
    }
}

impl Eq for EntityReference {}

impl Hash for EntityReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fully_qualified_name.hash(state);
    }
}

/// Where a tag label comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagSource {
    Classification,
    Glossary,
}

impl TagSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "Classification",
            Self::Glossary => "Glossary",
        }
    }
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a tag label was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelType {
    #[default]
    Manual,
    Propagated,
    Automated,
    Derived,
}

impl LabelType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Propagated => "Propagated",
            Self::Automated => "Automated",
            Self::Derived => "Derived",
        }
    }
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tag or glossary term attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagLabel {
    #[serde(rename = "tagFQN")]
    pub tag_fqn: String,
    pub source: TagSource,
    #[serde(default)]
    pub label_type: LabelType,
}

impl TagLabel {
    #[must_use]
    pub fn new(tag_fqn: impl Into<String>, source: TagSource, label_type: LabelType) -> Self {
        Self {
            tag_fqn: tag_fqn.into(),
            source,
            label_type,
        }
    }

    #[must_use]
    pub fn classification(tag_fqn: impl Into<String>) -> Self {
        Self::new(tag_fqn, TagSource::Classification, LabelType::Manual)
    }

    #[must_use]
    pub fn glossary(tag_fqn: impl Into<String>) -> Self {
        Self::new(tag_fqn, TagSource::Glossary, LabelType::Manual)
    }

    /// True when the first `.`-separated segment of the FQN is `Tier`.
    #[must_use]
    pub fn is_tier(&self) -> bool {
        self.tag_fqn.split('.').next() == Some(TIER_PREFIX)
    }
}

/// Column category a tag list is exported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// Plain classification tags, excluding tiers and derived labels.
    Classification,
    /// Glossary terms.
    Glossary,
    /// Tier assignments.
    Tier,
}

impl TagCategory {
    /// Whether `tag` belongs in a column of this category.
    #[must_use]
    pub fn includes(&self, tag: &TagLabel) -> bool {
        match self {
            Self::Classification => {
                tag.source == TagSource::Classification
                    && tag.label_type != LabelType::Derived
                    && !tag.is_tier()
            }
            Self::Glossary => tag.source == TagSource::Glossary && !tag.is_tier(),
            Self::Tier => tag.source == TagSource::Classification && tag.is_tier(),
        }
    }
}

/// Leaf value of an extension attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// Value of one extension attribute.
///
/// The variant is decided once, when the value is built from JSON, by the keys
/// an object carries: `type` + `fullyQualifiedName` makes an entity reference,
/// `start` + `end` makes a time interval, anything else is kept as an opaque map.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue {
    Scalar(Scalar),
    EntityReference {
        entity_type: String,
        fully_qualified_name: String,
    },
    TimeInterval {
        start: String,
        end: String,
    },
    List(Vec<ExtensionValue>),
    Map(Map<String, Value>),
}

impl ExtensionValue {
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    #[must_use]
    pub fn entity_reference(
        entity_type: impl Into<String>,
        fully_qualified_name: impl Into<String>,
    ) -> Self {
        Self::EntityReference {
            entity_type: entity_type.into(),
            fully_qualified_name: fully_qualified_name.into(),
        }
    }

    #[must_use]
    pub fn time_interval(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::TimeInterval {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Classify a JSON value into its extension shape.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n.clone())),
            Value::String(s) => Self::Scalar(Scalar::String(s.clone())),
            Value::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            Value::Object(map) => {
                if let (Some(entity_type), Some(fqn)) =
                    (map.get("type"), map.get("fullyQualifiedName"))
                {
                    Self::EntityReference {
                        entity_type: json_text(entity_type),
                        fully_qualified_name: json_text(fqn),
                    }
                } else if let (Some(start), Some(end)) = (map.get("start"), map.get("end")) {
                    Self::TimeInterval {
                        start: json_text(start),
                        end: json_text(end),
                    }
                } else {
                    Self::Map(map.clone())
                }
            }
        }
    }
}

impl From<&EntityReference> for ExtensionValue {
    fn from(reference: &EntityReference) -> Self {
        Self::entity_reference(&reference.entity_type, &reference.fully_qualified_name)
    }
}

/// Plain text of a JSON leaf: strings unquoted, null empty, other values as JSON.
fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Ordered map of custom attributes attached to an entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extension {
    entries: Vec<(String, ExtensionValue)>,
}

impl Extension {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value. Objects keep their key order; any other value
    /// yields an empty extension.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), ExtensionValue::from_json(value)))
                .collect(),
            Value::Null => Self::default(),
            other => {
                tracing::warn!(kind = json_kind(other), "extension is not an object; ignoring");
                Self::default()
            }
        }
    }

    /// Insert or replace `key`, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: ExtensionValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ExtensionValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ExtensionValue)> for Extension {
    fn from_iter<T: IntoIterator<Item = (K, ExtensionValue)>>(iter: T) -> Self {
        let mut extension = Self::new();
        for (key, value) in iter {
            extension.insert(key, value);
        }
        extension
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
