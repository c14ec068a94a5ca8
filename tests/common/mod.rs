#![allow(dead_code)]

pub mod cli;

/// Entity fixture covering every kind in the default layout.
pub const GLOSSARY_JSON: &str = r#"[
  {
    "parent": {"type": "glossaryTerm", "fullyQualifiedName": "Finance"},
    "name": "Revenue",
    "displayName": "Revenue",
    "description": "Income from sales, before costs",
    "synonyms": ["income", "sales; gross"],
    "relatedTerms": [
      {"type": "glossaryTerm", "fullyQualifiedName": "Finance.Cost"}
    ],
    "tags": [
      {"tagFQN": "PII.None", "source": "Classification", "labelType": "Manual"},
      {"tagFQN": "Finance.Metrics", "source": "Glossary", "labelType": "Manual"},
      {"tagFQN": "Tier.Tier1", "source": "Classification", "labelType": "Manual"}
    ],
    "reviewers": [{"type": "user", "fullyQualifiedName": "bob", "name": "bob"}],
    "owners": [{"type": "team", "fullyQualifiedName": "finance", "name": "finance"}],
    "deprecated": false,
    "extension": {
      "steward": {"type": "user", "fullyQualifiedName": "alice"},
      "window": {"start": 1700000000000, "end": 1700000360000},
      "note": "audited, quarterly"
    }
  },
  {
    "name": "Margin"
  }
]"#;
