//! Storage-engine-agnostic predicate model.
//!
//! A [`Predicate`] is what the entity filter builders produce and what the
//! persistence layer consumes: a map from field name to a single
//! [`FieldCondition`], plus at most one free-text search disjunction. The
//! JSON rendering matches the wire shape the API has always exposed:
//!
//! ```json
//! {
//!   "deletedOn": null,
//!   "OR": [
//!     {"partsName": {"contains": "Test"}},
//!     {"toolLocation": {"contains": "Test"}}
//!   ],
//!   "toolLocation": {"contains": "Warehouse A"},
//!   "price": {"gte": 100.0, "lte": 200.0}
//! }
//! ```

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value, json};

/// Key the search disjunction serializes under. Never used as a field name.
pub const SEARCH_KEY: &str = "OR";

/// A single-field constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCondition {
    /// Exact match, including `Equals(Value::Null)` for unset-marker checks.
    Equals(Value),
    /// Case-insensitive substring match.
    Contains(String),
    /// Match any of a set of discrete values.
    In(Vec<Value>),
    /// Inclusive range; only the bounds present are enforced.
    Range {
        gte: Option<Value>,
        lte: Option<Value>,
    },
}

impl FieldCondition {
    /// Wire rendering of this condition (the value side of `{field: ...}`).
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Equals(value) => value.clone(),
            Self::Contains(needle) => json!({ "contains": needle }),
            Self::In(values) => json!({ "in": values }),
            Self::Range { gte, lte } => {
                let mut bounds = Map::new();
                if let Some(gte) = gte {
                    bounds.insert("gte".to_string(), gte.clone());
                }
                if let Some(lte) = lte {
                    bounds.insert("lte".to_string(), lte.clone());
                }
                Value::Object(bounds)
            }
        }
    }
}

/// One alternative of the search disjunction: a substring match on a field.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    pub field: String,
    pub needle: String,
}

fn search_alternatives(terms: &[SearchTerm]) -> Vec<Value> {
    terms
        .iter()
        .map(|term| {
            let mut alternative = Map::new();
            alternative.insert(term.field.clone(), json!({ "contains": term.needle }));
            Value::Object(alternative)
        })
        .collect()
}

/// The accumulated constraints for one list query.
///
/// Field order is irrelevant to semantics; the map keeps keys sorted so the
/// rendering is deterministic. Search terms keep their configured field
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    fields: BTreeMap<String, FieldCondition>,
    search: Option<Vec<SearchTerm>>,
}

impl Predicate {
    /// True when no constraint of any kind has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.search.is_none()
    }

    /// The condition set for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldCondition> {
        self.fields.get(field)
    }

    /// The search disjunction, if one was applied.
    #[must_use]
    pub fn search_terms(&self) -> Option<&[SearchTerm]> {
        self.search.as_deref()
    }

    /// Iterate the per-field conditions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldCondition)> {
        self.fields.iter().map(|(field, cond)| (field.as_str(), cond))
    }

    /// Wire rendering of the whole predicate.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(terms) = &self.search {
            map.insert(
                SEARCH_KEY.to_string(),
                Value::Array(search_alternatives(terms)),
            );
        }
        for (field, cond) in &self.fields {
            map.insert(field.clone(), cond.to_json());
        }
        Value::Object(map)
    }

    pub(crate) fn set(&mut self, field: &str, cond: FieldCondition) {
        self.fields.insert(field.to_string(), cond);
    }

    pub(crate) fn set_search(&mut self, terms: Vec<SearchTerm>) {
        self.search = Some(terms);
    }

    pub(crate) fn clear(&mut self) {
        self.fields.clear();
        self.search = None;
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.fields.len() + usize::from(self.search.is_some());
        let mut map = serializer.serialize_map(Some(entries))?;
        if let Some(terms) = &self.search {
            map.serialize_entry(SEARCH_KEY, &search_alternatives(terms))?;
        }
        for (field, cond) in &self.fields {
            map.serialize_entry(field, &cond.to_json())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_predicate_renders_empty_object() {
        let predicate = Predicate::default();
        assert!(predicate.is_empty());
        assert_eq!(predicate.to_json(), json!({}));
    }

    #[test]
    fn test_equals_renders_bare_value() {
        let mut predicate = Predicate::default();
        predicate.set("deletedOn", FieldCondition::Equals(Value::Null));
        assert_eq!(predicate.to_json(), json!({ "deletedOn": null }));
    }

    #[test]
    fn test_contains_and_in_shapes() {
        let mut predicate = Predicate::default();
        predicate.set(
            "toolLocation",
            FieldCondition::Contains("Warehouse A".to_string()),
        );
        predicate.set(
            "role",
            FieldCondition::In(vec![json!("ADMIN"), json!("USER")]),
        );
        assert_eq!(
            predicate.to_json(),
            json!({
                "toolLocation": { "contains": "Warehouse A" },
                "role": { "in": ["ADMIN", "USER"] },
            })
        );
    }

    /// A half-open range renders only the bound that is present.
    #[test]
    fn test_range_omits_absent_bounds() {
        let lower_only = FieldCondition::Range {
            gte: Some(json!(100.0)),
            lte: None,
        };
        assert_eq!(lower_only.to_json(), json!({ "gte": 100.0 }));

        let upper_only = FieldCondition::Range {
            gte: None,
            lte: Some(json!(200.0)),
        };
        assert_eq!(upper_only.to_json(), json!({ "lte": 200.0 }));
    }

    #[test]
    fn test_search_renders_under_or_key_in_field_order() {
        let mut predicate = Predicate::default();
        predicate.set_search(vec![
            SearchTerm {
                field: "partsName".to_string(),
                needle: "Test".to_string(),
            },
            SearchTerm {
                field: "toolLocation".to_string(),
                needle: "Test".to_string(),
            },
        ]);
        assert_eq!(
            predicate.to_json(),
            json!({
                "OR": [
                    { "partsName": { "contains": "Test" } },
                    { "toolLocation": { "contains": "Test" } },
                ]
            })
        );
    }

    /// `serde::Serialize` and `to_json` agree.
    #[test]
    fn test_serialize_matches_to_json() {
        let mut predicate = Predicate::default();
        predicate.set("userId", FieldCondition::Equals(json!("abc")));
        predicate.set_search(vec![SearchTerm {
            field: "complaint".to_string(),
            needle: "broken".to_string(),
        }]);
        assert_eq!(
            serde_json::to_value(&predicate).unwrap(),
            predicate.to_json()
        );
    }
}
