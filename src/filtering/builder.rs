//! Base predicate builder.
//!
//! [`PredicateBuilder`] accumulates predicate fragments into one mutable
//! [`Predicate`]. It knows nothing about entities, field lists or transport;
//! the specializations under [`super::entities`] own those. Every primitive
//! is a no-op on empty input, so callers can feed optional query parameters
//! straight through without pre-checking.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::predicate::{FieldCondition, Predicate, SearchTerm};
use crate::models::{OneOrMany, RawDate};

/// Soft-delete marker column; visible rows have it unset.
pub const SOFT_DELETE_FIELD: &str = "deletedOn";

fn date_value(dt: DateTime<Utc>) -> Value {
    Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Stateful, resettable accumulator for one list query's predicate.
///
/// One instance lives for one request. All mutators return `&mut Self` for
/// chaining; [`PredicateBuilder::build`] snapshots the current state without
/// consuming the builder, and [`PredicateBuilder::reset`] makes the instance
/// safe to reuse.
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    predicate: Predicate,
}

impl PredicateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all accumulated state. Safe to call at any point.
    pub fn reset(&mut self) -> &mut Self {
        self.predicate.clear();
        self
    }

    /// Restrict to rows whose soft-delete marker is unset.
    pub fn exclude_soft_deleted(&mut self) -> &mut Self {
        self.predicate
            .set(SOFT_DELETE_FIELD, FieldCondition::Equals(Value::Null));
        self
    }

    /// Apply a free-text search as an OR of contains-terms across `fields`,
    /// preserving field order.
    ///
    /// No-op when the term is absent/empty or the field list is empty. A
    /// builder holds at most one disjunction; a later call overwrites it.
    pub fn search(&mut self, term: Option<&str>, fields: &[&str]) -> &mut Self {
        if let Some(term) = term
            && !term.is_empty()
            && !fields.is_empty()
        {
            let terms = fields
                .iter()
                .map(|field| SearchTerm {
                    field: (*field).to_string(),
                    needle: term.to_string(),
                })
                .collect();
            self.predicate.set_search(terms);
        }
        self
    }

    /// Constrain `field` to an inclusive date range.
    ///
    /// Each bound is resolved through [`RawDate::resolve`]; bounds that are
    /// absent or unparseable are omitted, and when neither survives no
    /// predicate is set.
    pub fn date_range(
        &mut self,
        field: &str,
        start: Option<&RawDate>,
        end: Option<&RawDate>,
    ) -> &mut Self {
        let gte = start.and_then(RawDate::resolve).map(date_value);
        let lte = end.and_then(RawDate::resolve).map(date_value);
        if gte.is_some() || lte.is_some() {
            self.predicate.set(field, FieldCondition::Range { gte, lte });
        }
        self
    }

    /// Constrain `field` to a set of discrete values (`IN` semantics).
    ///
    /// A bare scalar is normalized to a one-element set. An explicitly empty
    /// collection means "no constraint", not "match nothing".
    pub fn any_of<T>(&mut self, field: &str, values: Option<&OneOrMany<T>>) -> &mut Self
    where
        T: Clone + Into<Value>,
    {
        if let Some(values) = values
            && !values.is_empty()
        {
            let values = values.as_slice().iter().cloned().map(Into::into).collect();
            self.predicate.set(field, FieldCondition::In(values));
        }
        self
    }

    /// Constrain `field` to values containing the given substring. An empty
    /// string is treated as absent.
    pub fn contains(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value
            && !value.is_empty()
        {
            self.predicate
                .set(field, FieldCondition::Contains(value.to_string()));
        }
        self
    }

    /// Constrain `field` to an inclusive numeric range. A bound of `0` is a
    /// real bound; absence is expressed by `None`, never a sentinel.
    pub fn numeric_range(&mut self, field: &str, min: Option<f64>, max: Option<f64>) -> &mut Self {
        if min.is_some() || max.is_some() {
            self.predicate.set(
                field,
                FieldCondition::Range {
                    gte: min.map(Value::from),
                    lte: max.map(Value::from),
                },
            );
        }
        self
    }

    /// Constrain `field` to exactly the given value.
    pub fn exact<T: Into<Value>>(&mut self, field: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.predicate
                .set(field, FieldCondition::Equals(value.into()));
        }
        self
    }

    /// Snapshot the current predicate. The returned value is detached from
    /// the builder; further builder calls do not affect it.
    #[must_use]
    pub fn build(&self) -> Predicate {
        self.predicate.clone()
    }
}
