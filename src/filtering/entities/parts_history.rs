//! Parts-history filters: which equipment/part a replacement belongs to, the
//! maintenance outcome, and when it happened.
//!
//! Parts-history rows have no soft-delete column, so `build_complete` sets no
//! visibility predicate.

use serde::Deserialize;
use uuid::Uuid;

use crate::filtering::builder::PredicateBuilder;
use crate::filtering::predicate::Predicate;
use crate::models::{OneOrMany, RawDate};

const SEARCH_FIELDS: &[&str] = &["technician"];

/// Optional filters accepted by the parts-history list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartsHistoryFilters {
    /// Exact equipment id, not a multi-value filter.
    pub medical_equipment_id: Option<Uuid>,
    /// Exact sparepart id.
    pub sparepart_id: Option<Uuid>,
    /// One or more maintenance outcomes.
    pub result: Option<OneOrMany<String>>,
    pub replacement_date_start: Option<RawDate>,
    pub replacement_date_end: Option<RawDate>,
    pub created_on_start: Option<RawDate>,
    pub created_on_end: Option<RawDate>,
}

#[derive(Debug, Default)]
pub struct PartsHistoryFilterBuilder {
    builder: PredicateBuilder,
}

impl PartsHistoryFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search on the recorded technician.
    pub fn apply_search(&mut self, search: Option<&str>) -> &mut Self {
        self.builder.search(search, SEARCH_FIELDS);
        self
    }

    /// Apply every parts-history filter; absent fields are skipped.
    pub fn apply_filters(&mut self, filters: &PartsHistoryFilters) -> &mut Self {
        self.builder
            .exact(
                "medicalEquipmentId",
                filters.medical_equipment_id.map(|id| id.to_string()),
            )
            .exact("sparepartId", filters.sparepart_id.map(|id| id.to_string()))
            .any_of("result", filters.result.as_ref())
            .date_range(
                "replacementDate",
                filters.replacement_date_start.as_ref(),
                filters.replacement_date_end.as_ref(),
            )
            .date_range(
                "createdOn",
                filters.created_on_start.as_ref(),
                filters.created_on_end.as_ref(),
            );
        self
    }

    /// Full predicate for one list request: optional search, then all
    /// filters.
    pub fn build_complete(
        &mut self,
        search: Option<&str>,
        filters: &PartsHistoryFilters,
    ) -> Predicate {
        self.builder.reset();
        self.apply_search(search);
        self.apply_filters(filters);
        self.builder.build()
    }
}
