//! User listing filters: role and division membership plus audit-date ranges.

use serde::Deserialize;

use crate::filtering::builder::PredicateBuilder;
use crate::filtering::predicate::Predicate;
use crate::models::{OneOrMany, RawDate};

const SEARCH_FIELDS: &[&str] = &["fullname", "email", "username"];

/// Optional filters accepted by the user list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilters {
    /// One or more roles; a bare scalar is accepted.
    pub role: Option<OneOrMany<String>>,
    /// One or more division ids.
    pub divisi_id: Option<OneOrMany<i64>>,
    pub created_on_start: Option<RawDate>,
    pub created_on_end: Option<RawDate>,
    pub modified_on_start: Option<RawDate>,
    pub modified_on_end: Option<RawDate>,
}

#[derive(Debug, Default)]
pub struct UserFilterBuilder {
    builder: PredicateBuilder,
}

impl UserFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search across fullname, email and username.
    pub fn apply_search(&mut self, search: Option<&str>) -> &mut Self {
        self.builder.search(search, SEARCH_FIELDS);
        self
    }

    /// Apply every user filter; absent fields are skipped.
    pub fn apply_filters(&mut self, filters: &UserFilters) -> &mut Self {
        self.builder
            .any_of("role", filters.role.as_ref())
            .any_of("divisiId", filters.divisi_id.as_ref())
            .date_range(
                "createdOn",
                filters.created_on_start.as_ref(),
                filters.created_on_end.as_ref(),
            )
            .date_range(
                "modifiedOn",
                filters.modified_on_start.as_ref(),
                filters.modified_on_end.as_ref(),
            );
        self
    }

    /// Full predicate for one list request: visible rows only, optional
    /// search, then all filters.
    pub fn build_complete(&mut self, search: Option<&str>, filters: &UserFilters) -> Predicate {
        self.builder.reset().exclude_soft_deleted();
        self.apply_search(search);
        self.apply_filters(filters);
        self.builder.build()
    }
}
