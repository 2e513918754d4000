//! Sparepart inventory filters: name/location text matching, price range and
//! purchase/audit-date ranges.

use serde::Deserialize;

use crate::filtering::builder::PredicateBuilder;
use crate::filtering::predicate::Predicate;
use crate::models::RawDate;

const SEARCH_FIELDS: &[&str] = &["partsName", "toolLocation"];

/// Optional filters accepted by the sparepart list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SparepartFilters {
    pub parts_name: Option<String>,
    pub tool_location: Option<String>,
    /// Inclusive price bounds; `0` is a real bound.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub purchase_date_start: Option<RawDate>,
    pub purchase_date_end: Option<RawDate>,
    pub created_on_start: Option<RawDate>,
    pub created_on_end: Option<RawDate>,
    pub modified_on_start: Option<RawDate>,
    pub modified_on_end: Option<RawDate>,
}

#[derive(Debug, Default)]
pub struct SparepartFilterBuilder {
    builder: PredicateBuilder,
}

impl SparepartFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search across part name and tool location.
    pub fn apply_search(&mut self, search: Option<&str>) -> &mut Self {
        self.builder.search(search, SEARCH_FIELDS);
        self
    }

    /// Apply every sparepart filter; absent fields are skipped.
    pub fn apply_filters(&mut self, filters: &SparepartFilters) -> &mut Self {
        self.builder
            .contains("partsName", filters.parts_name.as_deref())
            .contains("toolLocation", filters.tool_location.as_deref())
            .numeric_range("price", filters.price_min, filters.price_max)
            .date_range(
                "purchaseDate",
                filters.purchase_date_start.as_ref(),
                filters.purchase_date_end.as_ref(),
            )
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
    pub fn build_complete(
        &mut self,
        search: Option<&str>,
        filters: &SparepartFilters,
    ) -> Predicate {
        self.builder.reset().exclude_soft_deleted();
        self.apply_search(search);
        self.apply_filters(filters);
        self.builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_yields_soft_delete_only() {
        let predicate =
            SparepartFilterBuilder::new().build_complete(None, &SparepartFilters::default());
        assert_eq!(predicate.to_json(), json!({ "deletedOn": null }));
    }

    /// Search and a location filter coexist: the disjunction keys on OR, the
    /// filter keys on the field itself.
    #[test]
    fn test_search_and_location_filter_coexist() {
        let filters = SparepartFilters {
            tool_location: Some("Warehouse A".to_string()),
            ..Default::default()
        };
        let predicate = SparepartFilterBuilder::new().build_complete(Some("Test"), &filters);
        assert_eq!(
            predicate.to_json(),
            json!({
                "deletedOn": null,
                "OR": [
                    { "partsName": { "contains": "Test" } },
                    { "toolLocation": { "contains": "Test" } },
                ],
                "toolLocation": { "contains": "Warehouse A" },
            })
        );
    }

    #[test]
    fn test_price_range_has_no_side_effects() {
        let filters = SparepartFilters {
            price_min: Some(100.0),
            price_max: Some(200.0),
            ..Default::default()
        };
        let predicate = SparepartFilterBuilder::new().build_complete(None, &filters);
        assert_eq!(
            predicate.to_json(),
            json!({ "deletedOn": null, "price": { "gte": 100.0, "lte": 200.0 } })
        );
    }

    #[test]
    fn test_empty_strings_set_no_text_filters() {
        let filters = SparepartFilters {
            parts_name: Some(String::new()),
            tool_location: Some(String::new()),
            ..Default::default()
        };
        let predicate = SparepartFilterBuilder::new().build_complete(None, &filters);
        assert_eq!(predicate.to_json(), json!({ "deletedOn": null }));
    }

    #[test]
    fn test_purchase_date_window() {
        let filters = SparepartFilters {
            purchase_date_start: Some(RawDate::from("2023-06-01")),
            purchase_date_end: Some(RawDate::from("2023-06-30")),
            ..Default::default()
        };
        let predicate = SparepartFilterBuilder::new().build_complete(None, &filters);
        assert_eq!(
            predicate.to_json(),
            json!({
                "deletedOn": null,
                "purchaseDate": {
                    "gte": "2023-06-01T00:00:00Z",
                    "lte": "2023-06-30T00:00:00Z",
                },
            })
        );
    }
}
