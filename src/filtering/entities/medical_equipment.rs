//! Medical equipment filters: operational status and purchase/audit-date
//! ranges.

use serde::Deserialize;

use crate::filtering::builder::PredicateBuilder;
use crate::filtering::predicate::Predicate;
use crate::models::{OneOrMany, RawDate};

const SEARCH_FIELDS: &[&str] = &["name", "lastLocation", "brandName"];

/// Optional filters accepted by the medical equipment list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalEquipmentFilters {
    /// One or more operational statuses.
    pub status: Option<OneOrMany<String>>,
    pub purchase_date_start: Option<RawDate>,
    pub purchase_date_end: Option<RawDate>,
    pub created_on_start: Option<RawDate>,
    pub created_on_end: Option<RawDate>,
    pub modified_on_start: Option<RawDate>,
    pub modified_on_end: Option<RawDate>,
}

#[derive(Debug, Default)]
pub struct MedicalEquipmentFilterBuilder {
    builder: PredicateBuilder,
}

impl MedicalEquipmentFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search across name, last known location and brand.
    pub fn apply_search(&mut self, search: Option<&str>) -> &mut Self {
        self.builder.search(search, SEARCH_FIELDS);
        self
    }

    /// Apply every equipment filter; absent fields are skipped.
    pub fn apply_filters(&mut self, filters: &MedicalEquipmentFilters) -> &mut Self {
        self.builder
            .any_of("status", filters.status.as_ref())
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
        filters: &MedicalEquipmentFilters,
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
        let predicate = MedicalEquipmentFilterBuilder::new()
            .build_complete(None, &MedicalEquipmentFilters::default());
        assert_eq!(predicate.to_json(), json!({ "deletedOn": null }));
    }

    #[test]
    fn test_status_list() {
        let filters = MedicalEquipmentFilters {
            status: Some(OneOrMany::Many(vec![
                "OPERATIONAL".to_string(),
                "MAINTENANCE".to_string(),
            ])),
            ..Default::default()
        };
        let predicate = MedicalEquipmentFilterBuilder::new().build_complete(None, &filters);
        assert_eq!(
            predicate.to_json(),
            json!({
                "deletedOn": null,
                "status": { "in": ["OPERATIONAL", "MAINTENANCE"] },
            })
        );
    }

    /// An explicitly empty status list sets no status predicate.
    #[test]
    fn test_empty_status_list_is_no_constraint() {
        let filters = MedicalEquipmentFilters {
            status: Some(OneOrMany::Many(vec![])),
            ..Default::default()
        };
        let predicate = MedicalEquipmentFilterBuilder::new().build_complete(None, &filters);
        assert_eq!(predicate.to_json(), json!({ "deletedOn": null }));
    }

    #[test]
    fn test_search_spans_name_location_brand() {
        let predicate = MedicalEquipmentFilterBuilder::new()
            .build_complete(Some("Philips"), &MedicalEquipmentFilters::default());
        let terms = predicate.search_terms().unwrap();
        let fields: Vec<&str> = terms.iter().map(|t| t.field.as_str()).collect();
        assert_eq!(fields, ["name", "lastLocation", "brandName"]);
    }
}
