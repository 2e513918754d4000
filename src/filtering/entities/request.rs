//! Repair/maintenance request filters: status, requesting user and creation
//! window, plus the request-type discriminator.
//!
//! The request type is not part of [`RequestFilters`]; the service passes it
//! separately (it comes from the route, not the query string), so
//! `build_complete` takes it as a third argument.
//! Requests have no soft-delete column.

use serde::Deserialize;
use uuid::Uuid;

use crate::filtering::builder::PredicateBuilder;
use crate::filtering::predicate::Predicate;
use crate::models::{OneOrMany, RawDate};

const SEARCH_FIELDS: &[&str] = &["medicalEquipment", "complaint"];

/// Optional filters accepted by the request list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestFilters {
    /// One or more request statuses; a bare scalar is accepted.
    pub status: Option<OneOrMany<String>>,
    /// Exact requesting-user id.
    pub user_id: Option<Uuid>,
    pub created_on_start: Option<RawDate>,
    pub created_on_end: Option<RawDate>,
}

#[derive(Debug, Default)]
pub struct RequestFilterBuilder {
    builder: PredicateBuilder,
}

impl RequestFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search across the equipment reference and the complaint.
    pub fn apply_search(&mut self, search: Option<&str>) -> &mut Self {
        self.builder.search(search, SEARCH_FIELDS);
        self
    }

    /// Apply every request filter; absent fields are skipped.
    pub fn apply_filters(&mut self, filters: &RequestFilters) -> &mut Self {
        self.builder
            .any_of("status", filters.status.as_ref())
            .exact("userId", filters.user_id.map(|id| id.to_string()))
            .date_range(
                "createdOn",
                filters.created_on_start.as_ref(),
                filters.created_on_end.as_ref(),
            );
        self
    }

    /// Exact match on the request-type discriminator.
    pub fn apply_request_type(&mut self, request_type: Option<&str>) -> &mut Self {
        self.builder.exact("requestType", request_type);
        self
    }

    /// Full predicate for one list request: optional search, all filters,
    /// then the request type when the route supplies one.
    pub fn build_complete(
        &mut self,
        search: Option<&str>,
        filters: &RequestFilters,
        request_type: Option<&str>,
    ) -> Predicate {
        self.builder.reset();
        self.apply_search(search);
        self.apply_filters(filters);
        self.apply_request_type(request_type);
        self.builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_yields_empty_predicate() {
        let predicate =
            RequestFilterBuilder::new().build_complete(None, &RequestFilters::default(), None);
        assert_eq!(predicate.to_json(), json!({}));
    }

    /// A scalar status arrives normalized into a one-element IN-list.
    #[test]
    fn test_scalar_status_normalized() {
        let filters = RequestFilters {
            status: Some(OneOrMany::One("PENDING".to_string())),
            ..Default::default()
        };
        let predicate = RequestFilterBuilder::new().build_complete(None, &filters, None);
        assert_eq!(
            predicate.to_json(),
            json!({ "status": { "in": ["PENDING"] } })
        );
    }

    #[test]
    fn test_request_type_is_out_of_band() {
        let predicate = RequestFilterBuilder::new().build_complete(
            None,
            &RequestFilters::default(),
            Some("CALIBRATION"),
        );
        assert_eq!(predicate.to_json(), json!({ "requestType": "CALIBRATION" }));
    }

    #[test]
    fn test_full_request_listing() {
        let user_id = Uuid::new_v4();
        let filters = RequestFilters {
            status: Some(OneOrMany::Many(vec![
                "PENDING".to_string(),
                "APPROVED".to_string(),
            ])),
            user_id: Some(user_id),
            created_on_start: Some(RawDate::from("2024-01-01")),
            ..Default::default()
        };
        let predicate =
            RequestFilterBuilder::new().build_complete(Some("ventilator"), &filters, Some("REPAIR"));
        assert_eq!(
            predicate.to_json(),
            json!({
                "OR": [
                    { "medicalEquipment": { "contains": "ventilator" } },
                    { "complaint": { "contains": "ventilator" } },
                ],
                "status": { "in": ["PENDING", "APPROVED"] },
                "userId": user_id.to_string(),
                "createdOn": { "gte": "2024-01-01T00:00:00Z" },
                "requestType": "REPAIR",
            })
        );
    }
}
