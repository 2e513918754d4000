use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Shared query parameters for list endpoints.
///
/// Every field is optional and arrives as a raw string; `page` and `limit`
/// in particular are untrusted (missing, non-numeric, zero or negative) and
/// are only made usable by [`crate::pagination::normalize_paging`].
/// Entity-specific filter fields are deserialized separately into the
/// per-entity filter structs under [`crate::filtering::entities`].
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Free-text search applied across the entity's searchable fields.
    #[param(example = "Test")]
    pub search: Option<String>,
    /// Page number (1-based). Invalid values fall back to `1`.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size. Invalid values fall back to `10`.
    #[param(example = "10")]
    pub limit: Option<String>,
}

impl ListParams {
    /// Normalized `(page, limit)` pair for this request.
    #[must_use]
    pub fn paging(&self) -> (u64, u64) {
        crate::pagination::normalize_paging(self.page.as_deref(), self.limit.as_deref())
    }
}

/// A multi-value filter as it arrives on the wire: either a bare scalar or an
/// array. Clients send `?role=ADMIN` and `?role=ADMIN&role=USER`
/// interchangeably, so both forms deserialize into the same type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the values as a slice, normalizing the scalar form to one element.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// True only for an explicitly empty array; a scalar is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// A date bound as it arrives on the wire: already parsed upstream, or a raw
/// string still to be interpreted.
///
/// [`RawDate::resolve`] is the single place the string form is coerced:
/// RFC 3339 first, then `%Y-%m-%dT%H:%M:%S`, then a plain `%Y-%m-%d` taken as
/// midnight UTC. A string that matches none of these drops the bound (with a
/// `warn` event) instead of smuggling an unparseable value into the
/// predicate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl RawDate {
    /// Coerce to a concrete UTC timestamp, or `None` when the raw form is
    /// unparseable.
    #[must_use]
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Parsed(dt) => Some(*dt),
            Self::Raw(s) => {
                let trimmed = s.trim();
                if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
                    return Some(dt.with_timezone(&Utc));
                }
                if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
                    return Some(naive.and_utc());
                }
                if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                    return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
                }
                tracing::warn!(value = %s, "dropping unparseable date bound");
                None
            }
        }
    }
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}
