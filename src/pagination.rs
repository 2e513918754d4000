//! Pagination normalization and metadata.
//!
//! Raw `page`/`limit` values come straight off the query string and may be
//! missing, non-numeric, zero or negative. Everything here degrades to
//! defaults instead of failing; stricter validation belongs to the HTTP
//! layer.

use serde::Serialize;
use utoipa::ToSchema;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Pagination block echoed alongside the row data in list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total matching rows across all pages.
    pub total: u64,
    /// Current page (1-based).
    pub page: u64,
    /// Page size used for the query.
    pub limit: u64,
    /// Number of pages needed to cover `total` rows.
    pub total_pages: u64,
}

fn normalize_component(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|parsed| *parsed > 0)
        .map_or(default, |parsed| parsed.unsigned_abs())
}

/// Normalize raw page/limit strings into a valid positive pair.
///
/// Missing, non-numeric, zero and negative input all fall back to the
/// defaults (`page` 1, `limit` 10). There is deliberately no upper clamp.
#[must_use]
pub fn normalize_paging(raw_page: Option<&str>, raw_limit: Option<&str>) -> (u64, u64) {
    (
        normalize_component(raw_page, DEFAULT_PAGE),
        normalize_component(raw_limit, DEFAULT_LIMIT),
    )
}

/// Storage-layer row offset for a normalized `(page, limit)` pair.
#[must_use]
pub fn offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Derive the metadata block once the total row count is known.
///
/// `total_pages` is `ceil(total / limit)`. A `limit` of zero only occurs on
/// one legacy service path that echoes the raw page size when no rows exist;
/// that path reports a single (empty) page. Callers should normalize `limit`
/// first, which makes zero unreachable.
#[must_use]
pub fn compute_meta(total: u64, page: u64, limit: u64) -> PaginationMeta {
    let total_pages = if limit > 0 {
        total.div_ceil(limit)
    } else {
        u64::from(total == 0)
    };
    PaginationMeta {
        total,
        page,
        limit,
        total_pages,
    }
}
