//! Building blocks for the list endpoints of a medical equipment maintenance
//! API: translating loosely-typed query parameters into storage predicates,
//! and normalizing untrusted pagination input.
//!
//! The crate deliberately stops at the storage boundary. It produces a
//! [`Predicate`] (and, for Sea-ORM consumers, a rendered
//! [`Condition`](sea_orm::Condition)) plus an `(offset, limit)` pair; issuing
//! the page query and the matching count query is the caller's job. The two
//! are independent reads over the same predicate and may be fanned out
//! concurrently.
//!
//! ```
//! use maintcrate::filtering::entities::sparepart::{SparepartFilterBuilder, SparepartFilters};
//! use maintcrate::pagination::{compute_meta, normalize_paging, offset};
//!
//! let filters = SparepartFilters {
//!     tool_location: Some("Warehouse A".to_string()),
//!     ..Default::default()
//! };
//! let predicate = SparepartFilterBuilder::new().build_complete(Some("Test"), &filters);
//!
//! let (page, limit) = normalize_paging(Some("2"), Some("10"));
//! let _skip = offset(page, limit);
//! // ...run the page + count queries, then:
//! let meta = compute_meta(25, page, limit);
//! assert_eq!(meta.total_pages, 3);
//! # assert!(!predicate.is_empty());
//! ```

pub mod filtering;
pub mod models;
pub mod pagination;

pub use filtering::builder::PredicateBuilder;
pub use filtering::conditions::apply_predicate;
pub use filtering::predicate::{FieldCondition, Predicate};
pub use models::{ListParams, OneOrMany, RawDate};
pub use pagination::{PaginationMeta, compute_meta, normalize_paging, offset};
