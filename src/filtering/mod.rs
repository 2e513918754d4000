//! # Filter construction
//!
//! Turns loosely-typed, optional query parameters into a structured
//! [`Predicate`] the repository layer can execute.
//!
//! ## Main components
//!
//! - **[`PredicateBuilder`]**: the base builder with one primitive per filter
//!   kind (soft-delete exclusion, OR-search, date range, `IN`, contains,
//!   numeric range, exact match)
//! - **[`entities`]**: per-entity specializations that fix the search-field
//!   lists and filter order, each with a `build_complete` entry point
//! - **[`apply_predicate`](conditions::apply_predicate)**: renders a finished
//!   predicate as a `sea_orm::Condition`
//!
//! ## Shape of the result
//!
//! ```rust
//! use maintcrate::filtering::entities::user::{UserFilterBuilder, UserFilters};
//! use maintcrate::models::OneOrMany;
//! use serde_json::json;
//!
//! let filters = UserFilters {
//!     role: Some(OneOrMany::One("ADMIN".to_string())),
//!     ..Default::default()
//! };
//! let predicate = UserFilterBuilder::new().build_complete(Some("eva"), &filters);
//! assert_eq!(predicate.to_json(), json!({
//!     "deletedOn": null,
//!     "OR": [
//!         { "fullname": { "contains": "eva" } },
//!         { "email": { "contains": "eva" } },
//!         { "username": { "contains": "eva" } },
//!     ],
//!     "role": { "in": ["ADMIN"] },
//! }));
//! ```
//!
//! Every filter follows the same omission rules: an absent or empty value
//! sets no predicate at all: "no constraint", never "match nothing".

pub mod builder;
pub mod conditions;
pub mod entities;
pub mod predicate;

pub use builder::PredicateBuilder;
pub use conditions::apply_predicate;
pub use predicate::{FieldCondition, Predicate, SearchTerm};
