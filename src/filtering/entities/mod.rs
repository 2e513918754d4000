//! Per-entity filter builders.
//!
//! Each module pairs a `*Filters` options struct (every field optional,
//! camelCase on the wire) with a `*FilterBuilder` exposing `apply_search`,
//! `apply_filters` and the `build_complete` entry point. The builders all
//! follow the same contract: `build_complete` starts from a reset, excludes
//! soft-deleted rows where the entity has the marker column (users,
//! spareparts, medical equipment), applies the search when one was supplied,
//! then applies every filter in a fixed order.

pub mod medical_equipment;
pub mod parts_history;
pub mod request;
pub mod sparepart;
pub mod user;

pub use medical_equipment::{MedicalEquipmentFilterBuilder, MedicalEquipmentFilters};
pub use parts_history::{PartsHistoryFilterBuilder, PartsHistoryFilters};
pub use request::{RequestFilterBuilder, RequestFilters};
pub use sparepart::{SparepartFilterBuilder, SparepartFilters};
pub use user::{UserFilterBuilder, UserFilters};
