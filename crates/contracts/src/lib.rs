//! Shared contracts between the dashboard client and the REST backend.
//!
//! Everything here is platform-neutral: DTOs mirrored from the backend,
//! the month/period rules used by every filter, paging and sorting state,
//! and payload validation for CMS forms.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
