//! In-memory mock state: the consultant roster, the tenant settings and
//! the monthly staffing summary. Nothing here persists or fetches.

pub mod consultants;
pub mod schedule;
pub mod settings;
