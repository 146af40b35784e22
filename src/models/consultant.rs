//! Per-consultant schedule record supplied by the roster store.

use super::interval::{BreakSet, Interval};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub title: String,
    pub work_hours: Interval,
    pub breaks: BreakSet,
    /// None when no lunch slot is configured for the consultant.
    pub lunch: Option<Interval>,
    pub present: bool,
}

impl Consultant {
    /// Case-insensitive substring match over the searchable fields
    /// (name, email, department, title).
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
            || self.department.to_lowercase().contains(&q)
            || self.title.to_lowercase().contains(&q)
    }
}
