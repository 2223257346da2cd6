use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owns a start date, which is the scheduling origin for every task
/// without a predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDate,
}

impl Project {
    pub fn new(name: impl Into<String>, start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new(
            "Project 1",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }
}
