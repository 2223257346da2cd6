use crate::schedule::ScheduledTask;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A material order derived from a scheduled task's start date and lead
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementItem {
    pub task_name: String,
    pub material: String,
    pub quantity: f64,
    pub order_by: NaiveDate,
}

/// Back-compute material order dates: one item per task carrying a material.
///
/// The subtraction is plain calendar days, not calendar-aware; weekends and
/// holidays are not skipped when back-counting lead time.
pub fn procurement_plan(scheduled: &[ScheduledTask]) -> Vec<ProcurementItem> {
    scheduled
        .iter()
        .filter(|s| s.task.needs_procurement())
        .map(|s| ProcurementItem {
            task_name: s.task.name.clone(),
            material: s.task.material.clone().unwrap_or_default(),
            quantity: s.task.material_quantity,
            order_by: s.start - Duration::days(s.task.material_lead_days),
        })
        .collect()
}
