use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work on a project: a bill-of-quantities line with a duration,
/// manpower split, cost rate, optional single predecessor, and optional
/// material procurement data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Random id assigned at creation; immutable afterwards.
    pub id: Uuid,
    pub name: String,
    /// Key into the productivity table; unrecognized codes degrade to a
    /// rate of 1.
    pub activity: String,
    /// Amount of work, in units consistent with the activity's rate.
    pub quantity: f64,
    /// Planned working days; may be fractional.
    pub duration_days: f64,
    /// 0-100, share of manpower classified as skilled.
    pub skilled_percent: f64,
    /// Display label only; not used in any computation.
    pub equipment: String,
    pub unit_cost: f64,
    /// At most one predecessor within the same project. A dangling reference
    /// is treated as no predecessor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<Uuid>,
    /// Set only when the task requires procurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub material_quantity: f64,
    #[serde(default)]
    pub material_lead_days: i64,
    pub project_id: Uuid,
}

impl Task {
    pub fn new(
        project_id: Uuid,
        name: impl Into<String>,
        activity: impl Into<String>,
        quantity: f64,
        duration_days: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            activity: activity.into(),
            quantity,
            duration_days,
            skilled_percent: 60.0,
            equipment: "N/A".to_string(),
            unit_cost: 0.0,
            predecessor: None,
            material: None,
            material_quantity: 0.0,
            material_lead_days: 0,
            project_id,
        }
    }

    pub fn with_predecessor(mut self, predecessor: Uuid) -> Self {
        self.predecessor = Some(predecessor);
        self
    }

    pub fn with_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    pub fn with_material(
        mut self,
        material: impl Into<String>,
        quantity: f64,
        lead_days: i64,
    ) -> Self {
        self.material = Some(material.into());
        self.material_quantity = quantity;
        self.material_lead_days = lead_days;
        self
    }

    /// True when the task carries a material requiring procurement.
    pub fn needs_procurement(&self) -> bool {
        self.material
            .as_deref()
            .is_some_and(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tasks_get_distinct_random_ids() {
        let project = Uuid::new_v4();
        let a = Task::new(project, "Excavation", "excav_soft", 100.0, 5.0);
        let b = Task::new(project, "Excavation", "excav_soft", 100.0, 5.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn needs_procurement_requires_non_blank_material() {
        let project = Uuid::new_v4();
        let plain = Task::new(project, "A", "excav_soft", 1.0, 1.0);
        assert!(!plain.needs_procurement());

        let blank = Task::new(project, "B", "excav_soft", 1.0, 1.0).with_material("  ", 5.0, 3);
        assert!(!blank.needs_procurement());

        let real = Task::new(project, "C", "excav_soft", 1.0, 1.0).with_material("Cement", 5.0, 3);
        assert!(real.needs_procurement());
    }
}
