use crate::productivity;
use crate::schedule::ScheduledTask;
use crate::task::Task;
use serde::{Deserialize, Serialize};

/// Manpower, equipment, and cost derived for one task. Values are rounded to
/// two decimals for display; the rounding does not feed back into further
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskLoad {
    pub worker_days: f64,
    pub avg_manpower: f64,
    pub skilled_manpower: f64,
    pub unskilled_manpower: f64,
    pub equipment_hours: f64,
    pub cost: f64,
}

/// Project-wide sums. These accumulate the already-rounded per-task loads,
/// matching how the source system reports them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub worker_days: f64,
    pub equipment_hours: f64,
    pub cost: f64,
}

/// One point of the cumulative-cost S-curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    /// 1-based task sequence index.
    pub index: usize,
    pub cumulative_cost: f64,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the resource/cost load of a single task.
///
/// Worker-days divide quantity by the activity's productivity rate (1 when
/// the activity is unrecognized). Average manpower spreads worker-days over
/// the duration, guarded to zero for zero-duration tasks so no NaN or
/// infinity can escape.
pub fn compute_load(task: &Task, shift_hours_per_day: f64) -> TaskLoad {
    let rate = productivity::rate_for(&task.activity);
    let worker_days = task.quantity / rate;
    let avg_manpower = if task.duration_days > 0.0 {
        worker_days / task.duration_days
    } else {
        0.0
    };
    let skilled_manpower = avg_manpower * task.skilled_percent / 100.0;
    let unskilled_manpower = avg_manpower - skilled_manpower;
    let equipment_hours = task.duration_days * shift_hours_per_day;
    let cost = task.quantity * task.unit_cost;

    TaskLoad {
        worker_days: round2(worker_days),
        avg_manpower: round2(avg_manpower),
        skilled_manpower: round2(skilled_manpower),
        unskilled_manpower: round2(unskilled_manpower),
        equipment_hours: round2(equipment_hours),
        cost: round2(cost),
    }
}

/// Sum per-task loads over the schedule.
pub fn totals(scheduled: &[ScheduledTask], shift_hours_per_day: f64) -> ResourceTotals {
    scheduled.iter().fold(ResourceTotals::default(), |acc, s| {
        let load = compute_load(&s.task, shift_hours_per_day);
        ResourceTotals {
            worker_days: acc.worker_days + load.worker_days,
            equipment_hours: acc.equipment_hours + load.equipment_hours,
            cost: acc.cost + load.cost,
        }
    })
}

/// Cumulative cost per task, in the given task order, not sorted by date.
/// The curve reflects task-entry order; callers wanting a time-phased curve
/// sort the scheduled tasks by start date first.
pub fn cost_curve(scheduled: &[ScheduledTask]) -> Vec<CostPoint> {
    let mut running = 0.0;
    scheduled
        .iter()
        .enumerate()
        .map(|(i, s)| {
            running += round2(s.task.quantity * s.task.unit_cost);
            CostPoint {
                index: i + 1,
                cumulative_cost: running,
            }
        })
        .collect()
}
