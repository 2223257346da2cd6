//! JSON snapshot of one project's scheduling inputs: project, calendar,
//! shift length, and task records. Computed dates are never written; they
//! are derived again after loading.

use super::InterchangeResult;
use crate::calendar::WorkCalendar;
use crate::project::Project;
use crate::schedule::Schedule;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub project: Project,
    pub calendar: WorkCalendar,
    pub shift_hours_per_day: f64,
    pub tasks: Vec<Task>,
}

impl PlanSnapshot {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            project: schedule.project().clone(),
            calendar: schedule.calendar().clone(),
            shift_hours_per_day: schedule.shift_hours_per_day(),
            tasks: schedule.tasks().to_vec(),
        }
    }

    pub fn into_schedule(self) -> Schedule {
        let mut schedule = Schedule::with_calendar(self.project, self.calendar);
        schedule.set_shift_hours_per_day(self.shift_hours_per_day);
        schedule.add_tasks(self.tasks);
        schedule
    }
}

pub fn save_plan_to_json<P: AsRef<Path>>(schedule: &Schedule, path: P) -> InterchangeResult<()> {
    let snapshot = PlanSnapshot::from_schedule(schedule);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_plan_from_json<P: AsRef<Path>>(path: P) -> InterchangeResult<Schedule> {
    let file = File::open(path)?;
    let snapshot: PlanSnapshot = serde_json::from_reader(file)?;
    Ok(snapshot.into_schedule())
}
