use crate::calculations::critical_path::{CriticalPath, critical_path};
use crate::calculations::procurement::{ProcurementItem, procurement_plan};
use crate::calculations::resources::{
    CostPoint, ResourceTotals, TaskLoad, compute_load, cost_curve, totals,
};
use crate::calendar::{CalendarError, WorkCalendar};
use crate::graph::DependencyDag;
use crate::project::Project;
use crate::task::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The calendar can never satisfy a working-day count; fatal for the
    /// scheduling pass that hit it.
    InvalidCalendar,
    /// The predecessor chain does not terminate.
    CyclicDependency,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidCalendar => {
                write!(f, "calendar has no working weekdays; nothing can be scheduled")
            }
            ScheduleError::CyclicDependency => {
                write!(f, "predecessor links form a cycle")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<CalendarError> for ScheduleError {
    fn from(value: CalendarError) -> Self {
        match value {
            CalendarError::NoWorkingDays => ScheduleError::InvalidCalendar,
        }
    }
}

/// A task enriched with its computed start and finish dates. Derived data,
/// recomputed on every pass and never stored independently of its source
/// task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub task: Task,
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

/// Assign start/finish dates to every task. Output order matches input
/// order.
///
/// Resolution is memoized recursion over the predecessor relation, so input
/// order and chain depth are irrelevant: a task with a predecessor starts on
/// the predecessor's finish date, anything else (including a dangling
/// predecessor id) starts on `project_start`. The finish date is the
/// calendar advance by the task's duration.
pub fn schedule_tasks(
    tasks: &[Task],
    project_start: NaiveDate,
    calendar: &WorkCalendar,
) -> Result<Vec<ScheduledTask>, ScheduleError> {
    if !calendar.has_working_weekdays() {
        return Err(ScheduleError::InvalidCalendar);
    }

    let by_id: HashMap<Uuid, &Task> = tasks.iter().map(|t| (t.id, t)).collect();
    let mut memo: HashMap<Uuid, (NaiveDate, NaiveDate)> = HashMap::new();
    let mut visiting: HashSet<Uuid> = HashSet::new();

    for task in tasks {
        resolve_dates(
            task.id,
            &by_id,
            project_start,
            calendar,
            &mut memo,
            &mut visiting,
        )?;
    }

    Ok(tasks
        .iter()
        .map(|task| {
            let (start, finish) = memo[&task.id];
            ScheduledTask {
                task: task.clone(),
                start,
                finish,
            }
        })
        .collect())
}

fn resolve_dates(
    id: Uuid,
    by_id: &HashMap<Uuid, &Task>,
    project_start: NaiveDate,
    calendar: &WorkCalendar,
    memo: &mut HashMap<Uuid, (NaiveDate, NaiveDate)>,
    visiting: &mut HashSet<Uuid>,
) -> Result<(NaiveDate, NaiveDate), ScheduleError> {
    if let Some(dates) = memo.get(&id) {
        return Ok(*dates);
    }
    if !visiting.insert(id) {
        return Err(ScheduleError::CyclicDependency);
    }

    let task = by_id[&id];
    let start = match task.predecessor.filter(|pred| by_id.contains_key(pred)) {
        Some(pred) => {
            resolve_dates(pred, by_id, project_start, calendar, memo, visiting)?.1
        }
        None => project_start,
    };
    let finish = calendar.advance(start, task.duration_days)?;

    visiting.remove(&id);
    memo.insert(id, (start, finish));
    Ok((start, finish))
}

/// Everything one scheduling pass derives from the task set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    /// Scheduled tasks, in task-entry order.
    pub scheduled: Vec<ScheduledTask>,
    pub critical: CriticalPath,
    /// Per-task loads, aligned with `scheduled`.
    pub loads: Vec<TaskLoad>,
    pub totals: ResourceTotals,
    pub cost_curve: Vec<CostPoint>,
    pub procurement: Vec<ProcurementItem>,
}

/// Session context for one project's scheduling state: the project, its task
/// collection, the working calendar, and the shift length. All derivation
/// happens in [`Schedule::compute`], which is a pure read; nothing computed
/// is retained between calls.
#[derive(Debug, Clone)]
pub struct Schedule {
    project: Project,
    calendar: WorkCalendar,
    shift_hours_per_day: f64,
    tasks: Vec<Task>,
}

impl Schedule {
    pub fn new(project: Project) -> Self {
        Self::with_calendar(project, WorkCalendar::default())
    }

    pub fn with_calendar(project: Project, calendar: WorkCalendar) -> Self {
        Self {
            project,
            calendar,
            shift_hours_per_day: 12.0,
            tasks: Vec::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    pub fn shift_hours_per_day(&self) -> f64 {
        self.shift_hours_per_day
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Calendar edits apply to subsequent passes only.
    pub fn set_calendar(&mut self, calendar: WorkCalendar) {
        self.calendar = calendar;
    }

    pub fn set_shift_hours_per_day(&mut self, hours: f64) {
        self.shift_hours_per_day = hours;
    }

    pub fn set_project_start(&mut self, start: NaiveDate) {
        self.project.start = start;
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Insert a task, or replace the stored record carrying the same id.
    pub fn upsert_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    pub fn add_tasks(&mut self, tasks: impl IntoIterator<Item = Task>) {
        for task in tasks {
            self.upsert_task(task);
        }
    }

    pub fn remove_task(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Run the full pipeline over a snapshot of the current tasks and
    /// calendar: dependency validation, date assignment, critical path,
    /// resource/cost loads, cost curve, and procurement plan.
    pub fn compute(&self) -> Result<ScheduleReport, ScheduleError> {
        DependencyDag::build(&self.tasks).topological_order()?;

        let scheduled = schedule_tasks(&self.tasks, self.project.start, &self.calendar)?;
        let critical = critical_path(&scheduled)?;
        let loads: Vec<TaskLoad> = scheduled
            .iter()
            .map(|s| compute_load(&s.task, self.shift_hours_per_day))
            .collect();
        let totals = totals(&scheduled, self.shift_hours_per_day);
        let cost_curve = cost_curve(&scheduled);
        let procurement = procurement_plan(&scheduled);

        Ok(ScheduleReport {
            scheduled,
            critical,
            loads,
            totals,
            cost_curve,
            procurement,
        })
    }
}
