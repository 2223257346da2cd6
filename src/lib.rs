pub mod calculations;
pub mod calendar;
pub mod graph;
pub mod interchange;
pub mod productivity;
pub mod project;
pub mod schedule;
pub mod task;

pub use calculations::critical_path::{CriticalPath, critical_path};
pub use calculations::procurement::{ProcurementItem, procurement_plan};
pub use calculations::resources::{
    CostPoint, ResourceTotals, TaskLoad, compute_load, cost_curve, totals,
};
pub use calendar::{CalendarError, WorkCalendar};
pub use graph::DependencyDag;
pub use interchange::{
    InterchangeError, PlanSnapshot, import_tasks_from_csv, import_tasks_from_reader,
    load_plan_from_json, parse_project_plan_xml, project_plan_xml, save_plan_to_json,
    save_project_plan_xml,
};
pub use project::Project;
pub use schedule::{Schedule, ScheduleError, ScheduleReport, ScheduledTask, schedule_tasks};
pub use task::Task;
