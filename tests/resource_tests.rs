use chrono::NaiveDate;
use siteplan::schedule::ScheduledTask;
use siteplan::task::Task;
use siteplan::{compute_load, cost_curve, totals};
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn scheduled(task: Task) -> ScheduledTask {
    ScheduledTask {
        task,
        start: d(2025, 1, 1),
        finish: d(2025, 1, 2),
    }
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn unknown_activity_degrades_to_unit_rate() {
    let project = Uuid::new_v4();
    let mut task = Task::new(project, "Mystery", "not_in_table", 100.0, 10.0);
    task.skilled_percent = 60.0;

    let load = compute_load(&task, 12.0);
    approx(load.worker_days, 100.0);
    approx(load.avg_manpower, 10.0);
    approx(load.skilled_manpower, 6.0);
    approx(load.unskilled_manpower, 4.0);
}

#[test]
fn known_activity_uses_table_rate() {
    let project = Uuid::new_v4();
    // excav_soft produces 18 units per worker-day.
    let task = Task::new(project, "Excavation", "excav_soft", 90.0, 5.0);

    let load = compute_load(&task, 12.0);
    approx(load.worker_days, 5.0);
    approx(load.avg_manpower, 1.0);
    approx(load.equipment_hours, 60.0);
}

#[test]
fn zero_duration_yields_zero_manpower_never_nan() {
    let project = Uuid::new_v4();
    let task = Task::new(project, "Instant", "excav_soft", 50.0, 0.0);

    let load = compute_load(&task, 12.0);
    assert_eq!(load.avg_manpower, 0.0);
    assert_eq!(load.skilled_manpower, 0.0);
    assert_eq!(load.unskilled_manpower, 0.0);
    assert_eq!(load.equipment_hours, 0.0);
    for v in [
        load.worker_days,
        load.avg_manpower,
        load.skilled_manpower,
        load.unskilled_manpower,
        load.equipment_hours,
        load.cost,
    ] {
        assert!(v.is_finite());
    }
}

#[test]
fn skilled_and_unskilled_split_sums_to_average() {
    let project = Uuid::new_v4();
    for pct in [0.0, 12.5, 37.0, 60.0, 99.9, 100.0] {
        let mut task = Task::new(project, "Split", "unknown", 77.0, 7.0);
        task.skilled_percent = pct;
        let load = compute_load(&task, 12.0);
        assert!(
            (load.skilled_manpower + load.unskilled_manpower - load.avg_manpower).abs() < 0.02,
            "split drifted at {pct}%"
        );
    }
}

#[test]
fn cost_is_quantity_times_unit_cost() {
    let project = Uuid::new_v4();
    let task = Task::new(project, "Concrete", "concrete_pump", 120.0, 4.0).with_cost(5500.0);
    let load = compute_load(&task, 12.0);
    approx(load.cost, 660_000.0);
}

#[test]
fn totals_sum_the_rounded_per_task_values() {
    let project = Uuid::new_v4();
    // brick_masonry rate 1.2: 10 / 1.2 = 8.333.. rounds to 8.33 per task;
    // the total is 16.66, not the 16.67 a full-precision sum would give.
    let a = scheduled(Task::new(project, "Wall A", "brick_masonry", 10.0, 5.0));
    let b = scheduled(Task::new(project, "Wall B", "brick_masonry", 10.0, 5.0));

    let totals = totals(&[a, b], 12.0);
    approx(totals.worker_days, 16.66);
    approx(totals.equipment_hours, 120.0);
    approx(totals.cost, 0.0);
}

#[test]
fn cost_curve_accumulates_in_input_order() {
    let project = Uuid::new_v4();
    let mut early = scheduled(Task::new(project, "Early", "x", 10.0, 1.0).with_cost(10.0));
    early.start = d(2025, 1, 1);
    let mut late = scheduled(Task::new(project, "Late", "x", 10.0, 1.0).with_cost(5.0));
    late.start = d(2025, 3, 1);

    // "Late" listed first: the curve follows entry order, not dates.
    let curve = cost_curve(&[late, early]);
    assert_eq!(curve.len(), 2);
    assert_eq!(curve[0].index, 1);
    approx(curve[0].cumulative_cost, 50.0);
    assert_eq!(curve[1].index, 2);
    approx(curve[1].cumulative_cost, 150.0);
}
