//! Bill-of-quantities import: one task per CSV row.
//!
//! Rows are first read verbatim into string fields, then pushed through one
//! normalization step so the blank/non-numeric coercion rules stay in a
//! single auditable place: a blank cell takes the column's default, anything
//! unparsable becomes 0.

use super::InterchangeResult;
use crate::task::Task;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
struct BoqRow {
    #[serde(default, rename = "Task")]
    task: String,
    #[serde(default, rename = "Code")]
    code: String,
    #[serde(default, rename = "Quantity")]
    quantity: String,
    #[serde(default, rename = "Duration")]
    duration: String,
    #[serde(default, rename = "SkilledPct")]
    skilled_pct: String,
    #[serde(default, rename = "Equipment")]
    equipment: String,
    #[serde(default, rename = "UnitCost")]
    unit_cost: String,
    #[serde(default, rename = "Predecessor")]
    predecessor: String,
    #[serde(default, rename = "Material")]
    material: String,
    #[serde(default, rename = "MaterialQty")]
    material_qty: String,
    #[serde(default, rename = "MaterialLead")]
    material_lead: String,
}

/// Blank cells take the column default; unparsable cells coerce to 0.
fn coerce_number(raw: &str, default: f64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn normalize(rows: Vec<BoqRow>, project_id: Uuid) -> Vec<Task> {
    let mut tasks: Vec<Task> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let name = non_blank(&row.task)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Row {}", i + 1));
            let activity = non_blank(&row.code).unwrap_or("excav_soft");

            let mut task = Task::new(
                project_id,
                name,
                activity,
                coerce_number(&row.quantity, 0.0),
                coerce_number(&row.duration, 1.0),
            );
            task.skilled_percent = coerce_number(&row.skilled_pct, 60.0);
            task.equipment = non_blank(&row.equipment).unwrap_or("N/A").to_string();
            task.unit_cost = coerce_number(&row.unit_cost, 0.0);
            task.material = non_blank(&row.material).map(str::to_string);
            task.material_quantity = coerce_number(&row.material_qty, 0.0);
            task.material_lead_days = coerce_number(&row.material_lead, 3.0) as i64;
            task
        })
        .collect();

    // Predecessor cells cannot carry the freshly generated ids, so they may
    // name another row's Task instead; a literal uuid is honored when it
    // parses. Unresolvable references degrade to no predecessor.
    for (i, row) in rows.iter().enumerate() {
        let Some(reference) = non_blank(&row.predecessor) else {
            continue;
        };
        let resolved = reference.parse::<Uuid>().ok().or_else(|| {
            tasks
                .iter()
                .enumerate()
                .find(|(j, t)| *j != i && t.name == reference)
                .map(|(_, t)| t.id)
        });
        tasks[i].predecessor = resolved;
    }

    tasks
}

pub fn import_tasks_from_reader<R: Read>(
    reader: R,
    project_id: Uuid,
) -> InterchangeResult<Vec<Task>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<BoqRow>() {
        rows.push(row?);
    }
    Ok(normalize(rows, project_id))
}

pub fn import_tasks_from_csv<P: AsRef<Path>>(
    path: P,
    project_id: Uuid,
) -> InterchangeResult<Vec<Task>> {
    import_tasks_from_reader(File::open(path)?, project_id)
}
