use crate::schedule::{ScheduleError, ScheduledTask};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// The longest predecessor chain(s) in a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPath {
    /// Maximum cumulative chain duration, in working days.
    pub duration: f64,
    /// Ids of every task on a maximum-duration chain. When chains tie on the
    /// accumulated day count, all of them are marked.
    pub critical_ids: HashSet<Uuid>,
}

/// Cumulative chain duration per task: its own duration plus its
/// predecessor's chain duration. Memoized by task id, so each value is
/// computed once; a visitation guard turns a predecessor cycle into
/// `CyclicDependency` instead of unbounded recursion.
pub fn critical_path(scheduled: &[ScheduledTask]) -> Result<CriticalPath, ScheduleError> {
    let by_id: HashMap<Uuid, &ScheduledTask> =
        scheduled.iter().map(|s| (s.task.id, s)).collect();

    let mut memo: HashMap<Uuid, f64> = HashMap::new();
    let mut visiting: HashSet<Uuid> = HashSet::new();
    for s in scheduled {
        chain_duration(s.task.id, &by_id, &mut memo, &mut visiting)?;
    }

    let duration = scheduled
        .iter()
        .map(|s| memo[&s.task.id])
        .fold(0.0_f64, f64::max);

    // Chain heads are the tasks whose accumulated duration hits the maximum
    // exactly (ties included); the critical set is each head plus its
    // ancestors along the predecessor links.
    let mut critical_ids = HashSet::new();
    for s in scheduled {
        if memo[&s.task.id] == duration {
            let mut cursor = Some(s.task.id);
            while let Some(id) = cursor {
                if !critical_ids.insert(id) {
                    break;
                }
                cursor = by_id
                    .get(&id)
                    .and_then(|st| st.task.predecessor)
                    .filter(|pred| by_id.contains_key(pred));
            }
        }
    }

    Ok(CriticalPath {
        duration,
        critical_ids,
    })
}

fn chain_duration(
    id: Uuid,
    by_id: &HashMap<Uuid, &ScheduledTask>,
    memo: &mut HashMap<Uuid, f64>,
    visiting: &mut HashSet<Uuid>,
) -> Result<f64, ScheduleError> {
    if let Some(total) = memo.get(&id) {
        return Ok(*total);
    }
    if !visiting.insert(id) {
        return Err(ScheduleError::CyclicDependency);
    }

    let task = &by_id[&id].task;
    let upstream = match task.predecessor.filter(|pred| by_id.contains_key(pred)) {
        Some(pred) => chain_duration(pred, by_id, memo, visiting)?,
        None => 0.0,
    };
    let total = task.duration_days + upstream;

    visiting.remove(&id);
    memo.insert(id, total);
    Ok(total)
}
