use crate::schedule::ScheduleError;
use crate::task::Task;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use uuid::Uuid;

/// Directed graph over the predecessor relation: one node per task, one edge
/// predecessor -> task. Edges to tasks outside the set are dropped, matching
/// the scheduler's dangling-reference fallback.
pub struct DependencyDag {
    pub graph: DiGraph<Uuid, ()>,
    pub id_to_index: HashMap<Uuid, NodeIndex>,
}

impl DependencyDag {
    pub fn build(tasks: &[Task]) -> Self {
        let mut graph: DiGraph<Uuid, ()> = DiGraph::new();
        let mut id_to_index: HashMap<Uuid, NodeIndex> = HashMap::new();

        for task in tasks {
            let node_ix = graph.add_node(task.id);
            id_to_index.insert(task.id, node_ix);
        }

        for task in tasks {
            if let Some(pred_id) = task.predecessor {
                if let (Some(&u), Some(&v)) =
                    (id_to_index.get(&pred_id), id_to_index.get(&task.id))
                {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    /// Task ids in an order where every predecessor precedes its dependents.
    /// A cycle in the predecessor links is surfaced instead of looping.
    pub fn topological_order(&self) -> Result<Vec<Uuid>, ScheduleError> {
        let order =
            toposort(&self.graph, None).map_err(|_| ScheduleError::CyclicDependency)?;
        Ok(order.into_iter().map(|ix| self.graph[ix]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Vec<Task> {
        let project = Uuid::new_v4();
        let mut tasks: Vec<Task> = Vec::with_capacity(len);
        for i in 0..len {
            let mut task = Task::new(project, format!("T{i}"), "excav_soft", 10.0, 1.0);
            if let Some(prev) = tasks.last() {
                task.predecessor = Some(prev.id);
            }
            tasks.push(task);
        }
        tasks
    }

    #[test]
    fn topological_order_puts_predecessors_first() {
        let mut tasks = chain(4);
        tasks.reverse(); // input order must not matter
        let dag = DependencyDag::build(&tasks);
        let order = dag.topological_order().unwrap();
        let pos: HashMap<Uuid, usize> =
            order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        for task in &tasks {
            if let Some(pred) = task.predecessor {
                assert!(pos[&pred] < pos[&task.id]);
            }
        }
    }

    #[test]
    fn cycle_is_reported() {
        let mut tasks = chain(3);
        let last_id = tasks[2].id;
        tasks[0].predecessor = Some(last_id);
        let dag = DependencyDag::build(&tasks);
        assert_eq!(
            dag.topological_order().unwrap_err(),
            ScheduleError::CyclicDependency
        );
    }

    #[test]
    fn dangling_predecessor_adds_no_edge() {
        let mut tasks = chain(2);
        tasks[1].predecessor = Some(Uuid::new_v4());
        let dag = DependencyDag::build(&tasks);
        assert_eq!(dag.graph.edge_count(), 0);
        assert!(dag.topological_order().is_ok());
    }
}
