//! Schedule computation
//!
//! Validates a request, builds the dependency graph, and runs a
//! priority-ordered variant of Kahn's algorithm: the frontier of ready
//! tasks (in-degree zero) is kept in a binary heap ordered by due date,
//! then estimated effort, then title, so every run over the same input
//! produces the same order. If the frontier drains before every task is
//! placed, the leftover tasks are exactly the cycle members and anything
//! transitively blocked by them, and all of them are reported.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::graph::DependencyGraph;
use super::task::{ScheduleRequest, TaskSpec};

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("duplicate task title: '{0}'")]
    DuplicateTitle(String),

    #[error("task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("cycle detected in task dependencies; remaining tasks: {}", .0.join(", "))]
    Cycle(Vec<String>),
}

/// Composite priority for ready tasks
///
/// Field order matters: the derived `Ord` compares due date first, then
/// effort, then title. The title key is unique within a request, so this
/// is a strict total order and extraction is fully deterministic.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Priority {
    /// Due date ascending; a missing date sorts after every present date
    due: (bool, Option<DateTime<Utc>>),

    /// Effort descending; a missing estimate counts as zero
    effort: Reverse<u32>,

    /// Normalized title ascending, the deterministic fallback
    key: String,
}

impl Priority {
    fn of(task: &TaskSpec) -> Self {
        Self {
            due: (task.due_date.is_none(), task.due_date),
            effort: Reverse(task.estimated_hours.unwrap_or(0)),
            key: task.key(),
        }
    }
}

/// Checks that every title is non-blank and unique under case folding.
///
/// Fails fast on the first offending task; no partial results.
fn validate_titles(tasks: &[TaskSpec]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        if !seen.insert(task.key()) {
            return Err(ScheduleError::DuplicateTitle(task.title.clone()));
        }
    }
    Ok(())
}

/// Computes a deterministic execution order for a request.
///
/// The returned titles keep their original casing and satisfy every
/// dependency edge: a dependency always appears before its dependent.
pub fn schedule(request: &ScheduleRequest) -> Result<Vec<String>, ScheduleError> {
    if request.tasks.is_empty() {
        return Ok(Vec::new());
    }

    validate_titles(&request.tasks)?;
    let graph = DependencyGraph::from_tasks(&request.tasks)?;

    // Seed the frontier with every task that has nothing to wait for
    let mut in_degree = vec![0usize; graph.len()];
    let mut frontier = BinaryHeap::new();
    for idx in graph.node_indices() {
        let degree = graph.in_degree(idx);
        in_degree[idx.index()] = degree;
        if degree == 0 {
            frontier.push(Reverse((Priority::of(graph.task(idx)), idx)));
        }
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Some(Reverse((_, idx))) = frontier.pop() {
        order.push(graph.task(idx).title.clone());

        for child in graph.dependents(idx) {
            in_degree[child.index()] -= 1;
            if in_degree[child.index()] == 0 {
                frontier.push(Reverse((Priority::of(graph.task(child)), child)));
            }
        }
    }

    // Anything left with unresolved dependencies sits on or behind a cycle
    if order.len() != graph.len() {
        let remaining = graph
            .node_indices()
            .filter(|&idx| in_degree[idx.index()] > 0)
            .map(|idx| graph.task(idx).title.clone())
            .collect();
        return Err(ScheduleError::Cycle(remaining));
    }

    Ok(order)
}
