//! Task input model
//!
//! A schedule request is a flat, unordered list of tasks. Each task names
//! its dependencies by title; titles are case-insensitive identifiers
//! within a single request. The JSON field names (`dueDate`,
//! `estimatedHours`, ...) match the scheduling API this tool grew out of,
//! so captured requests replay unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalizes a title into its case-insensitive identity key.
///
/// Every lookup and comparison on titles goes through this function so
/// the validator, graph builder, and comparator can never disagree on
/// what counts as "the same task".
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// A single task in a schedule request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Human-readable title; identity is case-insensitive
    pub title: String,

    /// When the task is due, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Estimated effort in hours, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,

    /// Titles of tasks that must be scheduled before this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl TaskSpec {
    /// Creates a task with no due date, no estimate, and no dependencies
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: None,
            estimated_hours: None,
            dependencies: Vec::new(),
        }
    }

    /// Sets the due date
    pub fn due(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the effort estimate in hours
    pub fn hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Adds a dependency on another task by title
    pub fn depends_on(mut self, title: impl Into<String>) -> Self {
        self.dependencies.push(title.into());
        self
    }

    /// Returns the normalized identity key for this task's title
    pub fn key(&self) -> String {
        title_key(&self.title)
    }
}

/// A schedule request: an unordered collection of tasks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl ScheduleRequest {
    /// Creates a request from a list of tasks
    pub fn new(tasks: Vec<TaskSpec>) -> Self {
        Self { tasks }
    }

    /// Returns the number of tasks in the request
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the request contains no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
