//! Domain models and scheduling logic
//!
//! Contains the core scheduling algorithm without any I/O concerns.

mod task;
mod graph;
mod schedule;

pub use task::{title_key, ScheduleRequest, TaskSpec};
pub use graph::DependencyGraph;
pub use schedule::{schedule, ScheduleError};
