//! Taskplan - dependency-aware task scheduling
//!
//! Taskplan takes a flat list of tasks, each with an optional due date,
//! an optional effort estimate, and dependency references by title, and
//! computes a single deterministic execution order: a topological sort of
//! the dependency graph, with remaining ties broken by due date, then
//! estimated effort, then title.

pub mod domain;
pub mod cli;

pub use domain::{schedule, DependencyGraph, ScheduleError, ScheduleRequest, TaskSpec};
