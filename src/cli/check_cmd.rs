//! `check` command: validate a request without printing an order
//!
//! Runs the full pipeline (title validation, reference resolution, cycle
//! detection) and reports success or the first problem found.

use anyhow::Result;

use super::output::Output;
use super::schedule_cmd::read_request;
use crate::domain::schedule;

/// Validate a schedule request
pub fn run(output: &Output, input: &str) -> Result<()> {
    let request = read_request(input)?;
    output.verbose_ctx(
        "check",
        &format!("Loaded request with {} tasks", request.len()),
    );

    let order = schedule(&request)?;

    let edges: usize = request.tasks.iter().map(|t| t.dependencies.len()).sum();
    output.success(&format!(
        "Request is valid: {} tasks, {} dependencies, schedulable",
        order.len(),
        edges
    ));

    Ok(())
}
