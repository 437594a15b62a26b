//! `schedule` command: compute and print an execution order

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{schedule, ScheduleRequest};

/// Reads a schedule request from a file path, or from stdin when the
/// path is `-`
pub(crate) fn read_request(input: &str) -> Result<ScheduleRequest> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    serde_json::from_str(&raw).context("Failed to parse schedule request JSON")
}

/// Compute an execution order and print it
pub fn run(output: &Output, input: &str) -> Result<()> {
    let request = read_request(input)?;
    output.verbose_ctx(
        "schedule",
        &format!("Loaded request with {} tasks", request.len()),
    );

    let order = schedule(&request)?;
    output.verbose_ctx("schedule", &format!("Placed {} tasks", order.len()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "order": order,
            "count": order.len(),
        }));
    } else if order.is_empty() {
        println!("Nothing to schedule.");
    } else {
        println!("Execution order ({} tasks):", order.len());
        for (i, title) in order.iter().enumerate() {
            println!("{:>3}. {}", i + 1, title);
        }
    }

    Ok(())
}
