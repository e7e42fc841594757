//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use mimir_hal::ExecutionResult;
use mimir_qram::{LookupTable, Target};

/// Parse the table literal and target bit from their CLI arguments.
pub fn parse_inputs(data: &str, target: &str) -> Result<(LookupTable, Target)> {
    let table: LookupTable = data
        .parse()
        .with_context(|| format!("invalid lookup table literal: {data:?}"))?;
    let target: Target = target
        .parse()
        .with_context(|| format!("invalid target value {target:?}, expected 0 or 1"))?;
    Ok((table, target))
}

/// Write a rendered artifact under the output directory.
pub fn write_artifact(out_dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = out_dir.join(name);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    println!("  Wrote {}", style(path.display()).dim());
    Ok(())
}

/// Print execution results in a table format.
pub fn print_results(result: &ExecutionResult) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let total = result.counts.total_shots() as f64;

    for (bitstring, count) in &sorted {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}
