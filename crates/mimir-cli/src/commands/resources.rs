//! Resources command implementation.

use anyhow::Result;
use console::style;

use mimir_adapter_sv::SvExecutor;
use mimir_hal::Executor;
use mimir_qram::grover_circuit;

use super::common::parse_inputs;

/// Execute the resources command.
pub fn execute(data: &str, target: &str) -> Result<()> {
    let (table, target) = parse_inputs(data, target)?;
    let circuit = grover_circuit(&table, target)?;

    let executor = SvExecutor::new();
    let metrics = executor.resources(&circuit)?;

    println!(
        "{} Search circuit for table {} (target {}):",
        style("→").cyan().bold(),
        style(&table).green(),
        style(target).yellow()
    );
    println!("  Qubits: {}", metrics.num_qubits);
    println!("  Depth:  {}", metrics.depth);
    println!("  Gates:");
    for (name, count) in &metrics.ops {
        println!("    {name:>8}: {count}");
    }

    Ok(())
}
