//! Search command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use mimir_adapter_sv::SvExecutor;
use mimir_hal::Executor;
use mimir_ir::render::render;
use mimir_qram::{
    diffuser_circuit, grover_circuit, lookup_circuit, oracle_circuit, render_histogram,
};

use super::common::{parse_inputs, print_results, write_artifact};

/// Execute the search command.
pub fn execute(data: &str, target: &str, shots: u32, out_dir: &str, json: bool) -> Result<()> {
    let (table, target) = parse_inputs(data, target)?;

    println!(
        "{} Searching {} for entries storing {} ({} shots)",
        style("→").cyan().bold(),
        style(&table).green(),
        style(target).yellow(),
        shots
    );

    let lookup = lookup_circuit(&table)?;
    let oracle = oracle_circuit(&table, target)?;
    let diffuser = diffuser_circuit(table.address_bits())?;
    let circuit = grover_circuit(&table, target)?;

    let executor = SvExecutor::new();
    println!("  Lookup:  {}", executor.resources(&lookup)?);
    println!("  Oracle:  {}", executor.resources(&oracle)?);
    let metrics = executor.resources(&circuit)?;
    println!("  Circuit: {metrics}");

    let result = executor.run(&circuit, shots)?;

    let out_path = Path::new(out_dir);
    fs::create_dir_all(out_path)
        .with_context(|| format!("failed to create output directory {out_dir}"))?;

    write_artifact(out_path, "lookup_gate.txt", &render(&lookup))?;
    write_artifact(out_path, "oracle.txt", &render(&oracle))?;
    write_artifact(out_path, "diffuser.txt", &render(&diffuser))?;
    write_artifact(out_path, "grover_iteration.txt", &render(&circuit))?;
    write_artifact(
        out_path,
        "measurement_histogram.txt",
        &render_histogram(&result.counts, shots),
    )?;

    if json {
        let summary = serde_json::json!({
            "data": table.to_string(),
            "target": target.to_string(),
            "shots": shots,
            "num_qubits": metrics.num_qubits,
            "depth": metrics.depth,
            "ops": metrics.ops,
            "counts": result.counts,
            "execution_time_ms": result.execution_time_ms,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_results(&result);
        if let Some((bitstring, count)) = result.counts.most_frequent() {
            println!(
                "\n  Most frequent address: {} ({} of {} shots)",
                style(bitstring).cyan().bold(),
                count,
                shots
            );
        }
    }

    Ok(())
}
