//! Measurement histogram rendering.

use std::fmt::Write;

use mimir_hal::Counts;

const BAR_WIDTH: f64 = 50.0;

/// Render measurement counts as a text histogram.
///
/// One row per observed outcome, most frequent first (ties broken by
/// label). Each row shows the address bitstring, the raw count, the
/// probability against `shots`, and a bar of `#` characters scaled so a
/// probability of 1.0 fills 50 columns; fractional columns are dropped.
pub fn render_histogram(counts: &Counts, shots: u32) -> String {
    let mut out = String::new();
    let width = counts
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        .max("Address".len());

    let _ = writeln!(out, "{:>width$} | Count | Probability | Bar", "Address");
    let _ = writeln!(out, "{}", "-".repeat(50));

    for (label, count) in counts.sorted() {
        let prob = if shots == 0 {
            0.0
        } else {
            count as f64 / shots as f64
        };
        let bar = "#".repeat((prob * BAR_WIDTH) as usize);
        let _ = writeln!(out, "{label:>width$} | {count:5} | {prob:.3} | {bar}");
    }
    out
}
