//! Version command implementation.

use console::style;

/// Print version information.
pub fn execute() {
    println!(
        "{} {}",
        style("mimir").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
}
