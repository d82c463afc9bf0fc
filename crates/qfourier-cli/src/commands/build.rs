//! Build command implementation.

use anyhow::Result;
use console::style;
use tracing::info;

use qfourier_ir::{build_inverse_qft, build_qft};

use super::common::{OutputFormat, render_circuit, write_output};

/// Execute the build command.
pub fn execute(
    qubits: i64,
    inverse: bool,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let circuit = if inverse {
        build_inverse_qft(qubits)?
    } else {
        build_qft(qubits)?
    };
    info!(
        name = circuit.name(),
        qubits,
        ops = circuit.len(),
        "built circuit"
    );

    if output.is_some() {
        println!(
            "{} Built {} ({} qubits, {} operations)",
            style("✓").green().bold(),
            style(circuit.name()).green(),
            circuit.num_qubits(),
            circuit.len()
        );
    }

    let rendered = render_circuit(&circuit, format)?;
    write_output(&rendered, output)
}
