//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;

use qfourier_ir::{Circuit, qasm};
use qfourier_sim::Counts;

/// Output format for rendered circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable operation listing.
    Text,
    /// JSON (serde) representation.
    Json,
    /// OpenQASM 3 source.
    Qasm,
}

/// Render a circuit in the requested format.
pub fn render_circuit(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(circuit)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(circuit).context("Failed to serialize circuit")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Qasm => Ok(qasm::emit(circuit)),
    }
}

fn render_text(circuit: &Circuit) -> String {
    let mut out = format!(
        "{}: {} qubits, {} operations\n",
        circuit.name(),
        circuit.num_qubits(),
        circuit.len()
    );
    let width = circuit.len().to_string().len();
    for (i, op) in circuit.iter().enumerate() {
        out.push_str(&format!("  {i:>width$}  {op}\n"));
    }
    out
}

/// Write `contents` to `path`, or print to stdout when no path is given.
pub fn write_output(contents: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(Path::new(path), contents)
                .with_context(|| format!("Failed to write output file: {path}"))?;
            println!("  Output: {}", style(path).green());
        }
        None => print!("{contents}"),
    }
    Ok(())
}

/// Print a count histogram as a table with bars.
pub fn print_counts(counts: &Counts, shots: u32) {
    println!("\n{} Results ({} shots):", style("✓").green().bold(), shots);

    let sorted = counts.sorted();
    let total = counts.total().max(1) as f64;

    for (bitstring, count) in sorted.iter().take(16) {
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

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let text = render_circuit(&Circuit::qft(2).unwrap(), OutputFormat::Text).unwrap();
        let expected = "\
qft: 2 qubits, 4 operations
  0  h q1
  1  cp(1.570796) q0, q1
  2  h q0
  3  swap q0, q1
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_json_roundtrip() {
        let circuit = Circuit::inverse_qft(3).unwrap();
        let json = render_circuit(&circuit, OutputFormat::Json).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
    }

    #[test]
    fn test_render_qasm() {
        let qasm = render_circuit(&Circuit::qft(1).unwrap(), OutputFormat::Qasm).unwrap();
        assert!(qasm.contains("qubit[1] q;"));
        assert!(qasm.contains("h q[0];"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qft.qasm");
        let path_str = path.to_str().unwrap();
        write_output("OPENQASM 3.0;\n", Some(path_str)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "OPENQASM 3.0;\n");
    }
}
