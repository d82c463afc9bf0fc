//! Demo command: prepare a state, apply the QFT and sample measurements.

use anyhow::{Result, bail};
use console::style;

use qfourier_ir::{Circuit, QubitId};
use qfourier_sim::Simulator;

use super::common::{OutputFormat, print_counts, render_circuit};

/// Build the demonstration circuit: `H(0)`, `X(1)`, then the QFT.
pub fn demo_circuit(qubits: u32) -> Result<Circuit> {
    if qubits < 2 {
        bail!("The demo needs at least 2 qubits, got {qubits}");
    }
    let mut prep = Circuit::with_size("qft_demo", qubits);
    prep.h(QubitId(0))?.x(QubitId(1))?;
    Ok(prep.compose(&Circuit::qft(qubits)?)?)
}

/// Execute the demo command.
pub fn execute(qubits: u32, shots: u32, seed: Option<u64>) -> Result<()> {
    println!(
        "{} Quantum Fourier Transform demo ({} qubits, {} shots)",
        style("→").cyan().bold(),
        qubits,
        shots
    );

    let circuit = demo_circuit(qubits)?;
    println!("\nQFT Circuit:");
    print!("{}", render_circuit(&circuit, OutputFormat::Text)?);

    let mut simulator = Simulator::new();
    if let Some(seed) = seed {
        simulator = simulator.with_seed(seed);
    }
    let counts = simulator.run(&circuit, shots)?;

    print_counts(&counts, shots);
    Ok(())
}
