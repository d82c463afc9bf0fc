//! Verify command: check that the inverse QFT undoes the QFT.

use anyhow::{Result, bail};
use console::style;
use tracing::debug;

use qfourier_ir::Circuit;
use qfourier_sim::{MAX_QUBITS, Statevector};

/// Worst amplitude error of QFT followed by its inverse, over every basis
/// state of an `n`-qubit register.
pub fn round_trip_error(n: u32) -> Result<f64> {
    let round_trip = Circuit::qft(n)?.compose(&Circuit::inverse_qft(n)?)?;
    let mut worst = 0.0_f64;
    for index in 0..(1_usize << n) {
        let original = Statevector::basis(n, index)?;
        let mut sv = original.clone();
        sv.run(&round_trip)?;
        worst = worst.max(sv.distance(&original));
    }
    debug!(n, worst, "round trip checked");
    Ok(worst)
}

/// Execute the verify command.
pub fn execute(max_qubits: u32, tolerance: f64) -> Result<()> {
    // Every basis state is checked, so the cost grows as 4^n.
    let limit = MAX_QUBITS.min(12);
    if max_qubits > limit {
        bail!("verify supports at most {limit} qubits, got {max_qubits}");
    }

    println!(
        "{} Verifying QFT round trip for 0..={} qubits (tolerance {:e})",
        style("→").cyan().bold(),
        max_qubits,
        tolerance
    );

    let mut failures = 0;
    for n in 0..=max_qubits {
        let err = round_trip_error(n)?;
        let ok = err <= tolerance;
        if !ok {
            failures += 1;
        }
        let mark = if ok {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("  {mark} n={n:<2} max error {err:.3e}");
    }

    if failures > 0 {
        bail!("{failures} register size(s) exceeded tolerance {tolerance:e}");
    }
    println!("{} All round trips within tolerance", style("✓").green().bold());
    Ok(())
}
