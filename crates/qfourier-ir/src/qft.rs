//! Quantum Fourier Transform circuit construction.
//!
//! The n-qubit QFT is built in two stages:
//!
//! 1. **Rotations.** Each qubit, from `n-1` down to `0`, gets a Hadamard
//!    followed by a controlled phase from every lower qubit:
//!    `CP(π / 2^(target-control), control, target)`.
//! 2. **Reorder.** The rotation stage leaves the output bit-reversed, so the
//!    outer pairs `(q, n-1-q)` are swapped.
//!
//! The result has `n` Hadamards, `n(n-1)/2` controlled phases and `⌊n/2⌋`
//! swaps, in that block order.

use std::f64::consts::PI;

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Largest register [`build_qft`] accepts.
///
/// The operation count grows as n²/2, so 1024 qubits is already over half a
/// million operations.
pub const MAX_QUBITS: u32 = 1024;

/// Phase angle applied to `target` by `control` in the rotation stage.
///
/// `control` must be below `target`.
#[inline]
pub fn qft_rotation_angle(target: u32, control: u32) -> f64 {
    debug_assert!(control < target, "control must precede target");
    PI * (-f64::from(target - control)).exp2()
}

/// Build the n-qubit QFT circuit.
///
/// # Errors
///
/// Returns [`IrError::InvalidQubitCount`] when `n` is negative or larger
/// than [`MAX_QUBITS`].
pub fn build_qft(n: i64) -> IrResult<Circuit> {
    Circuit::qft(checked_qubit_count(n)?)
}

/// Build the inverse n-qubit QFT circuit.
///
/// This is [`build_qft`] with the operation order reversed and every phase
/// angle negated.
///
/// # Errors
///
/// Same as [`build_qft`].
pub fn build_inverse_qft(n: i64) -> IrResult<Circuit> {
    Circuit::inverse_qft(checked_qubit_count(n)?)
}

fn checked_qubit_count(n: i64) -> IrResult<u32> {
    u32::try_from(n)
        .ok()
        .filter(|&n| n <= MAX_QUBITS)
        .ok_or(IrError::InvalidQubitCount(n))
}

impl Circuit {
    /// Create a QFT circuit over `n` qubits (without measurements).
    ///
    /// # Errors
    ///
    /// Returns [`IrError::InvalidQubitCount`] when `n` exceeds [`MAX_QUBITS`].
    pub fn qft(n: u32) -> IrResult<Self> {
        if n > MAX_QUBITS {
            return Err(IrError::InvalidQubitCount(i64::from(n)));
        }
        let mut circuit = Self::with_size("qft", n);
        circuit.reserve(qft_len(n));

        // Rotation stage, highest qubit first.
        for target in (0..n).rev() {
            circuit.push_unchecked(Operation::hadamard(target));
            for control in 0..target {
                circuit.push_unchecked(Operation::ControlledPhase {
                    angle: qft_rotation_angle(target, control),
                    control: QubitId(control),
                    target: QubitId(target),
                });
            }
        }

        // Swap qubits for bit reversal.
        for qubit in 0..n / 2 {
            circuit.push_unchecked(Operation::swap(qubit, n - qubit - 1));
        }

        debug!(num_qubits = n, num_ops = circuit.len(), "built QFT circuit");
        Ok(circuit)
    }

    /// Create an inverse QFT circuit over `n` qubits.
    pub fn inverse_qft(n: u32) -> IrResult<Self> {
        let mut circuit = Self::qft(n)?.inverse();
        circuit.set_name("qft_dg");
        Ok(circuit)
    }
}

/// Total operation count of an n-qubit QFT.
fn qft_len(n: u32) -> usize {
    let n = n as usize;
    n + n * n.saturating_sub(1) / 2 + n / 2
}
