//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// The requested register size is negative or above [`MAX_QUBITS`](crate::MAX_QUBITS).
    #[error("Invalid qubit count: {0} (must be between 0 and {max})", max = crate::MAX_QUBITS)]
    InvalidQubitCount(i64),

    /// An operation references a qubit outside the circuit's register.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit circuit (operation: {op})")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
        /// Name of the operation being added.
        op: &'static str,
    },

    /// A two-qubit operation names the same qubit twice.
    #[error("Duplicate qubit {qubit} in operation {op}")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the operation being added.
        op: &'static str,
    },

    /// A phase angle is NaN or infinite.
    #[error("Non-finite angle {angle} in operation {op}")]
    NonFiniteAngle {
        /// The rejected angle.
        angle: f64,
        /// Name of the operation being added.
        op: &'static str,
    },

    /// A circuit was composed onto a narrower register.
    #[error("Cannot compose a {got}-qubit circuit onto a {expected}-qubit register")]
    RegisterTooSmall {
        /// Width of the receiving circuit.
        expected: u32,
        /// Width of the appended circuit.
        got: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
