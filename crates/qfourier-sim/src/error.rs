//! Error types for simulation.

use thiserror::Error;

/// Errors that can occur while simulating a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The register is too wide for a dense statevector.
    #[error("Cannot simulate {requested} qubits (maximum: {max})")]
    TooManyQubits {
        /// Requested register width.
        requested: u32,
        /// Supported maximum.
        max: u32,
    },

    /// The circuit addresses more qubits than the state holds.
    #[error("Circuit needs {circuit} qubits but the statevector has {state}")]
    QubitCountMismatch {
        /// Width of the circuit.
        circuit: u32,
        /// Width of the statevector.
        state: u32,
    },

    /// An operation addresses a qubit the state does not have.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit statevector")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Width of the statevector.
        num_qubits: u32,
    },

    /// Basis state index does not fit in the register.
    #[error("Basis state {index} out of range for {num_qubits} qubits")]
    BasisStateOutOfRange {
        /// Requested basis index.
        index: usize,
        /// Register width.
        num_qubits: u32,
    },

    /// Amplitude vector length is not a power of two.
    #[error("Amplitude vector of length {0} is not a power of two")]
    InvalidDimension(usize),
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;
