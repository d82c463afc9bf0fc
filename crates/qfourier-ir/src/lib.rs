//! Quantum Fourier Transform Circuit Representation
//!
//! This crate provides the circuit data model used across qfourier and the
//! builder for the Quantum Fourier Transform (QFT) and its inverse.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a slot in an n-qubit register
//! - **Operations**: [`Operation`] is one time-ordered circuit step
//!   (Hadamard, controlled phase, swap, Pauli-X)
//! - **Circuit**: [`Circuit`] is an ordered operation list over a fixed register,
//!   with inversion and composition
//! - **QFT**: [`build_qft`] and [`build_inverse_qft`]
//! - **Export**: [`qasm::emit`] renders OpenQASM 3
//!
//! # Example: QFT round trip
//!
//! ```rust
//! use qfourier_ir::{build_inverse_qft, build_qft};
//!
//! let qft = build_qft(3).unwrap();
//! assert_eq!(qft.count_ops().get("cp"), Some(&3));
//!
//! // QFT followed by its inverse acts as the identity.
//! let round_trip = qft.compose(&build_inverse_qft(3).unwrap()).unwrap();
//! assert_eq!(round_trip.len(), 2 * qft.len());
//!
//! // Negative register sizes are rejected.
//! assert!(build_qft(-1).is_err());
//! ```
//!
//! # Example: Manual construction
//!
//! ```rust
//! use qfourier_ir::{Circuit, QubitId};
//!
//! let mut prep = Circuit::with_size("prep", 3);
//! prep.h(QubitId(0)).unwrap().x(QubitId(1)).unwrap();
//!
//! let circuit = prep.compose(&Circuit::qft(3).unwrap()).unwrap();
//! assert_eq!(circuit.len(), 9);
//! ```

pub mod circuit;
pub mod error;
pub mod operation;
pub mod qasm;
pub mod qft;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use operation::Operation;
pub use qft::{MAX_QUBITS, build_inverse_qft, build_qft, qft_rotation_angle};
pub use qubit::QubitId;
