//! qfourier Reference Statevector Simulator
//!
//! This crate executes [`qfourier_ir::Circuit`]s on a dense statevector. It
//! is the reference backend used to check QFT circuits numerically and to
//! sample measurement counts for demonstrations.
//!
//! # Conventions
//!
//! - Qubit `k` is bit `k` of the amplitude index (qubit 0 least significant)
//! - Bitstrings in [`Counts`] are printed highest qubit first
//! - Registers are limited to [`MAX_QUBITS`] qubits
//!
//! # Example
//!
//! ```rust
//! use qfourier_ir::Circuit;
//! use qfourier_sim::{Simulator, Statevector};
//!
//! // QFT followed by its inverse returns |5⟩ to itself.
//! let qft = Circuit::qft(3).unwrap();
//! let round_trip = qft.compose(&Circuit::inverse_qft(3).unwrap()).unwrap();
//! let mut sv = Statevector::basis(3, 5).unwrap();
//! sv.run(&round_trip).unwrap();
//! assert!(sv.distance(&Statevector::basis(3, 5).unwrap()) < 1e-9);
//!
//! // Sample counts with a fixed seed.
//! let counts = Simulator::new().with_seed(7).run(&Circuit::qft(2).unwrap(), 100).unwrap();
//! assert_eq!(counts.total(), 100);
//! ```

mod counts;
mod error;
mod simulator;
mod statevector;

pub use counts::Counts;
pub use error::{SimError, SimResult};
pub use simulator::{Simulator, simulate};
pub use statevector::{MAX_QUBITS, Statevector};
