//! Shot-based circuit execution on the statevector engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, instrument};

use qfourier_ir::Circuit;

use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::statevector::{MAX_QUBITS, Statevector};

/// Run `circuit` on |0...0⟩ and return the final state.
pub fn simulate(circuit: &Circuit) -> SimResult<Statevector> {
    let mut sv = Statevector::new(circuit.num_qubits())?;
    sv.run(circuit)?;
    Ok(sv)
}

/// Local statevector simulator with measurement sampling.
///
/// The state is evolved once per run; shots are drawn from the final
/// distribution. A fixed seed makes the counts reproducible.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Maximum number of qubits accepted.
    max_qubits: u32,
    /// RNG seed; `None` draws from OS entropy.
    seed: Option<u64>,
}

impl Simulator {
    /// Create a simulator with default settings.
    pub fn new() -> Self {
        Self {
            max_qubits: MAX_QUBITS,
            seed: None,
        }
    }

    /// Limit the accepted register width (capped at [`MAX_QUBITS`]).
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits.min(MAX_QUBITS);
        self
    }

    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Maximum accepted register width.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Run `circuit` and measure all qubits `shots` times.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<Counts> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }

        debug!(
            "Starting simulation: {} qubits, {} operations, {} shots",
            num_qubits,
            circuit.len(),
            shots
        );

        let sv = simulate(circuit)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let counts = sv.sample_counts(shots, &mut rng);

        debug!("Simulation completed in {:?}", start.elapsed());
        Ok(counts)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qfourier_ir::QubitId;

    #[test]
    fn test_bell_counts() {
        let mut circuit = Circuit::with_size("bell", 2);
        // CP(π) conjugated by H on the target acts as CX.
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .cp(std::f64::consts::PI, QubitId(0), QubitId(1))
            .unwrap()
            .h(QubitId(1))
            .unwrap();

        let counts = Simulator::new().with_seed(1).run(&circuit, 1000).unwrap();
        assert_eq!(counts.total(), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
        assert!(counts.get("00") > 400);
        assert!(counts.get("11") > 400);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let circuit = Circuit::qft(3).unwrap();
        let sim = Simulator::new().with_seed(99);
        assert_eq!(sim.run(&circuit, 256).unwrap(), sim.run(&circuit, 256).unwrap());
    }

    #[test]
    fn test_max_qubits_enforced() {
        let sim = Simulator::new().with_max_qubits(2);
        assert_eq!(
            sim.run(&Circuit::qft(3).unwrap(), 10).unwrap_err(),
            SimError::TooManyQubits {
                requested: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_zero_shots() {
        let counts = Simulator::new().run(&Circuit::qft(2).unwrap(), 0).unwrap();
        assert!(counts.is_empty());
    }
}
