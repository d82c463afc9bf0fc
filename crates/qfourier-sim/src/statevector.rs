//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use tracing::trace;

use qfourier_ir::{Circuit, Operation};

use crate::counts::Counts;
use crate::error::{SimError, SimResult};

/// Widest register a dense statevector is allowed to hold.
pub const MAX_QUBITS: u32 = 24;

/// A statevector representing a quantum state.
///
/// Qubit `k` is bit `k` of the amplitude index, so qubit 0 is the least
/// significant bit.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> SimResult<Self> {
        Self::basis(num_qubits, 0)
    }

    /// Create the computational basis state |index⟩.
    pub fn basis(num_qubits: u32, index: usize) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1_usize << num_qubits;
        if index >= size {
            return Err(SimError::BasisStateOutOfRange { index, num_qubits });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Wrap an existing amplitude vector. The length must be a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(SimError::InvalidDimension(len));
        }
        let num_qubits = len.trailing_zeros();
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Squared norm of the state; 1 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Largest amplitude-wise distance to another state of the same width.
    ///
    /// Returns `f64::INFINITY` when the widths differ.
    pub fn distance(&self, other: &Statevector) -> f64 {
        if self.num_qubits != other.num_qubits {
            return f64::INFINITY;
        }
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }

    /// Run every operation of `circuit` in order.
    pub fn run(&mut self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(SimError::QubitCountMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits,
            });
        }
        for op in circuit {
            self.apply(op)?;
        }
        Ok(())
    }

    /// Apply a single operation.
    ///
    /// Fails with [`SimError::QubitOutOfRange`] if the operation addresses a
    /// qubit outside the state, leaving the state unchanged.
    pub fn apply(&mut self, op: &Operation) -> SimResult<()> {
        if let Some(qubit) = op.qubits().into_iter().find(|q| q.0 >= self.num_qubits) {
            return Err(SimError::QubitOutOfRange {
                qubit: qubit.0,
                num_qubits: self.num_qubits,
            });
        }
        trace!(%op, "apply");
        match *op {
            Operation::Hadamard { target } => self.apply_h(target.index()),
            Operation::PauliX { target } => self.apply_x(target.index()),
            Operation::ControlledPhase {
                angle,
                control,
                target,
            } => self.apply_cp(control.index(), target.index(), angle),
            Operation::Swap { a, b } => self.apply_swap(a.index(), b.index()),
        }
        Ok(())
    }

    // =========================================================================
    // Gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let mask = (1 << control) | (1 << target);
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp *= phase;
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Sample a measurement outcome of all qubits.
    ///
    /// Probabilities are taken relative to [`Statevector::norm_sqr`], so an
    /// unnormalized state samples the same distribution as its normalized form.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen::<f64>() * self.norm_sqr();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Rounding left the cumulative sum just below the norm.
        self.last_populated()
    }

    /// Sample `shots` outcomes and tally them by bitstring.
    pub fn sample_counts<R: Rng>(&self, shots: u32, rng: &mut R) -> Counts {
        let mut cdf = Vec::with_capacity(self.amplitudes.len());
        let mut cumulative = 0.0;
        for amp in &self.amplitudes {
            cumulative += amp.norm_sqr();
            cdf.push(cumulative);
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            let r: f64 = rng.r#gen::<f64>() * cumulative;
            let outcome = cdf
                .partition_point(|&c| c <= r)
                .min(self.amplitudes.len() - 1);
            counts.insert(self.outcome_to_bitstring(outcome), 1);
        }
        counts
    }

    fn last_populated(&self) -> usize {
        self.amplitudes
            .iter()
            .rposition(|a| a.norm_sqr() > 0.0)
            .unwrap_or(0)
    }

    /// Convert a measurement outcome to a bitstring, highest qubit first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        if self.num_qubits == 0 {
            return String::new();
        }
        format!("{:0width$b}", outcome, width = self.num_qubits as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qfourier_ir::QubitId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2).unwrap();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_basis_out_of_range() {
        assert_eq!(
            Statevector::basis(2, 4).unwrap_err(),
            SimError::BasisStateOutOfRange {
                index: 4,
                num_qubits: 2
            }
        );
        assert!(matches!(
            Statevector::new(MAX_QUBITS + 1),
            Err(SimError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_from_amplitudes_dimension() {
        let amps = vec![Complex64::new(1.0, 0.0); 3];
        assert_eq!(
            Statevector::from_amplitudes(amps).unwrap_err(),
            SimError::InvalidDimension(3)
        );
        let sv = Statevector::from_amplitudes(vec![Complex64::new(0.5, 0.0); 4]).unwrap();
        assert_eq!(sv.num_qubits(), 2);
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_x(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_swap_moves_excitation() {
        // |q2 q1 q0⟩ = |001⟩ → |100⟩
        let mut sv = Statevector::basis(3, 0b001).unwrap();
        sv.apply_swap(0, 2);
        assert!(approx_eq(sv.amplitudes[0b100], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[0b001], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_controlled_phase_only_on_11() {
        let mut sv = Statevector::new(2).unwrap();
        sv.apply_h(0);
        sv.apply_h(1);
        sv.apply_cp(0, 1, std::f64::consts::PI);

        assert!(approx_eq(sv.amplitudes[0b00], Complex64::new(0.5, 0.0)));
        assert!(approx_eq(sv.amplitudes[0b01], Complex64::new(0.5, 0.0)));
        assert!(approx_eq(sv.amplitudes[0b10], Complex64::new(0.5, 0.0)));
        assert!(approx_eq(sv.amplitudes[0b11], Complex64::new(-0.5, 0.0)));
    }

    #[test]
    fn test_run_rejects_wider_circuit() {
        let mut sv = Statevector::new(2).unwrap();
        let circuit = Circuit::qft(3).unwrap();
        assert_eq!(
            sv.run(&circuit).unwrap_err(),
            SimError::QubitCountMismatch {
                circuit: 3,
                state: 2
            }
        );
    }

    #[test]
    fn test_run_circuit() {
        let mut circuit = Circuit::with_size("flip", 2);
        circuit.x(QubitId(1)).unwrap();
        let mut sv = Statevector::new(2).unwrap();
        sv.run(&circuit).unwrap();
        assert!(approx_eq(sv.amplitudes[0b10], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_x(0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_apply_rejects_missing_qubit() {
        let mut sv = Statevector::new(2).unwrap();
        let before = sv.clone();

        let err = sv.apply(&Operation::hadamard(2_u32)).unwrap_err();
        assert_eq!(
            err,
            SimError::QubitOutOfRange {
                qubit: 2,
                num_qubits: 2
            }
        );
        // Indices past the word size must not reach the bit masks.
        assert!(sv.apply(&Operation::swap(0_u32, 70_u32)).is_err());
        assert!(
            sv.apply(&Operation::controlled_phase(1.0, 64_u32, 0_u32))
                .is_err()
        );
        assert_eq!(sv, before);

        sv.apply(&Operation::pauli_x(1_u32)).unwrap();
        assert!(approx_eq(sv.amplitudes[0b10], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_sample_unnormalized_matches_sample_counts() {
        // Equal weights, total probability 0.18.
        let amps = vec![Complex64::new(0.3, 0.0); 2];
        let sv = Statevector::from_amplitudes(amps).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let zeros = (0..2000).filter(|_| sv.sample(&mut rng) == 0).count();
        assert!((800..1200).contains(&zeros), "zeros = {zeros}");

        let counts = sv.sample_counts(2000, &mut rng);
        assert!((800..1200).contains(&counts.get("0")), "counts = {counts:?}");
    }

    #[test]
    fn test_bitstring_highest_qubit_first() {
        let sv = Statevector::new(3).unwrap();
        assert_eq!(sv.outcome_to_bitstring(0b010), "010");
        assert_eq!(sv.outcome_to_bitstring(0b001), "001");
        assert_eq!(Statevector::new(0).unwrap().outcome_to_bitstring(0), "");
    }

    #[test]
    fn test_sample_counts_total() {
        let mut sv = Statevector::new(2).unwrap();
        sv.apply_h(0);
        let mut rng = StdRng::seed_from_u64(42);
        let counts = sv.sample_counts(500, &mut rng);
        assert_eq!(counts.total(), 500);
        // Only qubit 0 is in superposition.
        assert!(counts.iter().all(|(bits, _)| bits == "00" || bits == "01"));
    }
}
