//! Circuit operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// A single time-ordered step of a circuit.
///
/// Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Hadamard gate.
    Hadamard {
        /// Qubit the gate acts on.
        target: QubitId,
    },
    /// Phase rotation on `target`, applied when `control` is |1⟩.
    ControlledPhase {
        /// Rotation angle in radians.
        angle: f64,
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// SWAP gate.
    Swap {
        /// First qubit.
        a: QubitId,
        /// Second qubit.
        b: QubitId,
    },
    /// Pauli-X gate, used to prepare basis states.
    PauliX {
        /// Qubit the gate acts on.
        target: QubitId,
    },
}

impl Operation {
    /// Hadamard on `target`.
    #[inline]
    pub fn hadamard(target: impl Into<QubitId>) -> Self {
        Operation::Hadamard {
            target: target.into(),
        }
    }

    /// Controlled phase of `angle` radians.
    #[inline]
    pub fn controlled_phase(
        angle: f64,
        control: impl Into<QubitId>,
        target: impl Into<QubitId>,
    ) -> Self {
        Operation::ControlledPhase {
            angle,
            control: control.into(),
            target: target.into(),
        }
    }

    /// Swap of `a` and `b`.
    #[inline]
    pub fn swap(a: impl Into<QubitId>, b: impl Into<QubitId>) -> Self {
        Operation::Swap {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Pauli-X on `target`.
    #[inline]
    pub fn pauli_x(target: impl Into<QubitId>) -> Self {
        Operation::PauliX {
            target: target.into(),
        }
    }

    /// Get the OpenQASM name of this operation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Hadamard { .. } => "h",
            Operation::ControlledPhase { .. } => "cp",
            Operation::Swap { .. } => "swap",
            Operation::PauliX { .. } => "x",
        }
    }

    /// Qubits touched by this operation, controls first.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Operation::Hadamard { target } | Operation::PauliX { target } => vec![target],
            Operation::ControlledPhase {
                control, target, ..
            } => vec![control, target],
            Operation::Swap { a, b } => vec![a, b],
        }
    }

    /// Whether the operation carries a rotation angle.
    #[inline]
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Operation::ControlledPhase { .. })
    }

    /// Rotation angle, if any.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Operation::ControlledPhase { angle, .. } => Some(angle),
            _ => None,
        }
    }

    /// The adjoint of this operation.
    ///
    /// H, X and SWAP are self-inverse; `CP(θ)† = CP(−θ)`.
    pub fn inverse(&self) -> Self {
        match *self {
            Operation::ControlledPhase {
                angle,
                control,
                target,
            } => Operation::ControlledPhase {
                angle: -angle,
                control,
                target,
            },
            other => other,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Hadamard { target } | Operation::PauliX { target } => {
                write!(f, "{} {target}", self.name())
            }
            Operation::ControlledPhase {
                angle,
                control,
                target,
            } => write!(f, "cp({angle:.6}) {control}, {target}"),
            Operation::Swap { a, b } => write!(f, "swap {a}, {b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::hadamard(0_u32).name(), "h");
        assert_eq!(Operation::controlled_phase(PI, 0_u32, 1_u32).name(), "cp");
        assert_eq!(Operation::swap(0_u32, 1_u32).name(), "swap");
        assert_eq!(Operation::pauli_x(0_u32).name(), "x");
    }

    #[test]
    fn test_qubits_order() {
        let op = Operation::controlled_phase(PI / 2.0, 1_u32, 2_u32);
        assert_eq!(op.qubits(), vec![QubitId(1), QubitId(2)]);
        assert_eq!(Operation::hadamard(3_u32).qubits(), vec![QubitId(3)]);
    }

    #[test]
    fn test_inverse_negates_phase_only() {
        let cp = Operation::controlled_phase(PI / 4.0, 0_u32, 2_u32);
        assert_eq!(
            cp.inverse(),
            Operation::controlled_phase(-PI / 4.0, 0_u32, 2_u32)
        );

        for op in [
            Operation::hadamard(1_u32),
            Operation::swap(0_u32, 2_u32),
            Operation::pauli_x(0_u32),
        ] {
            assert_eq!(op.inverse(), op);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::hadamard(2_u32).to_string(), "h q2");
        assert_eq!(Operation::swap(0_u32, 2_u32).to_string(), "swap q0, q2");
        assert_eq!(
            Operation::controlled_phase(PI / 4.0, 0_u32, 2_u32).to_string(),
            "cp(0.785398) q0, q2"
        );
    }

    #[test]
    fn test_serde_tagged() {
        let op = Operation::controlled_phase(0.5, 0_u32, 1_u32);
        let json = serde_json::to_value(op).unwrap();
        assert_eq!(json["op"], "controlled_phase");
        assert_eq!(json["control"], 0);
        assert_eq!(json["target"], 1);

        let back: Operation = serde_json::from_value(json).unwrap();
        assert_eq!(back, op);
    }
}
