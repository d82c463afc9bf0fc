//! High-level circuit builder API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{IrError, IrResult};
use crate::operation::Operation;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered list of operations over a fixed register.
///
/// Every qubit referenced by an operation is below [`Circuit::num_qubits`];
/// the builder methods reject anything else. Operations apply in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitData")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Register width.
    num_qubits: u32,
    /// Operations in time order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            operations: vec![],
        }
    }

    /// Create an empty circuit with no qubits.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_size(name, 0)
    }

    /// Build a circuit from a list of operations, validating each one.
    pub fn from_operations(
        name: impl Into<String>,
        num_qubits: u32,
        operations: impl IntoIterator<Item = Operation>,
    ) -> IrResult<Self> {
        let mut circuit = Self::with_size(name, num_qubits);
        for op in operations {
            circuit.push(op)?;
        }
        Ok(circuit)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::Hadamard { target: qubit })
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::PauliX { target: qubit })
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, angle: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::ControlledPhase {
            angle,
            control,
            target,
        })
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::Swap { a: q1, b: q2 })
    }

    /// Append an operation after checking its operands against the register.
    pub fn push(&mut self, op: Operation) -> IrResult<&mut Self> {
        self.validate(&op)?;
        self.operations.push(op);
        Ok(self)
    }

    /// Append an operation the caller has already proven valid.
    pub(crate) fn push_unchecked(&mut self, op: Operation) {
        debug_assert!(self.validate(&op).is_ok(), "invalid operation {op}");
        self.operations.push(op);
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.operations.reserve(additional);
    }

    fn validate(&self, op: &Operation) -> IrResult<()> {
        let qubits = op.qubits();
        for &qubit in &qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                    op: op.name(),
                });
            }
        }
        if let Some(angle) = op.angle() {
            if !angle.is_finite() {
                return Err(IrError::NonFiniteAngle {
                    angle,
                    op: op.name(),
                });
            }
        }
        if let [first, second] = qubits.as_slice() {
            if first == second {
                return Err(IrError::DuplicateQubit {
                    qubit: *first,
                    op: op.name(),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Build the adjoint circuit.
    ///
    /// Operations are reversed and each one is replaced by its inverse. The
    /// result is a new circuit named `<name>_dg`.
    pub fn inverse(&self) -> Self {
        Self {
            name: format!("{}_dg", self.name),
            num_qubits: self.num_qubits,
            operations: self.operations.iter().rev().map(Operation::inverse).collect(),
        }
    }

    /// Append `other`'s operations after this circuit's, in place.
    ///
    /// Qubit indices of `other` refer to this circuit's register.
    pub fn append(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        if other.num_qubits > self.num_qubits {
            return Err(IrError::RegisterTooSmall {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        self.operations.extend_from_slice(&other.operations);
        Ok(self)
    }

    /// Concatenate two circuits into a new one.
    pub fn compose(&self, other: &Circuit) -> IrResult<Self> {
        let mut composed = self.clone();
        composed.append(other)?;
        Ok(composed)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the circuit.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The operations in time order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Iterate the operations in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Count operations by name.
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for op in &self.operations {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }
}

/// Unvalidated wire form; deserialization goes through [`Circuit::from_operations`].
#[derive(Deserialize)]
struct CircuitData {
    name: String,
    num_qubits: u32,
    operations: Vec<Operation>,
}

impl TryFrom<CircuitData> for Circuit {
    type Error = IrError;

    fn try_from(data: CircuitData) -> IrResult<Self> {
        Circuit::from_operations(data.name, data.num_qubits, data.operations)
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
