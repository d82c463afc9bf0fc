//! OpenQASM 3 emitter.

use std::f64::consts::PI;

use crate::circuit::Circuit;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Emit a circuit as OpenQASM 3 source code.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit);
    emitter.output
}

struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) {
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
            self.writeln("");
        }

        for op in circuit {
            self.emit_operation(op);
        }
    }

    fn emit_operation(&mut self, op: &Operation) {
        let line = match *op {
            Operation::Hadamard { target } | Operation::PauliX { target } => {
                format!("{} {};", op.name(), qubit(target))
            }
            Operation::ControlledPhase {
                angle,
                control,
                target,
            } => format!(
                "cp({}) {}, {};",
                format_angle(angle),
                qubit(control),
                qubit(target)
            ),
            Operation::Swap { a, b } => format!("swap {}, {};", qubit(a), qubit(b)),
        };
        self.writeln(&line);
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn qubit(q: QubitId) -> String {
    format!("q[{}]", q.0)
}

/// Format an angle, writing exact `±π/2^k` values symbolically.
fn format_angle(angle: f64) -> String {
    if angle == 0.0 {
        return "0".into();
    }
    let sign = if angle < 0.0 { "-" } else { "" };
    let ratio = angle.abs() / PI;
    let k = -ratio.log2().round();
    if (0.0..63.0).contains(&k) && PI * (-k).exp2() == angle.abs() {
        let k = k as u32;
        return if k == 0 {
            format!("{sign}pi")
        } else {
            format!("{sign}pi/{}", 1_u64 << k)
        };
    }
    format!("{angle:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(PI), "pi");
        assert_eq!(format_angle(PI / 2.0), "pi/2");
        assert_eq!(format_angle(-PI / 4.0), "-pi/4");
        assert_eq!(format_angle(PI / 1024.0), "pi/1024");
        assert_eq!(format_angle(0.0), "0");
        assert_eq!(format_angle(0.3), "0.3");
    }

    #[test]
    fn test_emit_qft3() {
        let qasm = emit(&Circuit::qft(3).unwrap());
        let expected = "\
OPENQASM 3.0;
include \"stdgates.inc\";

qubit[3] q;

h q[2];
cp(pi/4) q[0], q[2];
cp(pi/2) q[1], q[2];
h q[1];
cp(pi/2) q[0], q[1];
h q[0];
swap q[0], q[2];
";
        assert_eq!(qasm, expected);
    }

    #[test]
    fn test_emit_inverse_has_negative_angles() {
        let qasm = emit(&Circuit::inverse_qft(2).unwrap());
        assert!(qasm.contains("cp(-pi/2) q[0], q[1];"));
        assert!(qasm.starts_with("OPENQASM 3.0;"));
    }

    #[test]
    fn test_emit_empty() {
        let qasm = emit(&Circuit::qft(0).unwrap());
        assert!(!qasm.contains("qubit["));
    }
}
