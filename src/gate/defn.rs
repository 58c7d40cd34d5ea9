use nalgebra::DMatrix;

use crate::config::{constants, Complex, QubitIdx, Real};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

/// The closed set of gate variants. Matrix derivation is colocated here;
/// validation and application live on [`Gate`].
#[derive(Debug, Clone)]
pub enum GateDefn {
    Identity {
        qubits: usize,
    },
    PauliX,
    PauliY,
    PauliZ,
    /// diag(1, e^{i rot}).
    PhaseShift {
        rot: Real,
    },
    /// exp(-i rot/2 · P) for the Pauli matrix P of the chosen axis.
    Rotation {
        axis: RotationAxis,
        rot: Real,
    },
    /// The n-fold tensor power of the single-qubit Hadamard matrix.
    Hadamard {
        qubits: usize,
    },
    /// Parallel composition; the first factor occupies the most significant
    /// qubits.
    Tensor {
        factors: Vec<Gate>,
    },
    /// A classical reversible function lifted to a permutation matrix. The
    /// matrix is built (and checked) at construction time.
    BooleanReversible {
        qubits: usize,
        permutation: DMatrix<Complex>,
    },
    /// Applies `base` at qubit `target` only to basis states whose `control`
    /// bit is set.
    Controlled {
        qubits: usize,
        base: Box<Gate>,
        target: QubitIdx,
        control: QubitIdx,
    },
    /// An arbitrary caller-supplied unitary.
    Oracle {
        matrix: DMatrix<Complex>,
    },
    /// Sequential composition; the first gate acts first on a register.
    Circuit {
        gates: Vec<Gate>,
    },
}

fn scalar_one() -> DMatrix<Complex> {
    DMatrix::from_element(1, 1, Complex::new(1.0, 0.0))
}

fn pauli_x() -> DMatrix<Complex> {
    let o = Complex::new(0.0, 0.0);
    let l = Complex::new(1.0, 0.0);
    DMatrix::from_row_slice(2, 2, &[o, l, l, o])
}

fn pauli_y() -> DMatrix<Complex> {
    let o = Complex::new(0.0, 0.0);
    DMatrix::from_row_slice(2, 2, &[o, Complex::new(0.0, -1.0), Complex::new(0.0, 1.0), o])
}

fn pauli_z() -> DMatrix<Complex> {
    let o = Complex::new(0.0, 0.0);
    DMatrix::from_row_slice(2, 2, &[Complex::new(1.0, 0.0), o, o, Complex::new(-1.0, 0.0)])
}

fn hadamard_1() -> DMatrix<Complex> {
    let h = Complex::new(constants::RECP_SQRT_2, 0.0);
    DMatrix::from_row_slice(2, 2, &[h, h, h, -h])
}

impl GateDefn {
    pub fn matrix(&self) -> DMatrix<Complex> {
        match self {
            GateDefn::Identity { qubits } => {
                let dim = 1usize << qubits;
                DMatrix::identity(dim, dim)
            }
            GateDefn::PauliX => pauli_x(),
            GateDefn::PauliY => pauli_y(),
            GateDefn::PauliZ => pauli_z(),
            GateDefn::PhaseShift { rot } => {
                let o = Complex::new(0.0, 0.0);
                DMatrix::from_row_slice(
                    2,
                    2,
                    &[Complex::new(1.0, 0.0), o, o, Complex::cis(*rot)],
                )
            }
            GateDefn::Rotation { axis, rot } => {
                let pauli = match axis {
                    RotationAxis::X => pauli_x(),
                    RotationAxis::Y => pauli_y(),
                    RotationAxis::Z => pauli_z(),
                };
                (pauli * Complex::new(0.0, -0.5 * rot)).exp()
            }
            GateDefn::Hadamard { qubits } => (0..*qubits)
                .fold(scalar_one(), |acc, _| acc.kronecker(&hadamard_1())),
            GateDefn::Tensor { factors } => factors
                .iter()
                .fold(scalar_one(), |acc, g| acc.kronecker(&g.matrix())),
            GateDefn::BooleanReversible { permutation, .. } => permutation.clone(),
            GateDefn::Controlled {
                qubits,
                base,
                target,
                control,
            } => {
                // The base gate embedded at the target position, as if it
                // were uncontrolled.
                let left = 1usize << target;
                let right = 1usize << (qubits - target - base.size());
                let uncontrolled = DMatrix::<Complex>::identity(left, left)
                    .kronecker(&base.matrix())
                    .kronecker(&DMatrix::identity(right, right));

                // Column a is uncontrolled·e_a when the control bit of a is
                // set, e_a otherwise.
                let dim = 1usize << qubits;
                let mut m = DMatrix::<Complex>::zeros(dim, dim);
                for col in 0..dim {
                    let control_bit = (col >> (qubits - 1 - control)) & 1 == 1;
                    if control_bit {
                        m.set_column(col, &uncontrolled.column(col));
                    } else {
                        m[(col, col)] = Complex::new(1.0, 0.0);
                    }
                }
                m
            }
            GateDefn::Oracle { matrix } => matrix.clone(),
            GateDefn::Circuit { gates } => {
                // The first listed gate acts first, so its matrix sits
                // rightmost in the product.
                let dim = 1usize << gates[0].size();
                gates
                    .iter()
                    .rev()
                    .fold(DMatrix::identity(dim, dim), |acc, g| acc * g.matrix())
            }
        }
    }
}
