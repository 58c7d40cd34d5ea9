pub mod defn;

use nalgebra::DMatrix;

use crate::bits;
use crate::config::{Complex, QubitIdx, Real};
use crate::error::{Result, SimError};
use crate::matrix_properties;
use crate::register::Register;
use defn::{GateDefn, RotationAxis};

/// An operator over an n-qubit space, defined by its 2^n x 2^n unitary
/// matrix. Immutable once constructed; the matrix is derived on demand from
/// the constructor arguments.
#[derive(Debug, Clone)]
pub struct Gate {
    pub defn: GateDefn,
    size: usize,
}

fn create_size(defn: &GateDefn) -> usize {
    match defn {
        GateDefn::Identity { qubits } | GateDefn::Hadamard { qubits } => *qubits,
        GateDefn::PauliX
        | GateDefn::PauliY
        | GateDefn::PauliZ
        | GateDefn::PhaseShift { .. }
        | GateDefn::Rotation { .. } => 1,
        GateDefn::Tensor { factors } => factors.iter().map(Gate::size).sum(),
        GateDefn::BooleanReversible { qubits, .. } | GateDefn::Controlled { qubits, .. } => *qubits,
        GateDefn::Oracle { matrix } => matrix.nrows().trailing_zeros() as usize,
        GateDefn::Circuit { gates } => gates[0].size,
    }
}

impl Gate {
    fn new(defn: GateDefn) -> Self {
        let size = create_size(&defn);
        Self { defn, size }
    }

    /// The no-op gate on `qubits` qubits.
    pub fn identity(qubits: usize) -> Self {
        Self::new(GateDefn::Identity { qubits })
    }

    /// Single-qubit Pauli X, a.k.a. the NOT gate.
    pub fn pauli_x() -> Self {
        Self::new(GateDefn::PauliX)
    }

    pub fn pauli_y() -> Self {
        Self::new(GateDefn::PauliY)
    }

    pub fn pauli_z() -> Self {
        Self::new(GateDefn::PauliZ)
    }

    /// diag(1, e^{i rot}).
    pub fn phase_shift(rot: Real) -> Self {
        Self::new(GateDefn::PhaseShift { rot })
    }

    pub fn rotation_x(rot: Real) -> Self {
        Self::new(GateDefn::Rotation {
            axis: RotationAxis::X,
            rot,
        })
    }

    pub fn rotation_y(rot: Real) -> Self {
        Self::new(GateDefn::Rotation {
            axis: RotationAxis::Y,
            rot,
        })
    }

    pub fn rotation_z(rot: Real) -> Self {
        Self::new(GateDefn::Rotation {
            axis: RotationAxis::Z,
            rot,
        })
    }

    /// The Hadamard gate applied to each of `qubits` qubits.
    pub fn hadamard(qubits: usize) -> Self {
        Self::new(GateDefn::Hadamard { qubits })
    }

    /// Parallel composition. The combined size is the sum of the factor
    /// sizes; an empty factor list yields the 0-qubit identity.
    pub fn tensor_product(factors: Vec<Gate>) -> Self {
        Self::new(GateDefn::Tensor { factors })
    }

    /// Lift a classical reversible function over `qubits` bits into a
    /// permutation gate: the matrix has a 1 at (output-index, input-index)
    /// for every big-endian basis input. Fails with `NotPermutation` when
    /// `f` is not a bijection on the 2^qubits domain (check skipped when
    /// `validate` is false).
    pub fn boolean_reversible<F>(qubits: usize, f: F, validate: bool) -> Result<Self>
    where
        F: Fn(&[bool]) -> Vec<bool>,
    {
        let dim = 1usize << qubits;
        let mut permutation = DMatrix::<Complex>::zeros(dim, dim);
        for (col, input) in bits::all_values(qubits).enumerate() {
            let output = f(&input);
            let row = bits::to_int_big_endian(&output);
            if output.len() != qubits || row >= dim {
                return Err(SimError::NotPermutation);
            }
            permutation[(row, col)] = Complex::new(1.0, 0.0);
        }
        if validate && !matrix_properties::is_permutation_matrix(&permutation) {
            return Err(SimError::NotPermutation);
        }
        Ok(Self::new(GateDefn::BooleanReversible {
            qubits,
            permutation,
        }))
    }

    /// Wire `base` to act at qubit `target` of a `qubits`-wide register,
    /// conditioned on qubit `control` being 1. The base span must fit inside
    /// the register and the control must lie outside it.
    pub fn controlled(
        qubits: usize,
        base: Gate,
        target: QubitIdx,
        control: QubitIdx,
    ) -> Result<Self> {
        if target + base.size > qubits {
            return Err(SimError::QubitIndexOutOfRange {
                index: target,
                size: qubits,
            });
        }
        if control >= qubits {
            return Err(SimError::QubitIndexOutOfRange {
                index: control,
                size: qubits,
            });
        }
        if (target..target + base.size).contains(&control) {
            return Err(SimError::ControlOverlapsTarget(control));
        }
        log::debug!(
            "wiring {}-qubit base gate at qubit {} controlled by qubit {}",
            base.size,
            target,
            control
        );
        Ok(Self::new(GateDefn::Controlled {
            qubits,
            base: Box::new(base),
            target,
            control,
        }))
    }

    /// A gate given directly by an arbitrary unitary matrix. With `validate`
    /// on, the matrix must be square with a nonzero power-of-two side length
    /// and pass the unitarity check.
    pub fn oracle(matrix: DMatrix<Complex>, validate: bool) -> Result<Self> {
        if validate {
            let (rows, cols) = matrix.shape();
            if rows != cols {
                return Err(SimError::NotSquare { rows, cols });
            }
            if !bits::is_power_of_two(rows) {
                return Err(SimError::NotPowerOfTwo(rows));
            }
            if !matrix_properties::is_unitary(&matrix) {
                return Err(SimError::NotUnitary);
            }
        }
        Ok(Self::new(GateDefn::Oracle { matrix }))
    }

    /// Sequential composition of same-size gates; the first listed gate acts
    /// first on a register.
    pub fn circuit(gates: Vec<Gate>) -> Result<Self> {
        let Some(first) = gates.first() else {
            return Err(SimError::EmptyCircuit);
        };
        let expected = first.size;
        for gate in &gates {
            if gate.size != expected {
                return Err(SimError::SizeMismatch {
                    expected,
                    actual: gate.size,
                });
            }
        }
        Ok(Self::new(GateDefn::Circuit { gates }))
    }

    /// Qubit count; the matrix is 2^size x 2^size.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn matrix(&self) -> DMatrix<Complex> {
        self.defn.matrix()
    }

    /// Apply to a register of matching size, producing the new register
    /// matrix·vector. Unitarity of the matrix keeps the result normalized.
    pub fn apply(&self, register: &Register) -> Result<Register> {
        if register.num_qubits() != self.size {
            return Err(SimError::RegisterSizeMismatch {
                gate: self.size,
                register: register.num_qubits(),
            });
        }
        log::debug!("applying {}-qubit gate", self.size);
        Ok(Register::from_vector_unchecked(
            self.matrix() * register.vector(),
        ))
    }
}

/// Two gates are equal iff they have the same qubit count and element-wise
/// equal matrix representations.
impl PartialEq for Gate {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && matrix_properties::matrices_equal(&self.matrix(), &other.matrix())
    }
}
