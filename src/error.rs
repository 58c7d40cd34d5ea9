use thiserror::Error;

use crate::config::{QubitIdx, Real};

/// Construction-time validation failures. All checks run eagerly when a gate
/// or register is built; no partially constructed values escape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("matrix is {rows}x{cols}, not square")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension {0} is not a nonzero power of two")]
    NotPowerOfTwo(usize),

    #[error("matrix is not unitary")]
    NotUnitary,

    #[error("boolean function is not a permutation of its domain")]
    NotPermutation,

    #[error("vector is not normalized (norm = {0})")]
    NotNormalized(Real),

    #[error("qubit index {index} is out of range for a {size}-qubit gate")]
    QubitIndexOutOfRange { index: QubitIdx, size: usize },

    #[error("control qubit {0} overlaps the target gate span")]
    ControlOverlapsTarget(QubitIdx),

    #[error("gate of size {actual} is incompatible with circuit of size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("a circuit needs at least one gate")]
    EmptyCircuit,

    #[error("register of size {register} does not match gate of size {gate}")]
    RegisterSizeMismatch { gate: usize, register: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
