//! A dense state-vector quantum-gate simulator. Registers are unit-norm
//! complex vectors, gates are unitary matrices built from a closed set of
//! variants, and circuits compose gates sequentially. Matrices are dense and
//! grow as 2^n x 2^n with the qubit count, so only small registers are
//! practical.

pub mod bits;
pub mod config;
pub mod deutsch;
pub mod error;
pub mod gate;
pub mod matrix_properties;
pub mod options;
pub mod register;
