//! The Deutsch oracle algorithm: decides with one oracle query whether a
//! 1-bit boolean function is constant or balanced.

use crate::config::Real;
use crate::error::Result;
use crate::gate::Gate;
use crate::register::Register;

/// Lift f into the standard 2-qubit XOR oracle (x, y) -> (x, y xor f(x)).
/// The lift is always a bijection, so construction cannot fail for any f.
pub fn oracle<F>(f: F) -> Result<Gate>
where
    F: Fn(bool) -> bool,
{
    Gate::boolean_reversible(2, move |b| vec![b[0], b[1] ^ f(b[0])], true)
}

/// The full circuit: Hadamard both qubits, query the oracle, then Hadamard
/// the first qubit.
pub fn circuit<F>(f: F) -> Result<Gate>
where
    F: Fn(bool) -> bool,
{
    Gate::circuit(vec![
        Gate::hadamard(2),
        oracle(f)?,
        Gate::tensor_product(vec![Gate::hadamard(1), Gate::identity(1)]),
    ])
}

/// Run the circuit on |01> and return the output register.
pub fn run<F>(f: F) -> Result<Register>
where
    F: Fn(bool) -> bool,
{
    circuit(f)?.apply(&Register::from_bits(&[false, true]))
}

/// Born-rule probabilities over the four basis states of the output
/// register. Constant functions put all mass on first qubit 0, balanced
/// functions on first qubit 1.
pub fn deutsch_algorithm<F>(f: F) -> Result<Vec<Real>>
where
    F: Fn(bool) -> bool,
{
    Ok(run(f)?.probabilities())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distribution(actual: &[Real], expected: &[Real]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-10, "got {actual:?}, want {expected:?}");
        }
    }

    #[test]
    fn test_constant_functions() {
        assert_distribution(
            &deutsch_algorithm(|_| false).unwrap(),
            &[0.5, 0.5, 0.0, 0.0],
        );
        assert_distribution(
            &deutsch_algorithm(|_| true).unwrap(),
            &[0.5, 0.5, 0.0, 0.0],
        );
    }

    #[test]
    fn test_balanced_functions() {
        assert_distribution(&deutsch_algorithm(|x| x).unwrap(), &[0.0, 0.0, 0.5, 0.5]);
        assert_distribution(&deutsch_algorithm(|x| !x).unwrap(), &[0.0, 0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_oracle_is_a_permutation() {
        use crate::matrix_properties;
        for f in [|_: bool| false, |_: bool| true, |x: bool| x, |x: bool| !x] {
            assert!(matrix_properties::is_permutation_matrix(
                &oracle(f).unwrap().matrix()
            ));
        }
    }

    #[test]
    fn test_identity_oracle_is_cnot() {
        let cnot = Gate::controlled(2, Gate::pauli_x(), 1, 0).unwrap();
        assert_eq!(oracle(|x| x).unwrap(), cnot);
    }
}
