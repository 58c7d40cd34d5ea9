use nalgebra::DVector;
use rand::Rng;

use crate::bits;
use crate::config::{Complex, Real};
use crate::error::{Result, SimError};
use crate::matrix_properties;

/// The joint state of n qubits: a unit-norm complex vector of length 2^n.
/// Immutable once built; gates produce new registers instead of mutating.
#[derive(Debug, Clone)]
pub struct Register {
    vector: DVector<Complex>,
    num_qubits: usize,
}

impl Register {
    /// Build a register from a raw amplitude vector. The length must be a
    /// power of two and the vector must have unit norm; pass
    /// `validate = false` to skip the checks when both are already known.
    pub fn new(vector: DVector<Complex>, validate: bool) -> Result<Self> {
        if validate {
            let len = vector.len();
            if !bits::is_power_of_two(len) {
                return Err(SimError::NotPowerOfTwo(len));
            }
            if !matrix_properties::is_normalized(&vector) {
                return Err(SimError::NotNormalized(vector.norm()));
            }
        }
        let num_qubits = vector.len().trailing_zeros() as usize;
        Ok(Self { vector, num_qubits })
    }

    /// Internal fast path for vectors produced by unitary application, which
    /// preserves both the length and the norm.
    pub(crate) fn from_vector_unchecked(vector: DVector<Complex>) -> Self {
        let num_qubits = vector.len().trailing_zeros() as usize;
        Self { vector, num_qubits }
    }

    /// The 0-qubit register: a single amplitude of 1. Identity element of
    /// the tensor product.
    pub fn empty() -> Self {
        Self {
            vector: DVector::from_element(1, Complex::new(1.0, 0.0)),
            num_qubits: 0,
        }
    }

    /// A 1-qubit basis state: |1> when the bit is set, |0> otherwise.
    pub fn from_bit(bit: bool) -> Self {
        let vector = if bit {
            DVector::from_vec(vec![Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)])
        } else {
            DVector::from_vec(vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)])
        };
        Self {
            vector,
            num_qubits: 1,
        }
    }

    /// The basis state |b_0 b_1 ... b_{n-1}>, the tensor product of the
    /// single-qubit states in order.
    pub fn from_bits(bits: &[bool]) -> Self {
        bits.iter()
            .fold(Self::empty(), |acc, &bit| acc.tensor_product(&Self::from_bit(bit)))
    }

    /// Combine with another register; the result holds the qubits of `self`
    /// followed by the qubits of `other`, with the Kronecker product of the
    /// two amplitude vectors.
    pub fn tensor_product(&self, other: &Self) -> Self {
        Self {
            vector: self.vector.kronecker(&other.vector),
            num_qubits: self.num_qubits + other.num_qubits,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn vector(&self) -> &DVector<Complex> {
        &self.vector
    }

    /// Born rule: the probability of observing each basis state is the
    /// squared magnitude of its amplitude.
    pub fn probabilities(&self) -> Vec<Real> {
        self.vector.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Draw one measurement outcome (a basis-state index) from the Born
    /// distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let draw: Real = rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;
        for (idx, p) in self.probabilities().into_iter().enumerate() {
            cumulative += p;
            if draw < cumulative {
                return idx;
            }
        }
        // The probabilities sum to 1 up to rounding; attribute the sliver of
        // leftover mass to the last basis state.
        self.vector.len() - 1
    }
}

impl PartialEq for Register {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .vector
                .iter()
                .zip(other.vector.iter())
                .all(|(a, b)| matrix_properties::is_zero(a - b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::RECP_SQRT_2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(re: Real, im: Real) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn test_new_rejects_bad_vectors() {
        let wrong_len = DVector::from_vec(vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]);
        assert_eq!(
            Register::new(wrong_len, true),
            Err(SimError::NotPowerOfTwo(3))
        );

        let empty = DVector::from_vec(Vec::<Complex>::new());
        assert_eq!(Register::new(empty, true), Err(SimError::NotPowerOfTwo(0)));

        let zero = DVector::from_vec(vec![c(0.0, 0.0), c(0.0, 0.0)]);
        assert!(matches!(
            Register::new(zero, true),
            Err(SimError::NotNormalized(_))
        ));

        let too_long = DVector::from_vec(vec![c(2.0, 0.0), c(0.0, 0.0)]);
        assert!(matches!(
            Register::new(too_long, true),
            Err(SimError::NotNormalized(_))
        ));
    }

    #[test]
    fn test_from_bits_basis_states() {
        let expectations = [
            (vec![false, false], 0),
            (vec![false, true], 1),
            (vec![true, false], 2),
            (vec![true, true], 3),
        ];
        for (bits, idx) in expectations {
            let reg = Register::from_bits(&bits);
            let mut amplitudes = vec![c(0.0, 0.0); 4];
            amplitudes[idx] = c(1.0, 0.0);
            let expected = Register::new(DVector::from_vec(amplitudes), true).unwrap();
            assert_eq!(reg, expected);
        }
    }

    #[test]
    fn test_tensor_product() {
        let left = Register::from_bits(&[false, true]);
        let right = Register::from_bits(&[true, false]);
        assert_eq!(
            left.tensor_product(&right),
            Register::from_bits(&[false, true, true, false])
        );
        assert_eq!(
            left.tensor_product(&Register::from_bits(&[true, false, false]))
                .num_qubits(),
            5
        );
    }

    #[test]
    fn test_num_qubits() {
        assert_eq!(Register::from_bits(&[false, true, false]).num_qubits(), 3);
        let raw = DVector::from_vec(vec![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]);
        assert_eq!(Register::new(raw, true).unwrap().num_qubits(), 2);
        assert_eq!(Register::empty().num_qubits(), 0);
    }

    #[test]
    fn test_probabilities() {
        let plus = Register::new(
            DVector::from_vec(vec![c(RECP_SQRT_2, 0.0), c(0.0, -RECP_SQRT_2)]),
            true,
        )
        .unwrap();
        let probs = plus.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sample_basis_state_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let reg = Register::from_bits(&[true, false]);
        for _ in 0..16 {
            assert_eq!(reg.sample(&mut rng), 2);
        }
    }

    #[test]
    fn test_sample_stays_in_support() {
        let mut rng = StdRng::seed_from_u64(42);
        let plus = Register::new(
            DVector::from_vec(vec![c(RECP_SQRT_2, 0.0), c(RECP_SQRT_2, 0.0)]),
            true,
        )
        .unwrap();
        for _ in 0..64 {
            assert!(plus.sample(&mut rng) < 2);
        }
    }
}
