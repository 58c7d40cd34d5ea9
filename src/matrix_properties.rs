use nalgebra::{DMatrix, DVector};

use crate::config::{self, Complex, Real};

pub fn is_real_zero(x: Real) -> bool {
    x.abs() < config::constants::ZERO_THRESHOLD
}

pub fn is_zero(c: Complex) -> bool {
    is_real_zero(c.re) && is_real_zero(c.im)
}

pub fn is_real_one(x: Real) -> bool {
    is_real_zero(x - 1.0)
}

/// Element-wise equality of two complex matrices within `ZERO_THRESHOLD`.
/// Matrices of different shapes are never equal.
pub fn matrices_equal(a: &DMatrix<Complex>, b: &DMatrix<Complex>) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| is_zero(x - y))
}

/// A permutation matrix is square, has only 0/1 entries, and has exactly one
/// 1 in every row and every column.
pub fn is_permutation_matrix(m: &DMatrix<Complex>) -> bool {
    let (rows, cols) = m.shape();
    if rows != cols {
        return false;
    }
    if !m.iter().all(|&c| is_zero(c) || is_zero(c - Complex::new(1.0, 0.0))) {
        return false;
    }
    let row_sums_ok = (0..rows).all(|i| is_real_one(m.row(i).iter().map(|c| c.re).sum()));
    let col_sums_ok = (0..cols).all(|j| is_real_one(m.column(j).iter().map(|c| c.re).sum()));
    row_sums_ok && col_sums_ok
}

/// M is unitary iff M·M† = M†·M = I.
pub fn is_unitary(m: &DMatrix<Complex>) -> bool {
    let (rows, cols) = m.shape();
    if rows != cols {
        return false;
    }
    let identity = DMatrix::<Complex>::identity(rows, rows);
    let adjoint = m.adjoint();
    matrices_equal(&(m * &adjoint), &identity) && matrices_equal(&(&adjoint * m), &identity)
}

pub fn is_normalized(v: &DVector<Complex>) -> bool {
    is_real_zero(v.norm() - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::RECP_SQRT_2;

    fn c(re: Real, im: Real) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn test_permutation_matrix() {
        let swap = DMatrix::from_row_slice(
            2,
            2,
            &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        );
        assert!(is_permutation_matrix(&swap));
        assert!(is_permutation_matrix(&DMatrix::<Complex>::identity(4, 4)));

        // doubled row sum
        let bad = DMatrix::from_row_slice(
            2,
            2,
            &[c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        );
        assert!(!is_permutation_matrix(&bad));

        // non-0/1 entry
        let scaled = DMatrix::from_row_slice(
            2,
            2,
            &[c(0.5, 0.0), c(0.5, 0.0), c(0.5, 0.0), c(0.5, 0.0)],
        );
        assert!(!is_permutation_matrix(&scaled));

        let rect = DMatrix::<Complex>::zeros(2, 3);
        assert!(!is_permutation_matrix(&rect));
    }

    #[test]
    fn test_unitary() {
        let h = DMatrix::from_row_slice(
            2,
            2,
            &[
                c(RECP_SQRT_2, 0.0),
                c(RECP_SQRT_2, 0.0),
                c(RECP_SQRT_2, 0.0),
                c(-RECP_SQRT_2, 0.0),
            ],
        );
        assert!(is_unitary(&h));

        let y = DMatrix::from_row_slice(
            2,
            2,
            &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)],
        );
        assert!(is_unitary(&y));

        let not_unitary = DMatrix::from_row_slice(
            2,
            2,
            &[c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        );
        assert!(!is_unitary(&not_unitary));
    }

    #[test]
    fn test_normalized() {
        let v = DVector::from_vec(vec![c(RECP_SQRT_2, 0.0), c(0.0, RECP_SQRT_2)]);
        assert!(is_normalized(&v));

        let too_long = DVector::from_vec(vec![c(1.0, 0.0), c(1.0, 0.0)]);
        assert!(!is_normalized(&too_long));
    }
}
