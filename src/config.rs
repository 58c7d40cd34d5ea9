use num_complex::Complex64;

pub type QubitIdx = usize;
pub type Real = f64;
pub type Complex = Complex64;

pub mod constants {
    pub const RECP_SQRT_2: super::Real = std::f64::consts::FRAC_1_SQRT_2;
    pub const ZERO_THRESHOLD: super::Real = 1e-10;
}
