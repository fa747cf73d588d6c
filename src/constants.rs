//! Numerical constants shared by every d-electron configuration
//!
//! The irrational coupling factors are written as the correctly rounded `f64`
//! values of the square roots, so `SQRT_3 == 3.0_f64.sqrt()` holds bit for bit.

pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const SQRT_6: f64 = 2.449_489_742_783_178;

pub const TWO_SQRT_2: f64 = SQRT_2 * 2.0;
pub const TWO_SQRT_3: f64 = SQRT_3 * 2.0;
pub const THREE_SQRT_2: f64 = SQRT_2 * 3.0;
pub const THREE_SQRT_3: f64 = SQRT_3 * 3.0;
pub const THREE_SQRT_6: f64 = SQRT_6 * 3.0;

/// Threshold (cm-1) below which the d6 low-spin candidate takes over the ground state
pub const ENERGY_TOLERANCE: f64 = 1e-4;

/// Convergence tolerance handed to the symmetric eigen-decomposition
pub const EIGEN_EPSILON: f64 = f64::EPSILON;

/// Iteration cap for the symmetric eigen-decomposition of one block
pub const EIGEN_MAX_ITERATIONS: usize = 1000;

/// Wavenumbers (cm-1) per electron volt, used for Slater-Condon input
pub const EV_TO_WAVENUMBER: f64 = 8065.54;

/// Electron volts per wavenumber as used in the energy-cut table
pub const WAVENUMBER_TO_EV: f64 = 0.00012;

/// A parameter range is given as `[start, stop, steps]`
pub const PARAMETER_RANGE_LENGTH: usize = 3;
