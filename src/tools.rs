//! Parameter helpers shared by the sweep, the batch grid and the CLI

use crate::constants::EV_TO_WAVENUMBER;

/// Convert Slater-Condon integrals `F2`, `F4` (eV) into Racah `B`, `C` (cm-1).
pub fn racah(f2: f64, f4: f64) -> (f64, f64) {
    let b = EV_TO_WAVENUMBER * (f2 / 49.0 - 5.0 / 441.0 * f4);
    let c = EV_TO_WAVENUMBER * (35.0 / 441.0 * f4);
    (b, c)
}

/// `n` evenly spaced values over the closed interval `[start, stop]`.
///
/// Mirrors numpy: `n == 0` yields an empty vector, `n == 1` yields `[start]`, and the
/// last element is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}
