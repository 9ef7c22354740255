use std::f64::consts::TAU;

use crate::foundation::error::{BlochError, BlochResult};

/// Linearly interpolate a closed, discretely sampled sequence at the
/// continuous angle `u` in `[0, 2*pi]`.
///
/// The continuous index is `s = u / 2pi * n`; the bracketing samples are
/// `floor(s) mod n` and its cyclic successor, so queries near the seam
/// blend across it and `u = 2pi` lands back on index 0. Only the index
/// wraps; the magnitude of `u` is the caller's contract.
pub(crate) fn sample_closed(values: &[f64], u: f64) -> BlochResult<f64> {
    if values.len() < 2 {
        return Err(BlochError::sampling("closed curve needs at least 2 samples"));
    }
    if !u.is_finite() || !(0.0..=TAU).contains(&u) {
        return Err(BlochError::sampling(format!(
            "query angle {u} outside [0, 2*pi]"
        )));
    }

    let n = values.len();
    let s = (u / TAU) * (n as f64);
    let base = s.floor();
    let i0 = (base as usize) % n;
    let i1 = (i0 + 1) % n;
    let frac = s - base;
    Ok((1.0 - frac) * values[i0] + frac * values[i1])
}
