//! pdf(x) for the standard SaS point-5 distribution.
//!
//! Nine octave segments on `[0, 64]` in `x - lower`; beyond 64 the density
//! decays like `x^-3/2`, so the tail rational is fitted in `u = x^-1/2` and
//! multiplied by `u^3`.

use super::pdf_data::{BODY, TAIL};
use super::rational::{Segment, pade};
use super::sqrt;

#[inline]
pub fn pdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    let x = x.abs();

    match Segment::locate(&BODY, x) {
        Some(seg) => pade(x - seg.origin, &seg.pade),
        None => {
            // x = inf lands here with u = 0.
            let u = 1.0 / sqrt(x);
            pade(u, &TAIL) * (u * u * u)
        }
    }
}
