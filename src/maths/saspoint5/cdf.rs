//! cdf(x) and its complement for the standard SaS point-5 distribution.
//!
//! The tables describe the folded upper tail `P(X > |x|)`, which never
//! exceeds 1/2. The requested side is recovered with a single `1 - y`, so
//! the small tail value is always the one returned without cancellation.

use super::cdf_data::{BODY, TAIL};
use super::rational::{Segment, pade};
use super::sqrt;

/// `P(X <= x)`, or `P(X > x)` when `complementary` is set.
#[inline]
pub fn cdf(x: f64, complementary: bool) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    let inversion = (x <= 0.0) ^ complementary;
    let x = x.abs();

    let y = match Segment::locate(&BODY, x) {
        Some(seg) => pade(x - seg.origin, &seg.pade),
        None => {
            let u = 1.0 / sqrt(x);
            pade(u, &TAIL) * u
        }
    };

    if inversion { y } else { 1.0 - y }
}
