//! Quantile (inverse cdf) for the standard SaS point-5 distribution.
//!
//! Arguments above 1/2 are reflected onto the lower half. `[0.125, 0.5]` is
//! split into nine segments evaluated at the distance below each segment's
//! upper edge. Below 0.125 the quantile grows like `1 / (2 pi p^2)`; the
//! tables fit `v = p^2 |Q(p)|` in `t = -log2(p * 2^k)`, one bin per range of
//! binary exponents, and past 2^-96 `v` is its limit `1 / (2 pi)`.

use super::error::SaSPoint5Error;
use super::quantile_data::{BODY, TAIL, TAIL_LIMIT};
use super::rational::{Pade, Segment, pade};
use super::{ilogb, ldexp, log2};

const BODY_LOWER: f64 = 0.125;

/// Tail bin for `p` with `ilogb(p) >= min_exponent`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExponentBin {
    pub(crate) min_exponent: i32,
    /// `k` in `t = -log2(p * 2^k)`.
    pub(crate) scale: i32,
    pub(crate) pade: Pade,
}

impl ExponentBin {
    pub(crate) const fn new(min_exponent: i32, scale: i32, pade: Pade) -> Self {
        Self {
            min_exponent,
            scale,
            pade,
        }
    }

    /// Upper end of the `t` range this bin was fitted on (the lower end is 0).
    #[cfg(test)]
    pub(crate) fn t_max(&self) -> f64 {
        -f64::from(self.min_exponent + self.scale)
    }
}

/// Quantile of the lower tail, or of the upper tail when `complementary`.
///
/// `p = 0` and `p = 1` map to the matching infinities; NaN and arguments
/// outside `[0, 1]` give NaN. Use [`checked_quantile`] to reject those
/// instead.
pub fn quantile(p: f64, complementary: bool) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }

    let (p, complementary) = if p > 0.5 {
        (1.0 - p, !complementary)
    } else {
        (p, complementary)
    };

    let y = if p >= BODY_LOWER {
        // p <= 0.5 here; the last segment ends at 0.5 and takes anything above.
        let seg = Segment::locate(&BODY, p).unwrap_or(&BODY[BODY.len() - 1]);
        pade(seg.origin - p, &seg.pade)
    } else {
        tail_magnitude(p)
    };

    if complementary { y } else { -y }
}

/// `|Q(p)|` for `0 <= p < 0.125`.
#[inline]
fn tail_magnitude(p: f64) -> f64 {
    // ilogb(0) is FP_ILOGB0, far below every bin: p = 0 yields the limit over 0.
    let exponent = ilogb(p);

    let v = match TAIL.iter().find(|bin| exponent >= bin.min_exponent) {
        Some(bin) => pade(-log2(ldexp(p, bin.scale)), &bin.pade),
        None => TAIL_LIMIT,
    };

    v / (p * p)
}

/// [`quantile`] restricted to the open interval `(0, 1)`.
pub fn checked_quantile(p: f64, complementary: bool) -> Result<f64, SaSPoint5Error> {
    if p > 0.0 && p < 1.0 {
        Ok(quantile(p, complementary))
    } else {
        Err(SaSPoint5Error::ProbabilityOutOfRange(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_1_PI, PI};

    #[test]
    fn quantile_median_is_zero() {
        assert_eq!(quantile(0.5, false), 0.0);
        assert_eq!(quantile(0.5, true), 0.0);
    }

    #[test]
    fn quantile_special_cases() {
        assert!(quantile(f64::NAN, false).is_nan());
        assert!(quantile(-0.25, false).is_nan());
        assert!(quantile(1.25, true).is_nan());
        assert_eq!(quantile(0.0, false), f64::NEG_INFINITY);
        assert_eq!(quantile(0.0, true), f64::INFINITY);
        assert_eq!(quantile(1.0, false), f64::INFINITY);
        assert_eq!(quantile(1.0, true), f64::NEG_INFINITY);
    }

    #[test]
    fn checked_quantile_rejects_closed_endpoints() {
        assert_eq!(
            checked_quantile(0.0, false),
            Err(SaSPoint5Error::ProbabilityOutOfRange(0.0))
        );
        assert_eq!(
            checked_quantile(1.0, true),
            Err(SaSPoint5Error::ProbabilityOutOfRange(1.0))
        );
        assert!(matches!(
            checked_quantile(f64::NAN, false),
            Err(SaSPoint5Error::ProbabilityOutOfRange(p)) if p.is_nan()
        ));
        assert_eq!(checked_quantile(0.25, false), Ok(quantile(0.25, false)));
    }

    #[test]
    fn quantile_sign_convention() {
        for &p in &[1.0e-300, 1.0e-20, 0.01, 0.1, 0.2, 0.3, 0.49] {
            assert!(quantile(p, false) < 0.0, "lower quantile({p}) should be negative");
            assert!(quantile(p, true) > 0.0, "upper quantile({p}) should be positive");
            assert_eq!(quantile(p, false), -quantile(p, true));
        }
    }

    #[test]
    fn quantile_reflects_about_one_half() {
        let mut p = 1.0 / 8192.0;
        while p <= 0.5 {
            assert_eq!(quantile(1.0 - p, false), -quantile(p, false), "p={p}");
            p += 1.0 / 8192.0;
        }
    }

    #[test]
    fn quantile_increases_with_p() {
        let mut prev = f64::NEG_INFINITY;
        let mut p = 1.0 / 8192.0;
        while p < 1.0 {
            let q = quantile(p, false);
            assert!(q > prev, "quantile not increasing at {p}: {q} <= {prev}");
            prev = q;
            p += 1.0 / 8192.0;
        }
    }

    #[test]
    fn quantile_beyond_last_bin_uses_limit() {
        let p = f64::from_bits(0x39e0_0000_0000_0000); // 2^-97
        assert_eq!(quantile(p, true), (0.5 * FRAC_1_PI) / (p * p));

        let tiny = f64::from_bits(1);
        assert_eq!(quantile(tiny, false), f64::NEG_INFINITY);
    }

    #[test]
    fn quantile_tail_follows_inverse_square_law() {
        // p^2 Q(p) -> -1 / (2 pi)
        let limit = -0.5 / PI;
        for e in [20, 40, 50, 70, 90] {
            let p = 0.5f64.powi(e);
            let scaled = quantile(p, false) * p * p;
            assert!(
                (scaled / limit - 1.0).abs() < 1.0e-4,
                "p^2 Q(2^-{e}) = {scaled}, expected ~{limit}"
            );
        }
    }

    #[test]
    fn body_ends_at_one_half() {
        let last = &BODY[BODY.len() - 1];
        assert_eq!(last.upper, 0.5);
        assert_eq!(Segment::locate(&BODY, 0.5).map(|s| s.upper), Some(0.5));
        for p in [0.125, 0.2, 0.3125, 0.49, 0.5] {
            assert!(Segment::locate(&BODY, p).is_some(), "no body segment for {p}");
        }
        // the segment just below 0.5 is continuous into the median
        assert!(quantile(0.5f64.next_down(), false) < 0.0);
        assert!(quantile(0.5f64.next_down(), false).abs() < 1.0e-15);
    }

    #[test]
    fn tail_bins_are_ordered() {
        for pair in TAIL.windows(2) {
            assert!(pair[0].min_exponent > pair[1].min_exponent);
            assert!(pair[0].t_max() > 0.0);
        }
    }
}
