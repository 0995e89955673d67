//! Horner and Padé evaluation shared by the three function families.
//!
//! Coefficients are stored lowest degree first. Evaluation is plain
//! multiply-add (no FMA) so every table reproduces the values it was fitted
//! against bit for bit.

/// Smallest denominator value any table is allowed to produce on its fitted
/// range. Anything lower means the sub-argument left the fitted interval.
pub(crate) const DENOM_FLOOR: f64 = 0.5;

/// Numerator/denominator pair of one rational approximation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Pade {
    pub(crate) numer: &'static [f64],
    pub(crate) denom: &'static [f64],
}

/// Body segment covering `(previous upper, upper]`.
///
/// `origin` is the point the sub-argument is measured from: the lower bound
/// for pdf/cdf, the upper bound for the quantile body.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    pub(crate) upper: f64,
    pub(crate) origin: f64,
    pub(crate) pade: Pade,
}

impl Segment {
    pub(crate) const fn new(upper: f64, origin: f64, pade: Pade) -> Self {
        Self {
            upper,
            origin,
            pade,
        }
    }

    /// First segment whose upper bound is not exceeded by `x`.
    #[inline]
    pub(crate) fn locate(table: &[Segment], x: f64) -> Option<&Segment> {
        table.iter().find(|s| x <= s.upper)
    }
}

/// `coeffs[0] + x*(coeffs[1] + x*(... + x*coeffs[n-1]))`.
#[inline]
pub(crate) fn poly(x: f64, coeffs: &[f64]) -> f64 {
    let mut iter = coeffs.iter().rev();
    let mut s = match iter.next() {
        Some(&c) => c,
        None => return 0.0,
    };
    for &c in iter {
        s = s * x + c;
    }
    s
}

/// Ratio of the two polynomials of `table` at `x`.
///
/// # Panics
///
/// When the denominator drops below [`DENOM_FLOOR`] (or is NaN). The tables
/// never do this inside their fitted range, so a trip is a dispatch bug.
#[inline]
pub(crate) fn pade(x: f64, table: &Pade) -> f64 {
    let sc = poly(x, table.numer);
    let sd = poly(x, table.denom);

    assert!(sd >= DENOM_FLOOR, "pade denominator lost digits at x={x} (denom={sd})");

    sc / sd
}
