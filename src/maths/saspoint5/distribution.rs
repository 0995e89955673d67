//! Location/scale wrapper around the standard functions.

use core::fmt;
use core::ops::{Add, Sub};

use rand::Rng;
use rand::distr::{Distribution, Open01};

use super::error::SaSPoint5Error;
use super::{cdf, cos_pi, ln, pdf, quantile, sin_pi, sqrt};

/// Differential entropy of the standard distribution (`c = 1`).
const ENTROPY_BASE: f64 = 3.63992444568030649573;

/// Which tail a cdf or quantile refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    /// `P(X <= x)`.
    #[default]
    Lower,
    /// `P(X > x)`.
    Upper,
}

/// Symmetric alpha-stable distribution with `alpha = 1/2`, location `mu` and
/// scale `c`: characteristic function `exp(i mu t - sqrt(|c t|))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaSPoint5 {
    location: f64,
    scale: f64,
    inv_scale: f64,
}

impl SaSPoint5 {
    /// `mu = 0`, `c = 1`.
    pub const fn standard() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
            inv_scale: 1.0,
        }
    }

    /// # Errors
    ///
    /// `InvalidLocation` unless `location` is finite, `InvalidScale` unless
    /// `scale` is finite and positive.
    pub fn new(location: f64, scale: f64) -> Result<Self, SaSPoint5Error> {
        if !location.is_finite() {
            return Err(SaSPoint5Error::InvalidLocation(location));
        }
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(SaSPoint5Error::InvalidScale(scale));
        }
        Ok(Self {
            location,
            scale,
            inv_scale: 1.0 / scale,
        })
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pdf(&self, x: f64) -> f64 {
        let u = (x - self.location) * self.inv_scale;
        if u.is_nan() {
            return f64::NAN;
        }
        if u.is_infinite() {
            return 0.0;
        }
        pdf(u) * self.inv_scale
    }

    pub fn cdf(&self, x: f64, interval: Interval) -> f64 {
        let u = (x - self.location) * self.inv_scale;
        if u.is_nan() {
            return f64::NAN;
        }
        cdf(u, interval == Interval::Upper)
    }

    /// NaN for `p` outside `[0, 1]`.
    pub fn quantile(&self, p: f64, interval: Interval) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.location + self.scale * quantile(p, interval == Interval::Upper)
    }

    /// The distribution of `X + s`.
    pub fn shifted(&self, s: f64) -> Result<Self, SaSPoint5Error> {
        if !s.is_finite() {
            return Err(SaSPoint5Error::InvalidShift(s));
        }
        Self::new(self.location + s, self.scale)
    }

    /// The distribution of `k X`. Negative `k` mirrors the location; the
    /// shape is symmetric so only `|k|` reaches the scale.
    pub fn scaled(&self, k: f64) -> Result<Self, SaSPoint5Error> {
        if !(k.is_finite() && k != 0.0) {
            return Err(SaSPoint5Error::InvalidFactor(k));
        }
        Self::new(self.location * k, self.scale * k.abs())
    }

    pub fn is_symmetric(&self) -> bool {
        true
    }

    pub fn median(&self) -> f64 {
        self.location
    }

    pub fn mode(&self) -> f64 {
        self.location
    }

    /// Undefined: the tails are too heavy for any moment to exist.
    pub fn mean(&self) -> f64 {
        f64::NAN
    }

    pub fn variance(&self) -> f64 {
        f64::NAN
    }

    pub fn skewness(&self) -> f64 {
        f64::NAN
    }

    pub fn kurtosis(&self) -> f64 {
        f64::NAN
    }

    pub fn entropy(&self) -> f64 {
        ENTROPY_BASE + ln(self.scale)
    }

    /// Stability index.
    pub fn alpha(&self) -> f64 {
        0.5
    }

    /// Skewness parameter.
    pub fn beta(&self) -> f64 {
        0.0
    }
}

impl Default for SaSPoint5 {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for SaSPoint5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SaSPoint5[mu={},c={}]", self.location, self.scale)
    }
}

/// Stability under convolution: `c = (sqrt c1 + sqrt c2)^2`.
#[inline]
fn convolved_scale(c1: f64, c2: f64) -> f64 {
    let s = sqrt(c1) + sqrt(c2);
    s * s
}

/// Distribution of `X1 + X2` for independent `X1`, `X2`.
///
/// Fails like [`SaSPoint5::new`] when the combined parameters overflow.
impl Add for SaSPoint5 {
    type Output = Result<SaSPoint5, SaSPoint5Error>;

    fn add(self, rhs: SaSPoint5) -> Self::Output {
        SaSPoint5::new(
            self.location + rhs.location,
            convolved_scale(self.scale, rhs.scale),
        )
    }
}

/// Distribution of `X1 - X2` for independent `X1`, `X2`.
impl Sub for SaSPoint5 {
    type Output = Result<SaSPoint5, SaSPoint5Error>;

    fn sub(self, rhs: SaSPoint5) -> Self::Output {
        SaSPoint5::new(
            self.location - rhs.location,
            convolved_scale(self.scale, rhs.scale),
        )
    }
}

/// Chambers-Mallows-Stuck with `alpha = 1/2`, `beta = 0`.
impl Distribution<f64> for SaSPoint5 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.sample::<f64, _>(Open01) - 0.5;
        let w: f64 = rng.sample(Open01);

        let cu = cos_pi(u);
        let r = sin_pi(0.5 * u) * cos_pi(0.5 * u) / (-ln(w) * cu * cu);

        self.location + self.scale * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::format;
    use std::vec::Vec;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        a == b || (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    #[test]
    fn new_validates_parameters() {
        assert!(SaSPoint5::new(0.0, 1.0).is_ok());
        assert!(matches!(
            SaSPoint5::new(f64::NAN, 1.0),
            Err(SaSPoint5Error::InvalidLocation(mu)) if mu.is_nan()
        ));
        assert!(matches!(
            SaSPoint5::new(f64::INFINITY, 1.0),
            Err(SaSPoint5Error::InvalidLocation(_))
        ));
        assert_eq!(
            SaSPoint5::new(0.0, 0.0),
            Err(SaSPoint5Error::InvalidScale(0.0))
        );
        assert_eq!(
            SaSPoint5::new(0.0, -2.0),
            Err(SaSPoint5Error::InvalidScale(-2.0))
        );
        assert!(matches!(
            SaSPoint5::new(0.0, f64::INFINITY),
            Err(SaSPoint5Error::InvalidScale(_))
        ));
    }

    #[test]
    fn default_is_standard() {
        let d = SaSPoint5::default();
        assert_eq!(d.location(), 0.0);
        assert_eq!(d.scale(), 1.0);
        assert_eq!(d, SaSPoint5::new(0.0, 1.0).unwrap());
        for &x in &[-3.0, -0.5, 0.0, 0.25, 7.0, 1.0e9] {
            assert_eq!(d.pdf(x), pdf(x));
            assert_eq!(d.cdf(x, Interval::Lower), cdf(x, false));
            assert_eq!(d.cdf(x, Interval::Upper), cdf(x, true));
        }
    }

    #[test]
    fn location_scale_transform() {
        let d = SaSPoint5::new(2.0, 4.0).unwrap();
        for &x in &[-100.0, -3.0, 0.0, 2.0, 2.5, 10.0, 1.0e6] {
            let u = (x - 2.0) * 0.25;
            assert_eq!(d.pdf(x), pdf(u) * 0.25);
            assert_eq!(d.cdf(x, Interval::Lower), cdf(u, false));
            assert_eq!(d.cdf(x, Interval::Upper), cdf(u, true));
        }
        for &p in &[1.0e-9, 0.1, 0.5, 0.75, 0.999] {
            assert_eq!(d.quantile(p, Interval::Lower), 2.0 + 4.0 * quantile(p, false));
            assert_eq!(d.quantile(p, Interval::Upper), 2.0 + 4.0 * quantile(p, true));
        }
        assert_eq!(d.median(), 2.0);
        assert_eq!(d.mode(), 2.0);
    }

    #[test]
    fn special_arguments() {
        let d = SaSPoint5::new(-1.0, 0.5).unwrap();
        assert!(d.pdf(f64::NAN).is_nan());
        assert_eq!(d.pdf(f64::INFINITY), 0.0);
        assert_eq!(d.pdf(f64::NEG_INFINITY), 0.0);
        assert!(d.cdf(f64::NAN, Interval::Lower).is_nan());
        assert_eq!(d.cdf(f64::NEG_INFINITY, Interval::Lower), 0.0);
        assert_eq!(d.cdf(f64::INFINITY, Interval::Lower), 1.0);
        assert!(d.quantile(-0.1, Interval::Lower).is_nan());
        assert!(d.quantile(f64::NAN, Interval::Upper).is_nan());
        assert_eq!(d.quantile(0.0, Interval::Lower), f64::NEG_INFINITY);
        assert_eq!(d.quantile(1.0, Interval::Lower), f64::INFINITY);
        assert_eq!(d.quantile(0.5, Interval::Lower), -1.0);
    }

    #[test]
    fn moments_are_undefined() {
        let d = SaSPoint5::standard();
        assert!(d.mean().is_nan());
        assert!(d.variance().is_nan());
        assert!(d.skewness().is_nan());
        assert!(d.kurtosis().is_nan());
        assert!(d.is_symmetric());
        assert_eq!(d.alpha(), 0.5);
        assert_eq!(d.beta(), 0.0);
    }

    #[test]
    fn entropy_grows_with_log_scale() {
        assert_eq!(SaSPoint5::standard().entropy(), ENTROPY_BASE);
        let d = SaSPoint5::new(3.0, 4.0).unwrap();
        assert!(close(d.entropy(), ENTROPY_BASE + 4.0f64.ln(), 1.0e-15));
    }

    #[test]
    fn sum_and_difference_combine_scales() {
        let a = SaSPoint5::new(1.0, 1.0).unwrap();
        let b = SaSPoint5::new(2.0, 4.0).unwrap();
        let sum = (a + b).unwrap();
        assert_eq!(sum.location(), 3.0);
        assert_eq!(sum.scale(), 9.0);
        let diff = (a - b).unwrap();
        assert_eq!(diff.location(), -1.0);
        assert_eq!(diff.scale(), 9.0);
    }

    #[test]
    fn sum_and_difference_reject_overflow() {
        let big = SaSPoint5::new(1.0e308, 1.0e308).unwrap();
        assert_eq!(big + big, Err(SaSPoint5Error::InvalidLocation(f64::INFINITY)));

        let wide = SaSPoint5::new(0.0, 1.0e308).unwrap();
        assert_eq!(wide + wide, Err(SaSPoint5Error::InvalidScale(f64::INFINITY)));
        assert_eq!(wide - wide, Err(SaSPoint5Error::InvalidScale(f64::INFINITY)));

        let low = SaSPoint5::new(-1.0e308, 1.0).unwrap();
        assert_eq!(low - big, Err(SaSPoint5Error::InvalidLocation(f64::NEG_INFINITY)));

        // a successful combination stays usable
        let ok = (wide - SaSPoint5::standard()).unwrap();
        assert!(ok.location().is_finite() && ok.scale().is_finite());
        assert!(ok.pdf(0.0).is_finite());
    }

    #[test]
    fn shifted_and_scaled() {
        let d = SaSPoint5::new(1.0, 2.0).unwrap();
        let s = d.shifted(3.0).unwrap();
        assert_eq!((s.location(), s.scale()), (4.0, 2.0));
        assert!(matches!(d.shifted(f64::NAN), Err(SaSPoint5Error::InvalidShift(s)) if s.is_nan()));
        assert!(matches!(d.shifted(f64::INFINITY), Err(SaSPoint5Error::InvalidShift(_))));

        let k = d.scaled(-3.0).unwrap();
        assert_eq!((k.location(), k.scale()), (-3.0, 6.0));
        assert_eq!(d.scaled(0.0), Err(SaSPoint5Error::InvalidFactor(0.0)));
        assert!(matches!(d.scaled(f64::NEG_INFINITY), Err(SaSPoint5Error::InvalidFactor(_))));
    }

    #[test]
    fn display_names_parameters() {
        let d = SaSPoint5::new(1.5, 2.0).unwrap();
        assert_eq!(format!("{d}"), "SaSPoint5[mu=1.5,c=2]");
    }

    #[test]
    fn samples_follow_cdf() {
        let d = SaSPoint5::new(0.5, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0x5a5_0005);
        let samples: Vec<f64> = (0..40_000).map(|_| d.sample(&mut rng)).collect();
        assert!(samples.iter().all(|s| s.is_finite()));

        for &p in &[0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95] {
            let q = d.quantile(p, Interval::Lower);
            let below = samples.iter().filter(|&&s| s <= q).count() as f64;
            let frac = below / samples.len() as f64;
            assert!(
                (frac - p).abs() < 0.015,
                "empirical P(X <= {q}) = {frac}, expected {p}"
            );
        }
    }
}
