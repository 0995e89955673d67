//! Symmetric alpha-stable distribution with `alpha = 1/2`.
//!
//! Density, distribution and quantile functions are piecewise Padé
//! approximations fitted for double precision over the whole real line. Body
//! segments cover octaves of the argument; the tails carry their power law
//! explicitly (`x^-3/2` for the density, `x^-1/2` for the cdf, `p^-2` for the
//! quantile) so the rational factor stays bounded.
//!
//! Tables are `const` data and every function is pure, so all entry points
//! are safe to call from any thread.

#![allow(clippy::excessive_precision)]

mod cdf;
pub(crate) mod cdf_data;
mod distribution;
mod error;
mod pdf;
pub(crate) mod pdf_data;
mod quantile;
pub(crate) mod quantile_data;
pub(crate) mod rational;

pub use cdf::cdf;
pub use distribution::{Interval, SaSPoint5};
pub use error::SaSPoint5Error;
pub use pdf::pdf;
pub use quantile::{checked_quantile, quantile};

// ========= libm shims =========
//
// core has no transcendental f64 methods; everything goes through libm.

#[inline(always)]
fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[inline(always)]
fn log2(x: f64) -> f64 {
    libm::log2(x)
}

#[inline(always)]
fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[inline(always)]
fn ilogb(x: f64) -> i32 {
    libm::ilogb(x)
}

#[inline(always)]
fn ldexp(x: f64, n: i32) -> f64 {
    libm::ldexp(x, n)
}

/// sin(pi x).
#[inline]
fn sin_pi(x: f64) -> f64 {
    libm::sin(core::f64::consts::PI * x)
}

/// cos(pi x).
#[inline]
fn cos_pi(x: f64) -> f64 {
    libm::cos(core::f64::consts::PI * x)
}
