#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::saspoint5;
pub use maths::saspoint5::{
    Interval, SaSPoint5, SaSPoint5Error, cdf, checked_quantile, pdf, quantile,
};
