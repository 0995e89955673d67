use thiserror::Error;

/// Parameter and argument errors for the checked entry points.
///
/// The unchecked functions follow libm conventions and return NaN instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SaSPoint5Error {
    /// Location must be finite.
    #[error("invalid location parameter: {0}")]
    InvalidLocation(f64),

    /// Scale must be finite and strictly positive.
    #[error("invalid scale parameter: {0}")]
    InvalidScale(f64),

    /// Probability outside the open interval (0, 1).
    #[error("probability {0} is outside the open interval (0, 1)")]
    ProbabilityOutOfRange(f64),

    /// Shift must be finite.
    #[error("invalid shift: {0}")]
    InvalidShift(f64),

    /// Scaling factor must be finite and non-zero.
    #[error("invalid scaling factor: {0}")]
    InvalidFactor(f64),
}
