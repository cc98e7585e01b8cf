//! Error type shared across parameter validation and mining entry points.

use std::fmt;

/// Anything that can go wrong setting up or running a mining pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter is out of its required range, with a human-readable
    /// description of the violated constraint.
    InvalidParameter(String),
    /// The input dataset cannot support mining (e.g. fewer than two
    /// distinct features).
    DegenerateInput(String),
    /// A computed value overflowed or lost its required numeric properties.
    NumericOverflow(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Error::DegenerateInput(msg) => write!(f, "degenerate input: {msg}"),
            Error::NumericOverflow(msg) => write!(f, "numeric overflow: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validates the `(d1, d2, min_prev)` triple required by every driver in
/// this crate: `0 <= d1 <= d2`, both finite, and `min_prev` in `(0, 1]`.
pub fn validate_parameters(d1: f64, d2: f64, min_prev: f64) -> Result<()> {
    if !d1.is_finite() || !d2.is_finite() {
        return Err(Error::InvalidParameter(format!("d1 ({d1}) and d2 ({d2}) must be finite")));
    }
    if d1 < 0.0 {
        return Err(Error::InvalidParameter(format!("d1 ({d1}) must be non-negative")));
    }
    if d2 < d1 {
        return Err(Error::InvalidParameter(format!("d2 ({d2}) must be >= d1 ({d1})")));
    }
    if !(min_prev > 0.0 && min_prev <= 1.0) {
        return Err(Error::InvalidParameter(format!("min_prev ({min_prev}) must be in (0, 1]")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 1.0, 0.5 => true; "ordinary range")]
    #[test_case(1.0, 1.0, 1.0 => true; "degenerate d1 == d2 with min_prev 1.0")]
    #[test_case(-1.0, 1.0, 0.5 => false; "negative d1 rejected")]
    #[test_case(2.0, 1.0, 0.5 => false; "d2 below d1 rejected")]
    #[test_case(0.0, 1.0, 0.0 => false; "zero min_prev rejected")]
    #[test_case(0.0, 1.0, 1.5 => false; "min_prev above one rejected")]
    #[test_case(f64::NAN, 1.0, 0.5 => false; "NaN d1 rejected")]
    #[test_case(0.0, f64::INFINITY, 0.5 => false; "infinite d2 rejected")]
    fn validate_parameters_cases(d1: f64, d2: f64, min_prev: f64) -> bool {
        validate_parameters(d1, d2, min_prev).is_ok()
    }
}
