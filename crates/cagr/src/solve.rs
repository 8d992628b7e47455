//! Validation and dispatch from a quadruple to the inversion that solves it.

use thiserror::Error;
use tracing::debug;

use crate::math;
use crate::quadruple::{Quadruple, Quantity};

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;

/// Errors raised when a quadruple cannot be dispatched.
///
/// Only malformed input fails. Degenerate algebra (division by zero,
/// logarithm of zero or of a negative number) flows through as an infinite
/// or NaN *result*, which callers must treat as a valid numeric outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The quadruple did not leave exactly one slot unknown.
    #[error("exactly one of the four values must be left unknown, got {unknowns}")]
    ExactlyOneUnknown {
        /// How many slots were unknown.
        unknowns: usize,
    },

    /// A supplied slot held something other than a well-formed number.
    #[error("supplied {0} is not a well-formed number")]
    InvalidValue(Quantity),
}

/// Derive the single unknown slot of `quadruple` from the other three.
///
/// Supplied values are checked first, in declaration order (start, end,
/// periods, rate): a NaN in any supplied slot fails with
/// [`SolveError::InvalidValue`] before the unknown count is considered.
/// A quadruple with zero or several unknown slots then fails with
/// [`SolveError::ExactlyOneUnknown`]. A well-formed quadruple routes to the
/// inversion matching its unknown slot and returns that result untouched,
/// infinite and NaN outcomes included.
///
/// # Examples
///
/// ```
/// use cagr::{Quadruple, resolve};
///
/// // What per-period rate triples 2 into 54 over 3 periods?
/// let quadruple = Quadruple::new(Some(2.0), Some(54.0), Some(3.0), None);
/// let rate = resolve(&quadruple).unwrap();
/// assert!((rate - 200.0).abs() < 1e-9);
/// ```
pub fn resolve(quadruple: &Quadruple) -> Result<f64> {
    check_values(quadruple)?;

    let (unknown, value) = match (
        quadruple.start,
        quadruple.end,
        quadruple.periods,
        quadruple.rate,
    ) {
        (None, Some(end), Some(periods), Some(rate)) => {
            (Quantity::Start, math::start_value(end, periods, rate))
        }
        (Some(start), None, Some(periods), Some(rate)) => {
            (Quantity::End, math::end_value(start, periods, rate))
        }
        (Some(start), Some(end), None, Some(rate)) => {
            (Quantity::Periods, math::period_count(start, end, rate))
        }
        (Some(start), Some(end), Some(periods), None) => {
            (Quantity::Rate, math::rate_per_period(start, end, periods))
        }
        _ => {
            let unknowns = quadruple
                .slots()
                .iter()
                .filter(|(_, value)| value.is_none())
                .count();
            return Err(SolveError::ExactlyOneUnknown { unknowns });
        }
    };

    debug!("derived {unknown} = {value} from {quadruple:?}");
    Ok(value)
}

/// Positional form of [`resolve`] for callers holding four loose fields.
pub fn resolve_parts(
    start: Option<f64>,
    end: Option<f64>,
    periods: Option<f64>,
    rate: Option<f64>,
) -> Result<f64> {
    resolve(&Quadruple::new(start, end, periods, rate))
}

fn check_values(quadruple: &Quadruple) -> Result<()> {
    for (quantity, value) in quadruple.slots() {
        if value.is_some_and(f64::is_nan) {
            return Err(SolveError::InvalidValue(quantity));
        }
    }
    Ok(())
}
