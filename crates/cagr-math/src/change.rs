//! The four inversions of the compound-change identity.
//!
//! The identity `end = start * factor^periods`, with `factor = rate/100 + 1`,
//! ties a starting value, an ending value, a per-period percent rate, and a
//! period count together. Each function here solves the identity for one of
//! the four given the other three.
//!
//! All functions accept any `f64`, including non-finite values and NaN, and
//! propagate standard floating-point semantics without special-casing or
//! clamping. An infinite or NaN result signals a degenerate but well-defined
//! input, not a failure.

/// Per-period multiplier implied by a percent rate.
///
/// A rate of 100 doubles the value each period (factor 2.0), a rate of 200
/// triples it (factor 3.0), a rate of 0 leaves it unchanged (factor 1.0),
/// and a rate of -100 is a total loss (factor 0.0).
pub const fn change_factor(rate: f64) -> f64 {
    rate / 100.0 + 1.0
}

/// Percent change per period that carries `start` to `end` over `periods`.
///
/// Inverts the identity as `((end/start)^(1/periods) - 1) * 100`.
///
/// With zero periods the exponent is infinite and so is the result. A zero
/// `start` divides to an infinity, or to NaN when `end` is also zero. A zero
/// `end` against a nonzero `start` gives a factor of zero and a rate of
/// -100, whatever the period count.
pub fn rate_per_period(start: f64, end: f64, periods: f64) -> f64 {
    let change_total = end / start;
    let factor = change_total.powf(1.0 / periods);
    (factor - 1.0) * 100.0
}

/// Starting value implied by `end`, `periods`, and a percent `rate`.
///
/// A zero `end` divides to an infinity. A total-loss rate of -100 gives a
/// zero factor: any positive period count yields zero, while zero periods
/// raise the factor to the zeroth power (1 by convention) and yield `1/end`.
pub fn start_value(end: f64, periods: f64, rate: f64) -> f64 {
    change_factor(rate).powf(periods) / end
}

/// Ending value reached from `start` after `periods` at a percent `rate`.
///
/// A rate of -100 applied over one or more periods collapses the result to
/// zero: a fully realized total loss.
pub fn end_value(start: f64, periods: f64, rate: f64) -> f64 {
    change_factor(rate).powf(periods) * start
}

/// Periods needed to carry `start` to `end` at a percent `rate` per period.
///
/// Solves `end/start = factor^periods` by logarithm:
/// `ln(end/start) / ln(factor)`.
///
/// When `start` equals `end` the numerator is zero and no periods are
/// needed, whatever the rate. A zero rate makes the denominator zero: the
/// quotient is a signed infinity, or NaN when the numerator is zero as well
/// (nothing changed and no rate to change it at). A zero `start` pushes the
/// ratio to infinity (NaN when `end` is also zero) and the logarithm
/// carries it through.
pub fn period_count(start: f64, end: f64, rate: f64) -> f64 {
    let change_total = end / start;
    let factor = change_factor(rate);
    if change_total == 0.0 && factor == 0.0 {
        // Both logarithms are -inf and the raw quotient NaN, but a full
        // loss lands on zero after exactly one period.
        return 1.0;
    }
    change_total.ln() / factor.ln()
}
