//! The change quadruple and the names of its four slots.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One slot of a [`Quadruple`].
///
/// Names which of the four tied quantities a value refers to. The solver
/// dispatches on the unknown slot's `Quantity` with an exhaustive `match`,
/// so the tag-to-inversion mapping is checked at compile time.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// The value before any change is applied.
    #[display("start")]
    Start,
    /// The value after all periods of change.
    #[display("end")]
    End,
    /// How many discrete compounding intervals the change spans.
    #[display("periods")]
    Periods,
    /// The percent change per period.
    #[display("rate")]
    Rate,
}

/// The four quantities tied by compound change, each either supplied or
/// left unknown.
///
/// `None` is the explicit unknown marker and `Some(0.0)` the ordinary
/// number zero; the two are never conflated. A complete computation
/// supplies exactly three slots and leaves one `None` for [`resolve`] to
/// derive.
///
/// The serialized form maps unknown slots to `null`:
/// `{"start":1.0,"end":8.0,"periods":null,"rate":100.0}` asks for the
/// period count.
///
/// [`resolve`]: crate::resolve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quadruple {
    /// Value before any change, if supplied.
    pub start: Option<f64>,
    /// Value after all periods of change, if supplied.
    pub end: Option<f64>,
    /// Number of compounding intervals, if supplied. Fractional period
    /// counts are algebraically valid.
    pub periods: Option<f64>,
    /// Percent change per period, if supplied. May be negative (decay) or
    /// exceed 100 (super-doubling).
    pub rate: Option<f64>,
}

impl Quadruple {
    /// Assemble a quadruple from its four slots.
    pub const fn new(
        start: Option<f64>,
        end: Option<f64>,
        periods: Option<f64>,
        rate: Option<f64>,
    ) -> Self {
        Self {
            start,
            end,
            periods,
            rate,
        }
    }

    /// The slots in declaration order, paired with their names.
    pub(crate) const fn slots(&self) -> [(Quantity, Option<f64>); 4] {
        [
            (Quantity::Start, self.start),
            (Quantity::End, self.end),
            (Quantity::Periods, self.periods),
            (Quantity::Rate, self.rate),
        ]
    }

    /// The slot this quadruple leaves unknown, when exactly one does.
    ///
    /// Returns `None` for a fully supplied quadruple and for one with two
    /// or more unknown slots; neither can be solved.
    pub fn solving_for(&self) -> Option<Quantity> {
        let mut unknown = None;
        for (quantity, value) in self.slots() {
            if value.is_none() {
                if unknown.is_some() {
                    return None;
                }
                unknown = Some(quantity);
            }
        }
        unknown
    }
}
