//! The degree-minute-second triplet.
//!
//! None of the parts are checked against the conventional ranges,
//! so the triplet can hold whatever `deg_to_dms` produces
//! (e.g. all the parts negative for a negative angle).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{deg_to_dms, errors::DegreeNotRepresentable, sum_parts};

/// Sexagesimal angle: whole degrees, whole arc minutes and fractional arc seconds.
///
/// The whole parts are stored as integer-valued floats,
/// so that any finite angle can be represented.
///
/// [Read more](https://en.wikipedia.org/wiki/Minute_and_second_of_arc)
#[derive(Debug, PartialEq, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    /// Whole degrees
    pub degrees: f64,
    /// Whole arc minutes, conventionally in `0..60`
    pub minutes: f64,
    /// Arc seconds with the fraction, conventionally in `[0, 60)`
    pub seconds: f64,
}

impl Dms {
    /// Construct the triplet as is, without any validation
    pub const fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Decimal degrees `degrees + minutes/60 + seconds/3600`
    pub fn to_deg(self) -> f64 {
        sum_parts(self.degrees, self.minutes, self.seconds)
    }

    /// Split the decimal degrees into the triplet.
    ///
    /// # Errors
    /// Same as `deg_to_dms`.
    pub fn from_deg(deg: f64) -> Result<Self, DegreeNotRepresentable> {
        deg_to_dms(deg)
    }

    /// `(degrees, minutes, seconds)`
    pub const fn as_tuple(self) -> (f64, f64, f64) {
        (self.degrees, self.minutes, self.seconds)
    }
}

impl From<(f64, f64, f64)> for Dms {
    fn from(value: (f64, f64, f64)) -> Self {
        let (degrees, minutes, seconds) = value;
        Self::new(degrees, minutes, seconds)
    }
}

impl From<Dms> for (f64, f64, f64) {
    fn from(dms: Dms) -> Self {
        dms.as_tuple()
    }
}

impl From<Dms> for f64 {
    fn from(dms: Dms) -> Self {
        dms.to_deg()
    }
}

impl TryFrom<f64> for Dms {
    type Error = DegreeNotRepresentable;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_deg(value)
    }
}
