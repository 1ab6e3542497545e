use std::{error::Error, fmt};

use super::consts::DMS_PARTS;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Not enough parts to build a degree-minute-second triplet
pub struct DmsArityError {
    provided: usize,
}

impl DmsArityError {
    pub(crate) const fn new(provided: usize) -> Self {
        Self { provided }
    }

    /// How many parts were actually given
    pub const fn provided(&self) -> usize {
        self.provided
    }
}

impl fmt::Display for DmsArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DMS triplet requires {DMS_PARTS} parts, but {} provided",
            self.provided
        )
    }
}

impl Error for DmsArityError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The decimal degree cannot be split into the integer DMS parts
pub enum DegreeNotRepresentable {
    /// Not a number
    NaN,
    /// Positive or negative infinity
    Infinite,
}

impl fmt::Display for DegreeNotRepresentable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NaN => "cannot convert NaN to whole degrees",
            Self::Infinite => "cannot convert infinity to whole degrees",
        };

        write!(f, "{msg}")
    }
}

impl Error for DegreeNotRepresentable {}
