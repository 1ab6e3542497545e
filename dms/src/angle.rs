//! Conversions between sexagesimal (DMS) and decimal representations of an angle.
//!
//! Neither the ranges nor the signs are validated:
//! the arithmetic is applied to whatever numbers are given.

use num_traits::AsPrimitive;
use tracing::debug;

mod consts;
pub mod dms;
pub mod errors;

use self::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE},
    dms::Dms,
    errors::{DegreeNotRepresentable, DmsArityError},
};

/// `degrees + minutes/60 + seconds/3600`
pub(crate) fn sum_parts(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / f64::from(MINUTES_IN_DEGREE) + seconds / f64::from(SECONDS_IN_DEGREE)
}

/// Convert the degree-minute-second triplet into decimal degrees.
///
/// Only the first three parts are used, the rest are ignored.
/// Any primitive number can be a part:
///
/// ```
/// use geo_dms::dms_to_deg;
///
/// assert_eq!(dms_to_deg(&[10, 30, 0]).unwrap(), 10.5);
/// let deg = dms_to_deg(&[10.0, 30.0, 36.0]).unwrap();
/// assert!((deg - 10.51).abs() < 1e-12);
/// ```
///
/// # Errors
/// When less than three parts provided, the `DmsArityError` returned.
pub fn dms_to_deg<T>(dms: &[T]) -> Result<f64, DmsArityError>
where
    T: AsPrimitive<f64>,
{
    if let [degrees, minutes, seconds, ..] = *dms {
        Ok(sum_parts(degrees.as_(), minutes.as_(), seconds.as_()))
    } else {
        debug!(parts = dms.len(), "DMS triplet is too short");
        Err(DmsArityError::new(dms.len()))
    }
}

/// Split decimal degrees into the degree-minute-second triplet.
///
/// The whole degrees and minutes are truncated toward zero, so that
/// the negative angle gets all its parts negative:
///
/// ```
/// use geo_dms::{deg_to_dms, Dms};
///
/// assert_eq!(deg_to_dms(-10.5).unwrap(), Dms::new(-10.0, -30.0, 0.0));
/// ```
///
/// Any finite value can be split, however large.
///
/// # Errors
/// When the value is NaN or infinite, the `DegreeNotRepresentable` returned.
pub fn deg_to_dms(deg: f64) -> Result<Dms, DegreeNotRepresentable> {
    if deg.is_nan() {
        debug!("NaN cannot be split into DMS");
        return Err(DegreeNotRepresentable::NaN);
    }
    if deg.is_infinite() {
        debug!(deg, "infinity cannot be split into DMS");
        return Err(DegreeNotRepresentable::Infinite);
    }

    let degrees = deg.trunc();

    let min_in_deg = f64::from(MINUTES_IN_DEGREE);
    let minutes = ((deg - degrees) * min_in_deg).trunc();

    let seconds = (deg - degrees - minutes / min_in_deg) * f64::from(SECONDS_IN_DEGREE);

    Ok(Dms::new(degrees, minutes, seconds))
}
