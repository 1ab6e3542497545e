pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;
pub(crate) const SECONDS_IN_DEGREE: u16 = MINUTES_IN_DEGREE as u16 * SECONDS_IN_MINUTE as u16;

/// Degrees, minutes and seconds
pub(crate) const DMS_PARTS: usize = 3;
