//! Unit conversions used when summarising a trip.

/// Metres in one statute mile, as used on the log sheets.
pub const METERS_PER_MILE: f64 = 1_609.34;

pub const SECS_PER_HOUR: f64 = 3_600.0;

#[inline]
pub fn meters_to_miles(m: f64) -> f64 {
    m / METERS_PER_MILE
}

#[inline]
pub fn miles_to_meters(mi: f64) -> f64 {
    mi * METERS_PER_MILE
}

#[inline]
pub fn secs_to_hours(secs: f64) -> f64 {
    secs / SECS_PER_HOUR
}

/// Round half away from zero to two decimal places.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
