//! Regulatory rule set.
//!
//! Every limit the duty simulator enforces lives in one immutable
//! [`HosRules`] value.  Alternate regimes are just different values; the
//! simulator contains no literals of its own.
//!
//! Times are stored in whole seconds and distances in metres so the struct
//! can be loaded from JSON by the application crate.  The `TimeDelta`
//! accessors are what the simulator actually consumes.

use chrono::TimeDelta;

use crate::units::miles_to_meters;
use crate::{HosError, HosResult};

const HOUR: i64 = 3_600;
const MINUTE: i64 = 60;

/// Hours-of-service limits for one regulatory regime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Maximum driving per shift.  Default: 11 h.
    pub max_drive_secs: i64,

    /// Maximum on-duty window per shift, after which driving stops.
    /// Default: 14 h.
    pub max_duty_secs: i64,

    /// Rolling cycle limit.  Default: 70 h.
    pub cycle_limit_secs: i64,

    /// Cumulative shift driving after which a break is due.  Default: 8 h.
    pub break_after_drive_secs: i64,

    /// Length of the mandatory break.  Default: 30 min.
    pub break_secs: i64,

    /// How close to `break_after_drive_secs` counts as "at" the mark.
    /// Default: 60 s.
    pub break_tolerance_secs: i64,

    /// Sleeper-berth reset that clears the shift counters.  Default: 10 h.
    pub shift_reset_secs: i64,

    /// Off-duty restart that clears the cycle.  Default: 34 h.
    pub cycle_restart_secs: i64,

    /// Distance between fuel stops, metres.  Default: 1000 mi.
    pub fuel_interval_m: f64,

    /// Length of a fuel stop.  Default: 30 min.
    pub fuel_stop_secs: i64,

    /// On-duty time spent loading at pickup.  Default: 1 h.
    pub pickup_secs: i64,

    /// On-duty time spent unloading at dropoff.  Default: 1 h.
    pub dropoff_secs: i64,

    /// Slack, in metres, for "arrived" and "fuel due" checks.  Default: 100 m.
    pub distance_tolerance_m: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self::property_70_hour()
    }
}

impl HosRules {
    /// Property-carrying driver on the 70-hour / 8-day cycle.
    pub fn property_70_hour() -> Self {
        Self {
            max_drive_secs:         11 * HOUR,
            max_duty_secs:          14 * HOUR,
            cycle_limit_secs:       70 * HOUR,
            break_after_drive_secs: 8 * HOUR,
            break_secs:             30 * MINUTE,
            break_tolerance_secs:   MINUTE,
            shift_reset_secs:       10 * HOUR,
            cycle_restart_secs:     34 * HOUR,
            fuel_interval_m:        miles_to_meters(1_000.0),
            fuel_stop_secs:         30 * MINUTE,
            pickup_secs:            HOUR,
            dropoff_secs:           HOUR,
            distance_tolerance_m:   100.0,
        }
    }

    /// Property-carrying driver on the 60-hour / 7-day cycle.  Identical to
    /// [`property_70_hour`](Self::property_70_hour) except for the cycle cap.
    pub fn property_60_hour() -> Self {
        Self {
            cycle_limit_secs: 60 * HOUR,
            ..Self::property_70_hour()
        }
    }

    /// Reject rule sets the simulator cannot make progress under.
    pub fn validate(&self) -> HosResult<()> {
        let positive_secs = [
            ("max_drive_secs",         self.max_drive_secs),
            ("max_duty_secs",          self.max_duty_secs),
            ("cycle_limit_secs",       self.cycle_limit_secs),
            ("break_after_drive_secs", self.break_after_drive_secs),
            ("break_secs",             self.break_secs),
            ("shift_reset_secs",       self.shift_reset_secs),
            ("cycle_restart_secs",     self.cycle_restart_secs),
        ];
        for (name, v) in positive_secs {
            if v <= 0 {
                return Err(HosError::Config(format!("{name} must be positive, got {v}")));
            }
        }

        let non_negative_secs = [
            ("break_tolerance_secs", self.break_tolerance_secs),
            ("fuel_stop_secs",       self.fuel_stop_secs),
            ("pickup_secs",          self.pickup_secs),
            ("dropoff_secs",         self.dropoff_secs),
        ];
        for (name, v) in non_negative_secs {
            if v < 0 {
                return Err(HosError::Config(format!("{name} must not be negative, got {v}")));
            }
        }

        if self.break_after_drive_secs >= self.max_drive_secs {
            return Err(HosError::Config(format!(
                "break_after_drive_secs ({}) must be below max_drive_secs ({})",
                self.break_after_drive_secs, self.max_drive_secs
            )));
        }
        if self.distance_tolerance_m.is_nan() || self.distance_tolerance_m < 0.0 {
            return Err(HosError::Config(format!(
                "distance_tolerance_m must not be negative, got {}",
                self.distance_tolerance_m
            )));
        }
        if self.fuel_interval_m.is_nan() || self.fuel_interval_m <= self.distance_tolerance_m {
            return Err(HosError::Config(format!(
                "fuel_interval_m ({}) must exceed distance_tolerance_m ({})",
                self.fuel_interval_m, self.distance_tolerance_m
            )));
        }
        Ok(())
    }

    // ── TimeDelta accessors ───────────────────────────────────────────────

    #[inline] pub fn max_drive(&self) -> TimeDelta { TimeDelta::seconds(self.max_drive_secs) }
    #[inline] pub fn max_duty(&self) -> TimeDelta { TimeDelta::seconds(self.max_duty_secs) }
    #[inline] pub fn cycle_limit(&self) -> TimeDelta { TimeDelta::seconds(self.cycle_limit_secs) }
    #[inline] pub fn break_after_drive(&self) -> TimeDelta { TimeDelta::seconds(self.break_after_drive_secs) }
    #[inline] pub fn break_duration(&self) -> TimeDelta { TimeDelta::seconds(self.break_secs) }
    #[inline] pub fn break_tolerance(&self) -> TimeDelta { TimeDelta::seconds(self.break_tolerance_secs) }
    #[inline] pub fn shift_reset(&self) -> TimeDelta { TimeDelta::seconds(self.shift_reset_secs) }
    #[inline] pub fn cycle_restart(&self) -> TimeDelta { TimeDelta::seconds(self.cycle_restart_secs) }
    #[inline] pub fn fuel_stop(&self) -> TimeDelta { TimeDelta::seconds(self.fuel_stop_secs) }
    #[inline] pub fn pickup(&self) -> TimeDelta { TimeDelta::seconds(self.pickup_secs) }
    #[inline] pub fn dropoff(&self) -> TimeDelta { TimeDelta::seconds(self.dropoff_secs) }
}
