//! Unit tests for hos-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(41.878, -87.630);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn lng_lat_order() {
        let p = GeoPoint::from_lng_lat([-87.63, 41.88]);
        assert_eq!(p.lat, 41.88);
        assert_eq!(p.lon, -87.63);
        assert_eq!(p.to_lng_lat(), [-87.63, 41.88]);
    }

    #[test]
    fn same_place_tolerance() {
        let a = GeoPoint::new(41.87800, -87.63000);
        let near = GeoPoint::new(41.87805, -87.63005);
        let far = GeoPoint::new(41.87900, -87.63000);
        assert!(a.same_place(near, 0.0001));
        assert!(!a.same_place(far, 0.0001));
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use crate::time::{delta_secs, midnight, secs_to_delta};
    use crate::Span;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn secs_round_up_to_millis() {
        assert_eq!(secs_to_delta(1.0001), TimeDelta::milliseconds(1_001));
        assert_eq!(secs_to_delta(2.0), TimeDelta::seconds(2));
        assert_eq!(secs_to_delta(-5.0), TimeDelta::zero());
        assert_eq!(secs_to_delta(f64::NAN), TimeDelta::zero());
        assert_eq!(delta_secs(TimeDelta::milliseconds(1_500)), 1.5);
    }

    #[test]
    fn midnight_of_day() {
        assert_eq!(midnight(at(4, 17, 42)), at(4, 0, 0));
    }

    #[test]
    fn span_intersection() {
        let day = Span::day_of(at(4, 9, 0));
        assert_eq!(day, Span::new(at(4, 0, 0), at(5, 0, 0)));

        let ev = Span::new(at(4, 22, 0), at(5, 3, 0));
        assert_eq!(day.intersect(&ev), Some(Span::new(at(4, 22, 0), at(5, 0, 0))));

        // Touching at the boundary is not an overlap.
        let next = Span::new(at(5, 0, 0), at(5, 1, 0));
        assert_eq!(day.intersect(&next), None);
    }

    #[test]
    fn span_contains_is_half_open() {
        let day = Span::day_of(at(4, 0, 0));
        assert!(day.contains(at(4, 0, 0)));
        assert!(day.contains(at(4, 23, 59)));
        assert!(!day.contains(at(5, 0, 0)));
    }
}

#[cfg(test)]
mod units {
    use crate::units::{meters_to_miles, round2};

    #[test]
    fn miles() {
        assert!((meters_to_miles(1_609.34) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(9.0909), 9.09);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.0), 0.0);
    }
}

#[cfg(test)]
mod status {
    use crate::DutyStatus;

    #[test]
    fn on_duty_lines() {
        assert!(DutyStatus::Driving.is_on_duty());
        assert!(DutyStatus::OnDuty.is_on_duty());
        assert!(!DutyStatus::OffDuty.is_on_duty());
        assert!(!DutyStatus::Sleeper.is_on_duty());
    }

    #[test]
    fn labels() {
        assert_eq!(DutyStatus::OffDuty.to_string(), "OFF_DUTY");
        assert_eq!(DutyStatus::OnDuty.as_str(), "ON_DUTY");
    }
}

#[cfg(test)]
mod rules {
    use chrono::TimeDelta;

    use crate::{HosError, HosRules};

    #[test]
    fn default_is_seventy_hour() {
        let r = HosRules::default();
        assert_eq!(r, HosRules::property_70_hour());
        assert_eq!(r.max_drive(), TimeDelta::hours(11));
        assert_eq!(r.max_duty(), TimeDelta::hours(14));
        assert_eq!(r.cycle_limit(), TimeDelta::hours(70));
        assert_eq!(r.break_after_drive(), TimeDelta::hours(8));
        assert_eq!(r.break_duration(), TimeDelta::minutes(30));
        assert_eq!(r.shift_reset(), TimeDelta::hours(10));
        assert_eq!(r.cycle_restart(), TimeDelta::hours(34));
        assert!((r.fuel_interval_m - 1_609_340.0).abs() < 1e-6);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn sixty_hour_differs_only_in_cycle() {
        let sixty = HosRules::property_60_hour();
        assert_eq!(sixty.cycle_limit(), TimeDelta::hours(60));
        assert_eq!(
            HosRules { cycle_limit_secs: 70 * 3_600, ..sixty.clone() },
            HosRules::property_70_hour()
        );
        assert!(sixty.validate().is_ok());
    }

    #[test]
    fn zero_drive_limit_rejected() {
        let r = HosRules { max_drive_secs: 0, ..HosRules::default() };
        assert!(matches!(r.validate(), Err(HosError::Config(_))));
    }

    #[test]
    fn break_beyond_drive_limit_rejected() {
        let r = HosRules { break_after_drive_secs: 12 * 3_600, ..HosRules::default() };
        assert!(r.validate().is_err());
    }

    #[test]
    fn fuel_interval_inside_tolerance_rejected() {
        let r = HosRules { fuel_interval_m: 50.0, ..HosRules::default() };
        assert!(r.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let json = serde_json::to_string(&HosRules::property_60_hour()).unwrap();
        let back: HosRules = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cycle_limit_secs, 60 * 3_600);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let back: HosRules = serde_json::from_str(r#"{"cycle_limit_secs": 216000}"#).unwrap();
        assert_eq!(back, HosRules::property_60_hour());
    }
}
