//! Tests for hos-logs: day slicing, summaries, stop placement, wire shape.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use hos_core::units::{meters_to_miles, miles_to_meters, round2};
use hos_core::DutyStatus;
use hos_route::RouteGeometry;
use hos_sim::{DutyEvent, SimBuilder, Stop, StopKind, Timeline, TripTotals};

use crate::{bucketize, DailyLog};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap().and_hms_opt(h, m, 0).unwrap()
}

fn event(status: DutyStatus, start: NaiveDateTime, end: NaiveDateTime, start_m: f64, end_m: f64) -> DutyEvent {
    DutyEvent { status, start, end, start_m, end_m }
}

fn simulate(miles: f64, mph: f64) -> Timeline {
    let trip = TripTotals::new(miles_to_meters(miles), miles / mph * 3_600.0, 0.0, at(4, 6, 0));
    SimBuilder::new().build().unwrap().simulate(&trip).unwrap()
}

fn logs_for(t: &Timeline) -> Vec<DailyLog> {
    bucketize(&t.events, &t.stops, &RouteGeometry::empty())
}

// ── Day slicing ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod slicing_tests {
    use super::*;

    #[test]
    fn empty_timeline_has_no_days() {
        assert!(bucketize(&[], &[], &RouteGeometry::empty()).is_empty());
    }

    #[test]
    fn zero_distance_trip_fits_one_day() {
        let logs = logs_for(&simulate(0.0, 55.0));
        assert_eq!(logs.len(), 1);

        let day = &logs[0];
        assert_eq!(day.day_no, 1);
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(day.summary.drive_hours, 0.0);
        assert_eq!(day.summary.on_duty_hours, 2.0);
        assert_eq!(day.summary.distance_miles, 0.0);
        assert_eq!(day.stops.iter().map(|s| s.kind).collect::<Vec<_>>(), [StopKind::Pickup, StopKind::Dropoff]);
    }

    #[test]
    fn event_across_midnight_is_split() {
        let events = [event(DutyStatus::Driving, at(4, 22, 0), at(5, 2, 0), 0.0, 400_000.0)];
        let logs = bucketize(&events, &[], &RouteGeometry::empty());
        assert_eq!(logs.len(), 2);

        let first = &logs[0].grid_events;
        assert_eq!(first.len(), 1);
        assert_eq!((first[0].start, first[0].end), (at(4, 22, 0), at(5, 0, 0)));
        assert_eq!(first[0].duration_seconds, 7_200.0);

        let second = &logs[1].grid_events;
        assert_eq!((second[0].start, second[0].end), (at(5, 0, 0), at(5, 2, 0)));

        let half = round2(meters_to_miles(200_000.0));
        for log in &logs {
            assert_eq!(log.summary.drive_hours, 2.0);
            assert_eq!(log.summary.on_duty_hours, 2.0);
            assert_eq!(log.summary.distance_miles, half);
        }
        assert_eq!(logs[1].day_no, 2);
        assert_eq!(logs[1].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn trip_ending_at_midnight_adds_no_empty_day() {
        let events = [event(DutyStatus::OnDuty, at(4, 20, 0), at(5, 0, 0), 0.0, 0.0)];
        let logs = bucketize(&events, &[], &RouteGeometry::empty());
        assert_eq!(logs.len(), 1);
    }

    #[test]
    fn zero_length_event_adds_no_distance() {
        let events = [
            event(DutyStatus::OnDuty, at(4, 8, 0), at(4, 8, 0), 0.0, 50.0),
            event(DutyStatus::OffDuty, at(4, 8, 0), at(4, 9, 0), 50.0, 50.0),
        ];
        let logs = bucketize(&events, &[], &RouteGeometry::empty());
        assert_eq!(logs[0].grid_events.len(), 1);
        assert_eq!(logs[0].summary.distance_miles, 0.0);
        assert_eq!(logs[0].summary.on_duty_hours, 0.0);
    }

    #[test]
    fn sleeper_and_off_duty_are_not_on_duty() {
        let events = [
            event(DutyStatus::Sleeper, at(4, 0, 0), at(4, 10, 0), 0.0, 0.0),
            event(DutyStatus::OffDuty, at(4, 10, 0), at(4, 12, 0), 0.0, 0.0),
            event(DutyStatus::OnDuty, at(4, 12, 0), at(4, 13, 0), 0.0, 0.0),
        ];
        let logs = bucketize(&events, &[], &RouteGeometry::empty());
        assert_eq!(logs[0].summary.on_duty_hours, 1.0);
        assert_eq!(logs[0].summary.drive_hours, 0.0);
    }
}

// ── Whole-trip properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod conservation_tests {
    use super::*;

    #[test]
    fn durations_are_conserved() {
        let t = simulate(2_500.0, 50.0);
        let logs = logs_for(&t);
        let covered: f64 = logs.iter().map(DailyLog::covered_seconds).sum();
        let elapsed = t.elapsed().num_milliseconds() as f64 / 1_000.0;
        assert!((covered - elapsed).abs() < 1e-3, "{covered} vs {elapsed}");
    }

    #[test]
    fn distances_add_up() {
        let t = simulate(2_500.0, 50.0);
        let logs = logs_for(&t);
        let miles: f64 = logs.iter().map(|l| l.summary.distance_miles).sum();
        let tol = 0.01 * logs.len() as f64;
        assert!((miles - meters_to_miles(t.distance_m())).abs() <= tol, "{miles}");
    }

    #[test]
    fn days_are_consecutive() {
        let logs = logs_for(&simulate(2_500.0, 50.0));
        assert!(logs.len() >= 4);
        for (i, pair) in logs.windows(2).enumerate() {
            assert_eq!(pair[0].day_no as usize, i + 1);
            assert_eq!(pair[1].date - pair[0].date, TimeDelta::days(1));
        }
    }

    #[test]
    fn every_stop_lands_on_exactly_one_day() {
        let t = simulate(2_500.0, 50.0);
        let logs = logs_for(&t);
        let placed: usize = logs.iter().map(|l| l.stops.len()).sum();
        assert_eq!(placed, t.stops.len());
    }

    #[test]
    fn middle_days_cover_twenty_four_hours() {
        let logs = logs_for(&simulate(2_500.0, 50.0));
        for log in &logs[1..logs.len() - 1] {
            let total: f64 = log.hours_by_status().iter().map(|(_, h)| h).sum();
            assert!((total - 24.0).abs() < 0.05, "day {} has {total}h", log.day_no);
        }
    }
}

// ── Stops ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_tests {
    use super::*;

    fn two_day_events() -> Vec<DutyEvent> {
        vec![event(DutyStatus::OffDuty, at(4, 20, 0), at(5, 4, 0), 0.0, 0.0)]
    }

    #[test]
    fn stop_at_midnight_belongs_to_next_day() {
        let stops = [Stop { kind: StopKind::Fuel, at: at(5, 0, 0), distance_m: 0.0 }];
        let logs = bucketize(&two_day_events(), &stops, &RouteGeometry::empty());
        assert!(logs[0].stops.is_empty());
        assert_eq!(logs[1].stops.len(), 1);
    }

    #[test]
    fn coordinates_come_from_geometry() {
        let geometry = RouteGeometry::from_lng_lat(&[[0.0, 0.0], [0.0, 1.0]]);
        let stops = [Stop { kind: StopKind::Pickup, at: at(4, 21, 0), distance_m: 0.0 }];
        let logs = bucketize(&two_day_events(), &stops, &geometry);

        let coord = logs[0].stops[0].coord.unwrap();
        assert_eq!((coord.lat, coord.lon), (1.0, 0.0));
    }

    #[test]
    fn no_geometry_leaves_coordinates_empty() {
        let t = simulate(500.0, 55.0);
        assert!(logs_for(&t).iter().flat_map(|l| &l.stops).all(|s| s.coord.is_none()));
    }
}

// ── Wire shape ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn daily_log_serializes_to_log_sheet_shape() {
        let logs = logs_for(&simulate(0.0, 55.0));
        let v = serde_json::to_value(&logs[0]).unwrap();

        assert_eq!(v["day_no"], 1);
        assert_eq!(v["date"], "2024-03-04");

        let grid = &v["grid_events"][0];
        assert_eq!(grid["status"], "ON_DUTY");
        assert_eq!(grid["start"], "2024-03-04T06:00:00");
        assert_eq!(grid["end"], "2024-03-04T07:00:00");
        assert_eq!(grid["duration_seconds"], 3_600.0);

        let stop = &v["stops"][0];
        assert_eq!(stop["type"], "Pickup");
        assert_eq!(stop["time"], "06:00");
        assert!(stop["coord"].is_null());

        assert_eq!(v["summary"]["on_duty_hours"], 2.0);
        assert_eq!(v["summary"]["drive_hours"], 0.0);
        assert_eq!(v["summary"]["distance_miles"], 0.0);
    }

    #[test]
    fn resolved_coordinate_uses_lat_lng() {
        let geometry = RouteGeometry::from_lng_lat(&[[-87.6, 41.9], [-90.2, 38.6]]);
        let stops = [Stop { kind: StopKind::Rest10, at: at(4, 9, 5), distance_m: 1.0 }];
        let events = [event(DutyStatus::Sleeper, at(4, 9, 5), at(4, 19, 5), 0.0, 0.0)];
        let logs = bucketize(&events, &stops, &geometry);

        let v = serde_json::to_value(&logs[0].stops[0]).unwrap();
        assert_eq!(v["type"], "Rest (10h)");
        assert_eq!(v["time"], "09:05");
        assert_eq!(v["coord"]["lat"], 38.6);
        assert_eq!(v["coord"]["lng"], -90.2);
    }
}
