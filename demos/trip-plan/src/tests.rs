//! Tests for the trip-plan command line.

#[cfg(test)]
mod args_tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::{Args, DEFAULT_MPH, SAMPLE_REQUEST, load_request};

    #[test]
    fn defaults_plan_the_sample_at_55_mph() {
        let args = Args::try_parse_from(["trip-plan"]).unwrap();
        assert!(args.request.is_none());
        assert!(args.rules.is_none());
        assert_eq!(args.mph, DEFAULT_MPH);
        assert!(!args.summary);
    }

    #[test]
    fn flags_and_request_path_parse() {
        let args = Args::try_parse_from([
            "trip-plan", "trip.json", "--rules", "sixty.json", "--mph", "48.5", "--summary",
        ])
        .unwrap();
        assert_eq!(args.request, Some(PathBuf::from("trip.json")));
        assert_eq!(args.rules, Some(PathBuf::from("sixty.json")));
        assert_eq!(args.mph, 48.5);
        assert!(args.summary);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["trip-plan", "--fast"]).is_err());
    }

    #[test]
    fn bad_speed_is_rejected() {
        assert!(Args::try_parse_from(["trip-plan", "--mph", "quick"]).is_err());
    }

    #[test]
    fn sample_request_parses() {
        let req = load_request(None).unwrap();
        assert_eq!(req.cycle_used_hours, 20.0);
        assert!(SAMPLE_REQUEST.contains("cycleUsed"));
    }
}
