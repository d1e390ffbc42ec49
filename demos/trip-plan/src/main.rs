//! trip-plan — plan a truck trip and print its daily duty logs.
//!
//! ```text
//! trip-plan [REQUEST.json] [--rules RULES.json] [--mph N] [--summary]
//! ```
//!
//! Without a request file a built-in Chicago → St. Louis → Dallas trip is
//! planned.  Routing is straight-line at `--mph` (default 55), so no network
//! access is needed.  The plan is printed as JSON; `--summary` prints a
//! per-day table instead.  Set `RUST_LOG=debug` to watch the simulator.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hos_core::{DutyStatus, HosRules};
use hos_plan::{TripPlan, TripRequest, plan_trip};
use hos_route::StraightLineProvider;

#[cfg(test)]
mod tests;

const DEFAULT_MPH: f64 = 55.0;

const SAMPLE_REQUEST: &str = r#"{
    "current":   {"lat": 41.8781, "lng": -87.6298},
    "pickup":    {"lat": 38.6270, "lng": -90.1994},
    "dropoff":   {"lat": 32.7767, "lng": -96.7970},
    "cycleUsed": 20.0
}"#;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "trip-plan",
    version,
    about = "Plan a truck trip and print its daily hours-of-service logs"
)]
struct Args {
    /// Trip request JSON (current, pickup, dropoff, cycleUsed, startTime).
    /// Plans a built-in sample trip when omitted.
    request: Option<PathBuf>,

    /// Rules JSON; limits it leaves out keep their 70-hour defaults
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Straight-line routing speed, miles per hour
    #[arg(long, default_value_t = DEFAULT_MPH)]
    mph: f64,

    /// Print a per-day table instead of the plan JSON
    #[arg(long)]
    summary: bool,
}

fn load_request(path: Option<&PathBuf>) -> Result<TripRequest> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => SAMPLE_REQUEST.to_owned(),
    };
    serde_json::from_str(&text).context("parsing trip request")
}

fn load_rules(path: Option<&PathBuf>) -> Result<HosRules> {
    let Some(p) = path else {
        return Ok(HosRules::default());
    };
    let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
    serde_json::from_str(&text).context("parsing rules")
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_summary(plan: &TripPlan) {
    println!(
        "Route: {:.2} mi  |  {:.2} h driving  |  {} day(s)",
        plan.route_map.distance_miles,
        plan.route_map.duration_hours,
        plan.eld_logs.len()
    );
    println!();
    println!(
        "{:<4} {:<11} {:>7} {:>7} {:>7} {:>7} {:>9}  Stops",
        "Day", "Date", "Off", "Sleep", "Drive", "OnDuty", "Miles"
    );
    println!("{}", "-".repeat(72));
    for log in &plan.eld_logs {
        let hours = log.hours_by_status();
        let h = |s: DutyStatus| hours.iter().find(|(st, _)| *st == s).map_or(0.0, |(_, h)| *h);
        let stops: Vec<String> = log
            .stops
            .iter()
            .map(|s| format!("{} {}", s.time.format("%H:%M"), s.kind))
            .collect();
        println!(
            "{:<4} {:<11} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>9.2}  {}",
            log.day_no,
            log.date,
            h(DutyStatus::OffDuty),
            h(DutyStatus::Sleeper),
            h(DutyStatus::Driving),
            h(DutyStatus::OnDuty),
            log.summary.distance_miles,
            stops.join(", ")
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let request = load_request(args.request.as_ref())?;
    let rules = load_rules(args.rules.as_ref())?;
    let provider = StraightLineProvider::from_mph(args.mph);

    let t0 = Instant::now();
    let plan = plan_trip(&provider, &rules, &request)?;
    info!(elapsed_ms = t0.elapsed().as_secs_f64() * 1e3, days = plan.eld_logs.len(), "trip planned");

    if args.summary {
        print_summary(&plan);
    } else {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}
