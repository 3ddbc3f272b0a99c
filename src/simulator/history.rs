use chrono::{DateTime, Datelike, Duration, Months, SecondsFormat, Utc};
use rand::Rng;
use serde_json::{Map, Value, json};

use crate::grid_data::types::{RawRecord, TimeRange};
use crate::simulator::config::{OutputBand, SimulatorConfig};

/// Number of steps back from `now`: days for 1Y, months for 5Y.
pub fn sample_steps(range: TimeRange) -> u32 {
    match range {
        TimeRange::OneYear => 365,
        TimeRange::FiveYears => 60,
    }
}

/// Synthetic history with the default profile.
pub fn generate_mock_history<R: Rng + ?Sized>(
    range: TimeRange,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<RawRecord> {
    generate_with_config(&SimulatorConfig::default(), range, now, rng)
}

/// Synthetic history shaped exactly like the provider's records, oldest
/// first and ending at `now`.
pub fn generate_with_config<R: Rng + ?Sized>(
    config: &SimulatorConfig,
    range: TimeRange,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<RawRecord> {
    let steps = sample_steps(range);

    (0..=steps)
        .rev()
        .filter_map(|offset| step_back(range, now, offset))
        .map(|date| simulate_point(config, date, rng))
        .collect()
}

fn step_back(range: TimeRange, now: DateTime<Utc>, offset: u32) -> Option<DateTime<Utc>> {
    match range {
        TimeRange::OneYear => now.checked_sub_signed(Duration::days(offset as i64)),
        TimeRange::FiveYears => now.checked_sub_months(Months::new(offset)),
    }
}

fn sample<R: Rng + ?Sized>(band: OutputBand, rng: &mut R) -> f64 {
    if band.spread > 0.0 {
        band.base + rng.gen_range(0.0..1.0) * band.spread
    } else {
        band.base
    }
}

fn simulate_point<R: Rng + ?Sized>(config: &SimulatorConfig, date: DateTime<Utc>, rng: &mut R) -> RawRecord {
    let monsoon = config.is_monsoon(date.month0());
    let seasonal = |bands: (OutputBand, OutputBand)| if monsoon { bands.1 } else { bands.0 };

    let coal = sample(config.coal, rng);
    let solar = sample(seasonal(config.solar), rng);
    let wind = sample(seasonal(config.wind), rng);
    let hydro = sample(seasonal(config.hydro), rng);
    let nuclear = sample(config.nuclear, rng);
    let gas = sample(config.gas, rng);
    let unknown = sample(config.unknown, rng);

    let total = coal + solar + wind + hydro + nuclear + gas + unknown;
    let emissions = coal * config.emissions.coal + gas * config.emissions.gas + unknown * config.emissions.unknown;
    let intensity = if total > 0.0 { (emissions / total).round() as i64 } else { 0 };

    let mut mix = Map::new();
    for (source, output) in [
        ("coal", coal),
        ("solar", solar),
        ("wind", wind),
        ("hydro", hydro),
        ("nuclear", nuclear),
        ("gas", gas),
        ("unknown", unknown),
    ] {
        mix.insert(source.to_string(), json!(output));
    }

    RawRecord {
        datetime: date.to_rfc3339_opts(SecondsFormat::Millis, true),
        carbon_intensity: Some(Value::from(intensity)),
        power_production_breakdown: Some(mix),
    }
}
