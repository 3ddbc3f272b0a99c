use serde_json::Map;

use crate::aggregators::classification::{is_low_carbon, is_renewable};
use crate::aggregators::coercion::{coerce_or_zero, numeric_value};
use crate::grid_data::types::{DashboardData, EnrichedRecord, RawRecord};

/**
 * Single pass over the series:
 * - per record, walk the breakdown once accumulating total, renewable and low carbon output
 * - percentages are share of total, zero when the total is not positive
 * - the last record is the latest snapshot, order is taken as given
 * - average intensity uses the zero-coerced value of every record
 */
pub fn enrich(raw: &[RawRecord]) -> Option<DashboardData> {
    if raw.is_empty() {
        return None;
    }

    let chart_data: Vec<EnrichedRecord> = raw.iter().map(enrich_record).collect();

    let latest = chart_data.last()?.clone();
    let intensity_sum: f64 = chart_data.iter().map(|r| r.carbon_intensity).sum();
    let avg_intensity = round_half_up(intensity_sum / chart_data.len() as f64);

    Some(DashboardData {
        chart_data,
        latest,
        avg_intensity,
    })
}

/// Enriches one record, independent of its neighbours.
pub fn enrich_record(record: &RawRecord) -> EnrichedRecord {
    let mix = record.power_production_breakdown.clone().unwrap_or_else(Map::new);

    let mut total = 0.0;
    let mut renewable = 0.0;
    let mut low_carbon = 0.0;

    for (source, value) in &mix {
        let Some(output) = numeric_value(value) else {
            continue;
        };
        total += output;
        if is_renewable(source) {
            renewable += output;
        }
        if is_low_carbon(source) {
            low_carbon += output;
        }
    }

    EnrichedRecord {
        datetime: record.datetime.clone(),
        carbon_intensity: coerce_or_zero(record.carbon_intensity.as_ref()),
        total,
        renewable_pct: share_pct(renewable, total),
        carbon_free_pct: share_pct(low_carbon, total),
        mix,
    }
}

fn share_pct(part: f64, total: f64) -> f64 {
    if total.is_finite() && total > 0.0 { part / total * 100.0 } else { 0.0 }
}

// Halves round toward positive infinity, matching the dashboard's rounding.
fn round_half_up(value: f64) -> i64 {
    if value.is_finite() { (value + 0.5).floor() as i64 } else { 0 }
}
