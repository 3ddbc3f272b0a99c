use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Months, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One observation as delivered by the data provider (or the simulator).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub datetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_intensity: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient_breakdown",
        skip_serializing_if = "Option::is_none"
    )]
    pub power_production_breakdown: Option<Map<String, Value>>,
}

// A timestamp that is not a string becomes empty; the rest of the record
// still counts.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

// A breakdown that is not a JSON object is treated as missing rather than
// rejecting the whole record.
fn lenient_breakdown<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}

/// A [`RawRecord`] plus the derived totals and percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub datetime: String,
    pub carbon_intensity: f64,
    pub total: f64,
    pub renewable_pct: f64,
    pub carbon_free_pct: f64,
    /// Original breakdown entries, untouched (malformed values included).
    pub mix: Map<String, Value>,
}

impl EnrichedRecord {
    pub const DERIVED_KEYS: [&'static str; 5] =
        ["datetime", "carbonIntensity", "total", "renewablePct", "carbonFreePct"];

    /// Reads a source from the mix as a number, if it is one.
    pub fn source_value(&self, source: &str) -> Option<f64> {
        self.mix.get(source).and_then(crate::aggregators::numeric_value)
    }
}

// Mix entries are written flat next to the derived fields so a chart can
// address every source by key. Derived fields take precedence on a clash.
impl Serialize for EnrichedRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("datetime", &self.datetime)?;
        map.serialize_entry("carbonIntensity", &self.carbon_intensity)?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry("renewablePct", &self.renewable_pct)?;
        map.serialize_entry("carbonFreePct", &self.carbon_free_pct)?;
        for (key, value) in &self.mix {
            if Self::DERIVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Enriched series plus the summary the dashboard header shows.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub chart_data: Vec<EnrichedRecord>,
    pub latest: EnrichedRecord,
    pub avg_intensity: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// Past 365 days, one point per day
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    /// Past five years, one point per month
    #[serde(rename = "5Y")]
    FiveYears,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneYear => "1Y",
            TimeRange::FiveYears => "5Y",
        }
    }

    /// Start of the window ending at `now`.
    pub fn start_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months = match self {
            TimeRange::OneYear => 12,
            TimeRange::FiveYears => 60,
        };
        now.checked_sub_months(Months::new(months)).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1Y" => Ok(TimeRange::OneYear),
            "5Y" => Ok(TimeRange::FiveYears),
            other => Err(anyhow!("Invalid range '{}'. Expected: 1Y or 5Y", other)),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    #[default]
    #[serde(rename = "mock")]
    Mock,
    #[serde(rename = "live")]
    Live,
}

impl DataSourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DataSourceKind::Mock => "mock",
            DataSourceKind::Live => "live",
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(DataSourceKind::Mock),
            "live" => Ok(DataSourceKind::Live),
            other => Err(anyhow!("Invalid source '{}'. Expected: mock or live", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_raw_record_from_provider_shape() {
        let record: RawRecord = serde_json::from_value(json!({
            "datetime": "2024-01-01T00:00:00.000Z",
            "carbonIntensity": 640,
            "powerProductionBreakdown": { "coal": 100, "solar": null },
            "zone": "IN"
        }))
        .unwrap();

        assert_eq!(record.datetime, "2024-01-01T00:00:00.000Z");
        assert_eq!(record.carbon_intensity, Some(json!(640)));
        let mix = record.power_production_breakdown.unwrap();
        assert_eq!(mix.len(), 2);
        assert_eq!(mix["solar"], Value::Null);
    }

    #[test]
    fn test_raw_record_tolerates_missing_and_malformed_fields() {
        let record: RawRecord = serde_json::from_value(json!({
            "powerProductionBreakdown": "not a map"
        }))
        .unwrap();

        assert_eq!(record.datetime, "");
        assert!(record.carbon_intensity.is_none());
        assert!(record.power_production_breakdown.is_none());

        let record: RawRecord = serde_json::from_value(json!({
            "datetime": 20240101,
            "carbonIntensity": 100
        }))
        .unwrap();
        assert_eq!(record.datetime, "");
        assert_eq!(record.carbon_intensity, Some(json!(100)));
        assert!(record.power_production_breakdown.is_none());
    }

    #[test]
    fn test_enriched_record_serializes_flat() {
        let mut mix = Map::new();
        mix.insert("coal".to_string(), json!(100));
        mix.insert("total".to_string(), json!(-1));
        mix.insert("oil".to_string(), json!("bad"));

        let record = EnrichedRecord {
            datetime: "2024-01-01T00:00:00Z".to_string(),
            carbon_intensity: 400.0,
            total: 100.0,
            renewable_pct: 0.0,
            carbon_free_pct: 0.0,
            mix,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["datetime"], "2024-01-01T00:00:00Z");
        assert_eq!(value["carbonIntensity"], 400.0);
        assert_eq!(value["total"], 100.0);
        assert_eq!(value["coal"], 100);
        assert_eq!(value["oil"], "bad");
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_time_range_parse() {
        assert_eq!("1Y".parse::<TimeRange>().unwrap(), TimeRange::OneYear);
        assert_eq!("5y".parse::<TimeRange>().unwrap(), TimeRange::FiveYears);
        assert!("10Y".parse::<TimeRange>().is_err());
        assert_eq!(serde_json::to_value(TimeRange::FiveYears).unwrap(), json!("5Y"));
    }

    #[test]
    fn test_time_range_start() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(
            TimeRange::OneYear.start_from(now),
            Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
        );
        assert_eq!(
            TimeRange::FiveYears.start_from(now),
            Utc.with_ymd_and_hms(2019, 6, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!("MOCK".parse::<DataSourceKind>().unwrap(), DataSourceKind::Mock);
        assert_eq!("live".parse::<DataSourceKind>().unwrap(), DataSourceKind::Live);
        assert!("cache".parse::<DataSourceKind>().is_err());
    }
}
