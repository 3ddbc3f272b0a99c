use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

/// Sources counted as renewable generation.
pub const RENEWABLE_KEYS: [&str; 5] = ["solar", "wind", "geothermal", "hydro", "biomass"];

/// Sources counted as low-carbon generation (renewables plus nuclear).
pub const CARBON_FREE_KEYS: [&str; 6] = ["solar", "wind", "geothermal", "hydro", "biomass", "nuclear"];

/// Stacking order for the generation mix chart, dirtiest first so the
/// cleanest sources end up on top.
pub const STACK_ORDER: [&str; 7] = ["coal", "gas", "unknown", "hydro", "nuclear", "wind", "solar"];

/// Colour used for sources that have no entry in the palette.
pub const FALLBACK_COLOR: &str = "#666";

static RENEWABLE: Lazy<HashSet<&'static str>> = Lazy::new(|| RENEWABLE_KEYS.into_iter().collect());

static LOW_CARBON: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CARBON_FREE_KEYS.into_iter().collect());

// Electricity Maps palette, kept in display order.
const PALETTE: [(&str, &str); 11] = [
    ("solar", "#f4c320"),
    ("wind", "#80b8ce"),
    ("hydro", "#4976a9"),
    ("nuclear", "#6aa84f"),
    ("biomass", "#166a57"),
    ("geothermal", "#9e1d1d"),
    ("coal", "#ac8c35"),
    ("gas", "#b4b4b4"),
    ("oil", "#856857"),
    ("unknown", "#cccccc"),
    ("battery_discharge", "#f0f0f0"),
];

static COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| PALETTE.into_iter().collect());

pub fn is_renewable(source: &str) -> bool {
    RENEWABLE.contains(source)
}

pub fn is_low_carbon(source: &str) -> bool {
    LOW_CARBON.contains(source)
}

pub fn source_color(source: &str) -> &'static str {
    COLORS.get(source).copied().unwrap_or(FALLBACK_COLOR)
}

/// Display label for a source key: first character upper-cased.
pub fn source_label(source: &str) -> String {
    let mut chars = source.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub key: &'static str,
    pub label: String,
    pub color: &'static str,
    pub renewable: bool,
    pub low_carbon: bool,
    /// Position in [`STACK_ORDER`], if the source is part of the stacked chart
    pub stack_index: Option<usize>,
}

/// Every source the palette knows about, in palette order.
pub fn source_catalog() -> Vec<SourceInfo> {
    PALETTE
        .iter()
        .map(|&(key, color)| SourceInfo {
            key,
            label: source_label(key),
            color,
            renewable: is_renewable(key),
            low_carbon: is_low_carbon(key),
            stack_index: STACK_ORDER.iter().position(|s| *s == key),
        })
        .collect()
}
