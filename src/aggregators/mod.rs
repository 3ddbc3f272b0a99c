pub mod classification;
pub mod coercion;
pub mod enrich;

// Re-export commonly used items
pub use classification::{CARBON_FREE_KEYS, RENEWABLE_KEYS, STACK_ORDER, is_low_carbon, is_renewable, source_color};
pub use coercion::{coerce_or_zero, numeric_value};
pub use enrich::{enrich, enrich_record};
