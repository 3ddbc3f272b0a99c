use serde::{Deserialize, Serialize};

/// Output range for one source: `base + r * spread`, r in [0, 1)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OutputBand {
    pub base: f64,
    pub spread: f64,
}

impl OutputBand {
    pub const fn fixed(base: f64) -> Self {
        Self { base, spread: 0.0 }
    }

    pub const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }
}

/// Seasonal generation profile used by the mock history generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatorConfig {
    /// Zero-based months (0 = January) treated as monsoon season
    pub monsoon_months: (u32, u32),

    pub coal: OutputBand,
    pub gas: OutputBand,
    pub nuclear: OutputBand,
    pub unknown: OutputBand,

    /// Seasonal sources, as (dry season, monsoon)
    pub solar: (OutputBand, OutputBand),
    pub wind: (OutputBand, OutputBand),
    pub hydro: (OutputBand, OutputBand),

    /// Emission factors in gCO2eq/kWh; every other source is taken as zero
    pub emissions: EmissionFactors,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmissionFactors {
    pub coal: f64,
    pub gas: f64,
    pub unknown: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        // Coal-heavy grid, solar peaking before the June–September monsoon.
        Self {
            monsoon_months: (5, 8),
            coal: OutputBand::new(120_000.0, 20_000.0),
            gas: OutputBand::new(5_000.0, 2_000.0),
            nuclear: OutputBand::fixed(5_000.0),
            unknown: OutputBand::fixed(2_000.0),
            solar: (OutputBand::new(35_000.0, 5_000.0), OutputBand::fixed(15_000.0)),
            wind: (OutputBand::new(10_000.0, 5_000.0), OutputBand::fixed(25_000.0)),
            hydro: (OutputBand::fixed(8_000.0), OutputBand::fixed(20_000.0)),
            emissions: EmissionFactors {
                coal: 820.0,
                gas: 490.0,
                unknown: 700.0,
            },
        }
    }
}

impl SimulatorConfig {
    pub fn is_monsoon(&self, month0: u32) -> bool {
        (self.monsoon_months.0..=self.monsoon_months.1).contains(&month0)
    }
}
