//! Heuristic metrics derived from the compensated values.
//!
//! Dew point and the air-quality index are the manufacturer's coarse
//! approximations, reproduced as-is for output compatibility rather than
//! replaced with more accurate psychrometric formulas.

use crate::calc::round2;

/// Qualitative banding of the gas resistance.
///
/// Higher resistance means fewer volatile organic compounds, i.e. cleaner
/// air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GasQuality {
    /// ≥ 100 kΩ.
    Excellent,
    /// 50 kΩ to 100 kΩ.
    Good,
    /// 10 kΩ to 50 kΩ.
    Moderate,
    /// 1 kΩ to 10 kΩ.
    Poor,
    /// Below 1 kΩ.
    Severe,
}

impl GasQuality {
    /// Classifies a gas resistance in Ohm.
    pub fn from_resistance(ohms: f64) -> Self {
        if ohms >= 100_000.0 {
            GasQuality::Excellent
        } else if ohms >= 50_000.0 {
            GasQuality::Good
        } else if ohms >= 10_000.0 {
            GasQuality::Moderate
        } else if ohms >= 1_000.0 {
            GasQuality::Poor
        } else {
            GasQuality::Severe
        }
    }

    /// Numeric score of the band (100, 75, 50, 25 or 5).
    pub fn score(&self) -> u8 {
        match self {
            GasQuality::Excellent => 100,
            GasQuality::Good => 75,
            GasQuality::Moderate => 50,
            GasQuality::Poor => 25,
            GasQuality::Severe => 5,
        }
    }
}

/// Dew point in °C from temperature and relative humidity.
///
/// `T - (100 - RH) / 5` is a deliberately coarse approximation.
pub fn dew_point(temperature: f64, humidity: f64) -> f64 {
    round2(temperature - ((100.0 - humidity) / 5.0))
}

/// Air-quality index in 0..=500 (0 best, 500 worst).
///
/// Combines a gas score anchored at the clean-air baseline (75 % weight)
/// with a humidity score centered on 40 %RH (25 % weight).
pub fn air_quality_index(gas_resistance: f64, gas_baseline: f64, humidity: f64) -> u16 {
    let gas_ratio = gas_resistance / gas_baseline;
    let gas_score = if gas_ratio < 1.0 { gas_ratio } else { 1.0 } * 100.0;

    let hum_score = 100.0 - libm::fabs(humidity - 40.0) * 2.0;
    let hum_score = if hum_score > 0.0 { hum_score } else { 0.0 };

    let combined = (0.75 * gas_score) + (0.25 * hum_score);

    let index = 500.0 - (combined * 5.0);
    let index = if index < 0.0 {
        0.0
    } else if index > 500.0 {
        500.0
    } else {
        index
    };
    libm::round(index) as u16
}
