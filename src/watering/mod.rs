//! Watering interval suggestion and rain-delay advisory.
//!
//! The interval rule is a threshold stand-in for the trained regressor the
//! mobile backend shipped with; it emits the same three classes. The rain
//! check takes forecast numbers from the caller, it does no I/O.

use serde::{Deserialize, Serialize};

/// Recommended watering cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WateringInterval {
    Days1,
    Days3,
    Days7,
}

impl WateringInterval {
    pub fn days(&self) -> u32 {
        match self {
            WateringInterval::Days1 => 1,
            WateringInterval::Days3 => 3,
            WateringInterval::Days7 => 7,
        }
    }
}

/// Hourly precipitation (mm) above this delays watering.
pub const RAIN_DELAY_THRESHOLD_MM: f64 = 0.5;

const DRY_SOIL_CUTOFF: f64 = 25.0;
const WET_SOIL_CUTOFF: f64 = 80.0;
const BRIGHT_LIGHT_CUTOFF: f64 = 60.0;

/// Suggests a watering interval from light level and average soil moisture.
///
/// Dry soil waters daily; saturated soil waits a week; in between, bright
/// spots dry out faster and get the three-day cadence.
pub fn suggest_interval(light_level: f64, avg_moisture: f64) -> WateringInterval {
    if avg_moisture < DRY_SOIL_CUTOFF {
        WateringInterval::Days1
    } else if avg_moisture > WET_SOIL_CUTOFF {
        WateringInterval::Days7
    } else if light_level > BRIGHT_LIGHT_CUTOFF {
        WateringInterval::Days3
    } else {
        WateringInterval::Days7
    }
}

/// Advisory when today's forecast makes watering pointless.
///
/// Returns None when no hourly value exceeds the threshold or the forecast
/// is empty.
pub fn rain_delay_advice(hourly_precipitation: &[f64]) -> Option<String> {
    let max_rain = hourly_precipitation
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if hourly_precipitation.is_empty() || max_rain <= RAIN_DELAY_THRESHOLD_MM {
        return None;
    }
    Some("Rain is expected later today. Watering delayed.".to_string())
}
