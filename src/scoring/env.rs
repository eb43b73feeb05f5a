//! Environment classification and bonus scoring.
//!
//! Raw light and soil-moisture readings (both 0-100) are bucketed into
//! qualitative states; each optimal axis adds +5 to the health score and
//! each non-optimal axis deducts 5.

use serde::{Deserialize, Serialize};

/// Qualitative state for one environment axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvLevel {
    Low,
    Optimal,
    High,
}

impl EnvLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvLevel::Low => "low",
            EnvLevel::Optimal => "optimal",
            EnvLevel::High => "high",
        }
    }
}

/// Classified environment readings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnvStatus {
    pub light: EnvLevel,
    pub moisture: EnvLevel,
}

/// Buckets raw readings. Boundaries are exclusive: a light level of exactly
/// 30 or 85 still counts as optimal, same for moisture at 25 and 80.
pub fn classify_environment(light_level: f64, soil_moisture: f64) -> EnvStatus {
    let light = if light_level < 30.0 {
        EnvLevel::Low
    } else if light_level > 85.0 {
        EnvLevel::High
    } else {
        EnvLevel::Optimal
    };
    let moisture = if soil_moisture < 25.0 {
        EnvLevel::Low
    } else if soil_moisture > 80.0 {
        EnvLevel::High
    } else {
        EnvLevel::Optimal
    };
    EnvStatus { light, moisture }
}

/// Signed bonus (-10..=10) plus one observation per axis.
pub fn environment_bonus(soil_moisture: f64, light_level: f64) -> (i8, Vec<String>) {
    let status = classify_environment(light_level, soil_moisture);
    let mut bonus: i8 = 0;
    let mut comments = Vec::new();

    match status.light {
        EnvLevel::Optimal => {
            bonus += 5;
            comments.push("Light level is optimal.".to_string());
        }
        EnvLevel::Low => {
            bonus -= 5;
            comments.push("Low light detected. Consider moving to a brighter location.".to_string());
        }
        EnvLevel::High => {
            bonus -= 5;
            comments.push("Excessive light detected. Shade may be needed.".to_string());
        }
    }

    match status.moisture {
        EnvLevel::Optimal => {
            bonus += 5;
            comments.push("Soil moisture is ideal.".to_string());
        }
        EnvLevel::Low => {
            bonus -= 5;
            comments.push("Soil is too dry. Watering is recommended.".to_string());
        }
        EnvLevel::High => {
            bonus -= 5;
            comments.push("Soil is too wet. Ensure good drainage.".to_string());
        }
    }

    (bonus, comments)
}

/// Care advisories for the non-optimal axes only.
pub fn environment_recommendations(light_level: f64, soil_moisture: f64) -> Vec<String> {
    let status = classify_environment(light_level, soil_moisture);
    let mut recs = Vec::new();

    match status.light {
        EnvLevel::Low => {
            recs.push("Light is too low. Consider relocating to a brighter area.".to_string())
        }
        EnvLevel::High => {
            recs.push("Too much light. Consider moving to a shaded area.".to_string())
        }
        EnvLevel::Optimal => {}
    }

    match status.moisture {
        EnvLevel::Low => recs.push("Soil is too dry. Watering is recommended.".to_string()),
        EnvLevel::High => recs.push("Soil is too wet. Reduce watering frequency.".to_string()),
        EnvLevel::Optimal => {}
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_count_as_optimal() {
        let status = classify_environment(30.0, 25.0);
        assert_eq!(status.light, EnvLevel::Optimal);
        assert_eq!(status.moisture, EnvLevel::Optimal);

        let status = classify_environment(85.0, 80.0);
        assert_eq!(status.light, EnvLevel::Optimal);
        assert_eq!(status.moisture, EnvLevel::Optimal);

        let status = classify_environment(29.9, 24.9);
        assert_eq!(status.light, EnvLevel::Low);
        assert_eq!(status.moisture, EnvLevel::Low);

        let status = classify_environment(85.1, 80.1);
        assert_eq!(status.light, EnvLevel::High);
        assert_eq!(status.moisture, EnvLevel::High);
    }

    #[test]
    fn bonus_is_independent_per_axis() {
        let (bonus, comments) = environment_bonus(60.0, 50.0);
        assert_eq!(bonus, 10);
        assert_eq!(comments.len(), 2);

        let (bonus, _) = environment_bonus(10.0, 50.0);
        assert_eq!(bonus, 0);

        let (bonus, comments) = environment_bonus(10.0, 95.0);
        assert_eq!(bonus, -10);
        assert!(comments[0].contains("Excessive light"));
        assert!(comments[1].contains("too dry"));
    }

    #[test]
    fn recommendations_skip_optimal_axes() {
        assert!(environment_recommendations(50.0, 60.0).is_empty());
        let recs = environment_recommendations(5.0, 90.0);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("too low"));
        assert!(recs[1].contains("too wet"));
    }
}
