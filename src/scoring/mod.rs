//! Combined plant health assessment.
//!
//! Joins the visual leaf score with the environment bonus into one 0-100
//! score, a qualitative label, and ordered care recommendations.

pub mod env;
pub mod leaf;

pub use env::{classify_environment, environment_bonus, environment_recommendations, EnvLevel, EnvStatus};
pub use leaf::leaf_image_score;

use crate::models::{HealthAssessment, HealthLabel, LeafFeatures, ScoreComponents};

const MILD_STRESS_CUTOFF: u8 = 85;
const SEVERE_DAMAGE_CUTOFF: u8 = 60;

impl HealthLabel {
    /// Label band for a final 0-100 score.
    pub fn for_score(score: u8) -> Self {
        if score >= 85 {
            HealthLabel::Healthy
        } else if score >= 60 {
            HealthLabel::MildWilt
        } else {
            HealthLabel::HealthWarning
        }
    }
}

/// Visual-cue advisories keyed off the image-only sub-score.
pub fn image_recommendations(image_score: u8) -> Vec<String> {
    let mut recs = Vec::new();
    if image_score < MILD_STRESS_CUTOFF {
        recs.push(
            "Visual signs of mild stress detected. Monitor leaf color and shape.".to_string(),
        );
    }
    if image_score < SEVERE_DAMAGE_CUTOFF {
        recs.push(
            "Significant leaf damage observed. Consider pruning or pest inspection.".to_string(),
        );
    }
    recs
}

/// Full health assessment for one photo plus its sensor readings.
///
/// The image sub-score is scaled to 0-100, adjusted by the environment
/// bonus, and clamped. Recommendations list environment advisories first,
/// then visual-cue advisories.
pub fn assess_health(
    features: &LeafFeatures,
    soil_moisture: f64,
    light_level: f64,
) -> HealthAssessment {
    let image_score = (leaf_image_score(features) * 100.0).round() as u8;
    let (env_bonus, explanation) = environment_bonus(soil_moisture, light_level);

    let final_score = (i32::from(image_score) + i32::from(env_bonus)).clamp(0, 100) as u8;
    let label = HealthLabel::for_score(final_score);

    let mut recommendations = environment_recommendations(light_level, soil_moisture);
    recommendations.extend(image_recommendations(image_score));

    HealthAssessment {
        health_score: final_score,
        label,
        components: ScoreComponents {
            image_score,
            env_bonus,
        },
        explanation,
        recommendations,
    }
}
