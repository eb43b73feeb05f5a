//! Visual leaf scoring from classifier-extracted features.

use crate::models::LeafFeatures;

/// Health score in [0, 1] from visual cues alone.
///
/// Starts at a perfect 1.0 and deducts per symptom; brown patches and black
/// spots are capped so no single cue dominates.
pub fn leaf_image_score(features: &LeafFeatures) -> f64 {
    let mut score = 1.0;

    score -= features.color.yellow_ratio * 0.35;
    score -= (f64::from(features.color.brown) / 100.0).min(0.25);
    score -= features.color.black_spot_ratio.min(0.2);
    score -= features.shape.irregularity * 0.15;
    if features.shape.holes_detected {
        score -= 0.1;
    }

    score.clamp(0.0, 1.0)
}
