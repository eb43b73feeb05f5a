use serde::{Deserialize, Serialize};

/// Color ratios extracted from a leaf photo by the image pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorFeatures {
    /// Share of leaf area with yellow discoloration, 0-1.
    #[serde(default)]
    pub yellow_ratio: f64,
    /// Count of brown patches detected.
    #[serde(default)]
    pub brown: u32,
    /// Share of leaf area covered by black spots, 0-1.
    #[serde(default)]
    pub black_spot_ratio: f64,
}

/// Shape cues extracted from a leaf photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeFeatures {
    /// Edge irregularity, 0-1.
    #[serde(default)]
    pub irregularity: f64,
    #[serde(default)]
    pub holes_detected: bool,
}

/// Visual features for one leaf, supplied by the external classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeafFeatures {
    #[serde(default)]
    pub color: ColorFeatures,
    #[serde(default)]
    pub shape: ShapeFeatures,
}

/// Qualitative health band derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLabel {
    Healthy,
    #[serde(rename = "Mild Wilt")]
    MildWilt,
    #[serde(rename = "Health Warning")]
    HealthWarning,
}

impl HealthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Healthy => "Healthy",
            HealthLabel::MildWilt => "Mild Wilt",
            HealthLabel::HealthWarning => "Health Warning",
        }
    }
}

/// Sub-scores that the final health score was assembled from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Image-only score, 0-100.
    pub image_score: u8,
    /// Signed environment adjustment, -10..=10.
    pub env_bonus: i8,
}

/// Combined health assessment for one photo plus sensor pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub health_score: u8,
    pub label: HealthLabel,
    pub components: ScoreComponents,
    /// Environment observations, in evaluation order.
    pub explanation: Vec<String>,
    /// Care suggestions: environment advisories first, then visual cues.
    pub recommendations: Vec<String>,
}
