use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather theme attached to a plant's daily dream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreamType {
    Sunny,
    Dry,
    Misty,
    Rainy,
}

impl DreamType {
    /// Template category name for this dream theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            DreamType::Sunny => "sunny",
            DreamType::Dry => "dry",
            DreamType::Misty => "misty",
            DreamType::Rainy => "rainy",
        }
    }
}

/// Mood attached to a sentence fragment or an aggregated dialogue.
///
/// The frontend maps these onto emoji animations, so the set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    Happy,
    Neutral,
    Sad,
}

impl MoodTag {
    /// Weight used when aggregating fragment moods into a final mood.
    pub fn weight(&self) -> i32 {
        match self {
            MoodTag::Happy => 2,
            MoodTag::Neutral => 1,
            MoodTag::Sad => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Happy => "happy",
            MoodTag::Neutral => "neutral",
            MoodTag::Sad => "sad",
        }
    }
}

/// One sensor snapshot for a plant, as delivered by the upload pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    /// UTC instant the reading was captured.
    pub timestamp: DateTime<Utc>,
    pub dream_type: DreamType,
    #[serde(default)]
    pub since_water_days: u32,
    #[serde(default)]
    pub likes_bright_light: bool,
    /// Normalized light level, 0-100.
    #[serde(default = "default_light_level")]
    pub light_level: f64,
    /// Owner identifier; absent readings share one anonymous seed per day.
    #[serde(default)]
    pub user_id: Option<String>,
}

const fn default_light_level() -> f64 {
    100.0
}
