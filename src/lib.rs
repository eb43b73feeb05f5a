pub mod achievements;
pub mod config;
pub mod dialogue;
pub mod dreams;
pub mod lottery;
pub mod models;
pub mod scoring;
pub mod watering;

// Re-export commonly used types for convenience.
pub use config::{GrowConfig, GrowContext};
pub use dialogue::{compose_dialogue, TemplateSet};
pub use models::{DialogueResult, HealthAssessment, LeafFeatures, MoodTag, SensorReading};
pub use scoring::assess_health;
