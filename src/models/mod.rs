pub mod dialogue;
pub mod health;
pub mod sensor;

pub use dialogue::{DialogueComponents, DialogueFragment, DialogueResult, SentenceTemplate};
pub use health::{
    ColorFeatures, HealthAssessment, HealthLabel, LeafFeatures, ScoreComponents, ShapeFeatures,
};
pub use sensor::{DreamType, MoodTag, SensorReading};
