use serde::{Deserialize, Serialize};

use super::MoodTag;

/// One sentence candidate inside a template category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceTemplate {
    pub text: String,
    pub mood_tag: MoodTag,
}

/// A chosen fragment, kept for diagnostics alongside the joined text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueFragment {
    pub text: String,
    pub mood: MoodTag,
}

impl From<&SentenceTemplate> for DialogueFragment {
    fn from(template: &SentenceTemplate) -> Self {
        Self {
            text: template.text.clone(),
            mood: template.mood_tag,
        }
    }
}

/// Per-fragment breakdown of a composed dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueComponents {
    pub main: DialogueFragment,
    #[serde(default)]
    pub need_water: Option<DialogueFragment>,
    #[serde(default)]
    pub want_light: Option<DialogueFragment>,
    pub kaomoji: DialogueFragment,
    pub mood_tags: Vec<MoodTag>,
    pub final_mood: MoodTag,
}

/// Full dialogue output: joined text, aggregate mood, and the parts chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueResult {
    pub text: String,
    pub mood_tag: MoodTag,
    pub components: DialogueComponents,
}
