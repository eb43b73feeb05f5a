//! Dialogue template table: category name -> ordered sentence candidates.
//!
//! Loaded once at startup, either from the built-in table or from a JSON
//! file with the same shape:
//!
//! ```json
//! { "sunny": { "sentences": [ { "text": "...", "mood_tag": "happy" } ] } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{MoodTag, SentenceTemplate};

/// Categories every template table must provide. The first four mirror the
/// dream types; the rest are conditional suffixes and the closing kaomoji.
pub const REQUIRED_CATEGORIES: [&str; 7] = [
    "sunny",
    "dry",
    "misty",
    "rainy",
    "need_water",
    "want_light",
    "kaomojis",
];

#[derive(Debug, Deserialize)]
struct CategoryDef {
    sentences: Vec<SentenceTemplate>,
}

/// Immutable template table shared for the process lifetime.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    categories: BTreeMap<String, Vec<SentenceTemplate>>,
}

impl TemplateSet {
    /// Parses a template table from JSON and validates required categories.
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: BTreeMap<String, CategoryDef> =
            serde_json::from_str(data).context("Failed to parse dialogue template JSON")?;
        let categories = raw
            .into_iter()
            .map(|(name, def)| (name, def.sentences))
            .collect();
        let set = Self { categories };
        set.validate()?;
        Ok(set)
    }

    /// Reads and parses a template table from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dialogue template file {:?}", path))?;
        Self::from_json(&data)
            .with_context(|| format!("Invalid dialogue template file {:?}", path))
    }

    /// Sentences for one category; unknown categories are a data bug.
    pub fn category(&self, name: &str) -> Result<&[SentenceTemplate]> {
        match self.categories.get(name) {
            Some(sentences) => Ok(sentences),
            None => bail!("Unknown dialogue template category '{name}'"),
        }
    }

    fn validate(&self) -> Result<()> {
        for name in REQUIRED_CATEGORIES {
            match self.categories.get(name) {
                None => bail!("Dialogue template table is missing category '{name}'"),
                Some(sentences) if sentences.is_empty() => {
                    bail!("Dialogue template category '{name}' has no sentences")
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Default English template table, always valid.
    pub fn builtin() -> Self {
        fn t(text: &str, mood_tag: MoodTag) -> SentenceTemplate {
            SentenceTemplate {
                text: text.to_string(),
                mood_tag,
            }
        }
        use MoodTag::{Happy, Neutral, Sad};

        let mut categories = BTreeMap::new();
        categories.insert(
            "sunny".to_string(),
            vec![
                t("I dreamed of a warm golden morning spreading across my leaves.", Happy),
                t("Sunbeams danced through my dream all night long.", Happy),
                t("I basked in an endless summer afternoon.", Neutral),
            ],
        );
        categories.insert(
            "dry".to_string(),
            vec![
                t("My dream was full of dusty winds and cracked earth.", Sad),
                t("I wandered a desert of my own roots, looking for a stream.", Neutral),
                t("Everything in my dream crackled like old paper.", Sad),
            ],
        );
        categories.insert(
            "misty".to_string(),
            vec![
                t("A soft fog wrapped around my dream like a blanket.", Neutral),
                t("I drifted through clouds that tasted of morning dew.", Happy),
                t("Shapes moved in the mist, gentle and slow.", Neutral),
            ],
        );
        categories.insert(
            "rainy".to_string(),
            vec![
                t("Raindrops drummed a lullaby over my dream.", Happy),
                t("I dreamed of puddles growing into quiet lakes.", Neutral),
                t("A storm rolled through my sleep and left me dripping.", Sad),
            ],
        );
        // Suffix categories carry their own leading space; fragments are
        // joined without a separator.
        categories.insert(
            "need_water".to_string(),
            vec![
                t(" My soil feels like a faraway desert. Could I have a drink?", Sad),
                t(" I keep dreaming of rivers. A little water would be lovely.", Neutral),
                t(" My roots are whispering for rain.", Sad),
            ],
        );
        categories.insert(
            "want_light".to_string(),
            vec![
                t(" I miss the bright window. Could you move me closer to the light?", Sad),
                t(" A sunnier spot would make my dreams glow.", Neutral),
                t(" I keep reaching for a sun I cannot find.", Sad),
            ],
        );
        categories.insert(
            "kaomojis".to_string(),
            vec![
                t("(≧▽≦)", Happy),
                t("(・ω・)", Neutral),
                t("(◕‿◕)", Happy),
                t("(´。＿。｀)", Sad),
            ],
        );
        Self { categories }
    }
}
