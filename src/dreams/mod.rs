//! Plant-to-plant dream chat messages.
//!
//! When the sender supplies no text, one line is drawn from the built-in
//! pool using the caller's generator. Persistence and delivery belong to
//! the storage layer; this module only composes the message.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Built-in pool of generated dream lines.
pub const DREAM_TEXTS: [&str; 10] = [
    "In the silence between watering, I dreamed of rain that never ends.",
    "I saw roots entwined like forgotten stories beneath the earth.",
    "The stars whispered names I no longer remember, yet still grow toward.",
    "In my sleep, I turned light into longing.",
    "A bee visited me in a dream, humming truths I cannot speak.",
    "I dreamed I was a forest, not a single stem.",
    "I heard the footsteps of time in the falling of old petals.",
    "The wind carried a lullaby from a tree I've never met.",
    "In the dark, I bloomed with questions.",
    "I touched the shadow of the sun and it felt like home.",
];

/// Picks one generated dream line.
pub fn generate_dream_text<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DREAM_TEXTS.choose(rng).copied().unwrap_or(DREAM_TEXTS[0])
}

/// A dream message exchanged between two plants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamChat {
    pub chat_id: Uuid,
    pub from_plant_id: String,
    pub to_plant_id: String,
    pub text: String,
    /// True when the text came from the built-in pool, not the sender.
    pub auto_generated: bool,
    pub sent_at: DateTime<Utc>,
}

/// Builds a chat message, generating text when none was provided.
/// Whitespace-only input counts as missing.
pub fn compose_chat<R: Rng + ?Sized>(
    from_plant_id: &str,
    to_plant_id: &str,
    text: Option<&str>,
    rng: &mut R,
) -> DreamChat {
    let provided = text.map(str::trim).filter(|t| !t.is_empty());
    let (text, auto_generated) = match provided {
        Some(t) => (t.to_string(), false),
        None => (generate_dream_text(rng).to_string(), true),
    };
    DreamChat {
        chat_id: Uuid::new_v4(),
        from_plant_id: from_plant_id.to_string(),
        to_plant_id: to_plant_id.to_string(),
        text,
        auto_generated,
        sent_at: Utc::now(),
    }
}

/// Notification line shown to the recipient plant's owner.
pub fn notification_message(plant_id: &str) -> String {
    format!("Your plant '{plant_id}' received a new dream.")
}
