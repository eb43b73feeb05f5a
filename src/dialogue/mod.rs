//! Deterministic dream dialogue generation.
//!
//! Each user sees one stable dialogue per day: the pseudo-random stream is
//! seeded from a hash of the day's period key and the user id, so repeated
//! requests never flicker between sentence choices. The day rolls over at
//! 06:00 in the configured reference zone, not at midnight.

pub mod templates;

pub use templates::TemplateSet;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use crate::models::{
    DialogueComponents, DialogueFragment, DialogueResult, MoodTag, SensorReading,
    SentenceTemplate,
};

/// Reference zone the original deployment used for the daily rollover.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

/// Hour of day (local) at which generated dialogues refresh.
pub const DEFAULT_ROLLOVER_HOUR: u32 = 6;

/// Calendar date string identifying one dialogue period.
///
/// Instants before the rollover hour belong to the previous day's period.
pub fn period_key(timestamp: DateTime<Utc>, tz: Tz, rollover_hour: u32) -> String {
    let local = timestamp.with_timezone(&tz);
    let date = if local.hour() < rollover_hour {
        local.date_naive() - Duration::days(1)
    } else {
        local.date_naive()
    };
    date.format("%Y-%m-%d").to_string()
}

/// Deterministic generator for one (period, user) pair.
///
/// The seed is the first eight bytes of `Sha256("{period}|{user}")`, so the
/// same pair always yields the same choice sequence.
pub fn seeded_rng(period_key: &str, user_id: &str) -> StdRng {
    let digest = Sha256::digest(format!("{period_key}|{user_id}").as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    StdRng::seed_from_u64(u64::from_le_bytes(seed))
}

/// Aggregates fragment moods: happy weighs +2, neutral +1, sad -1.
/// Totals of 2 or more read happy, -1 or less read sad, anything else neutral.
pub fn final_mood(tags: &[MoodTag]) -> MoodTag {
    if tags.is_empty() {
        return MoodTag::Neutral;
    }
    let total: i32 = tags.iter().map(MoodTag::weight).sum();
    if total >= 2 {
        MoodTag::Happy
    } else if total <= -1 {
        MoodTag::Sad
    } else {
        MoodTag::Neutral
    }
}

fn choose<'a>(
    rng: &mut StdRng,
    templates: &'a TemplateSet,
    category: &str,
) -> Result<&'a SentenceTemplate> {
    templates
        .category(category)?
        .choose(rng)
        .with_context(|| format!("Dialogue template category '{category}' has no sentences"))
}

/// Composes the daily dream dialogue for one sensor reading.
///
/// Fragment order is fixed: the mandatory dream-type sentence, an optional
/// thirst suffix (more than three days without water), an optional light
/// suffix (bright-loving plant under 30 light), and the closing kaomoji.
/// The joined text is returned in full, never truncated.
pub fn compose_dialogue(
    templates: &TemplateSet,
    reading: &SensorReading,
    tz: Tz,
    rollover_hour: u32,
) -> Result<DialogueResult> {
    let key = period_key(reading.timestamp, tz, rollover_hour);
    let user = reading.user_id.as_deref().unwrap_or("");
    let mut rng = seeded_rng(&key, user);

    let mut text_parts: Vec<String> = Vec::new();
    let mut mood_tags: Vec<MoodTag> = Vec::new();

    let main = choose(&mut rng, templates, reading.dream_type.as_str())?;
    text_parts.push(main.text.clone());
    mood_tags.push(main.mood_tag);

    let need_water = if reading.since_water_days > 3 {
        let suffix = choose(&mut rng, templates, "need_water")?;
        text_parts.push(suffix.text.clone());
        mood_tags.push(suffix.mood_tag);
        Some(DialogueFragment::from(suffix))
    } else {
        None
    };

    let want_light = if reading.likes_bright_light && reading.light_level < 30.0 {
        let suffix = choose(&mut rng, templates, "want_light")?;
        text_parts.push(suffix.text.clone());
        mood_tags.push(suffix.mood_tag);
        Some(DialogueFragment::from(suffix))
    } else {
        None
    };

    let kaomoji = choose(&mut rng, templates, "kaomojis")?;
    text_parts.push(format!(" {}", kaomoji.text));
    mood_tags.push(kaomoji.mood_tag);

    let text = text_parts.concat();
    let mood = final_mood(&mood_tags);

    Ok(DialogueResult {
        text,
        mood_tag: mood,
        components: DialogueComponents {
            main: DialogueFragment::from(main),
            need_water,
            want_light,
            kaomoji: DialogueFragment::from(kaomoji),
            mood_tags,
            final_mood: mood,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DreamType;
    use chrono::TimeZone;

    fn reading(dream_type: DreamType) -> SensorReading {
        SensorReading {
            timestamp: Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
            dream_type,
            since_water_days: 0,
            likes_bright_light: false,
            light_level: 55.0,
            user_id: Some("user-1".to_string()),
        }
    }

    #[test]
    fn period_rolls_over_at_six_local() {
        let tz = DEFAULT_TIMEZONE;
        // 04:30 UTC in June is 05:30 London (BST): previous day's period.
        let before = Utc.with_ymd_and_hms(2025, 6, 15, 4, 30, 0).unwrap();
        assert_eq!(period_key(before, tz, 6), "2025-06-14");
        // 05:30 UTC is 06:30 London: same-day period.
        let after = Utc.with_ymd_and_hms(2025, 6, 15, 5, 30, 0).unwrap();
        assert_eq!(period_key(after, tz, 6), "2025-06-15");
        // In January London matches UTC, so 05:30 UTC is still pre-rollover.
        let winter = Utc.with_ymd_and_hms(2025, 1, 10, 5, 30, 0).unwrap();
        assert_eq!(period_key(winter, tz, 6), "2025-01-09");
    }

    #[test]
    fn same_period_and_user_give_identical_dialogue() {
        let templates = TemplateSet::builtin();
        let mut early = reading(DreamType::Misty);
        early.timestamp = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();
        let mut late = reading(DreamType::Misty);
        late.timestamp = Utc.with_ymd_and_hms(2025, 6, 15, 22, 0, 0).unwrap();

        let a = compose_dialogue(&templates, &early, DEFAULT_TIMEZONE, 6).unwrap();
        let b = compose_dialogue(&templates, &late, DEFAULT_TIMEZONE, 6).unwrap();
        assert_eq!(a.text, b.text);
        assert_eq!(a.mood_tag, b.mood_tag);
    }

    #[test]
    fn different_users_get_independent_streams() {
        use rand::Rng;
        let mut a = seeded_rng("2025-06-15", "user-a");
        let mut b = seeded_rng("2025-06-15", "user-b");
        assert_ne!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn missing_user_falls_back_to_empty_seed() {
        let templates = TemplateSet::builtin();
        let mut anon = reading(DreamType::Sunny);
        anon.user_id = None;
        let mut empty = reading(DreamType::Sunny);
        empty.user_id = Some(String::new());
        let a = compose_dialogue(&templates, &anon, DEFAULT_TIMEZONE, 6).unwrap();
        let b = compose_dialogue(&templates, &empty, DEFAULT_TIMEZONE, 6).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn water_suffix_requires_more_than_three_days() {
        let templates = TemplateSet::builtin();
        let mut dry = reading(DreamType::Dry);
        dry.since_water_days = 3;
        let result = compose_dialogue(&templates, &dry, DEFAULT_TIMEZONE, 6).unwrap();
        assert!(result.components.need_water.is_none());

        dry.since_water_days = 4;
        let result = compose_dialogue(&templates, &dry, DEFAULT_TIMEZONE, 6).unwrap();
        assert!(result.components.need_water.is_some());
    }

    #[test]
    fn light_suffix_gated_on_preference() {
        let templates = TemplateSet::builtin();
        let mut shade_lover = reading(DreamType::Rainy);
        shade_lover.likes_bright_light = false;
        shade_lover.light_level = 5.0;
        let result = compose_dialogue(&templates, &shade_lover, DEFAULT_TIMEZONE, 6).unwrap();
        assert!(result.components.want_light.is_none());

        let mut sun_lover = reading(DreamType::Rainy);
        sun_lover.likes_bright_light = true;
        sun_lover.light_level = 29.9;
        let result = compose_dialogue(&templates, &sun_lover, DEFAULT_TIMEZONE, 6).unwrap();
        assert!(result.components.want_light.is_some());
    }

    #[test]
    fn mood_aggregation_tables() {
        use MoodTag::{Happy, Neutral, Sad};
        assert_eq!(final_mood(&[Happy, Happy]), Happy);
        assert_eq!(final_mood(&[Sad]), Sad);
        assert_eq!(final_mood(&[Neutral, Sad]), Neutral);
        assert_eq!(final_mood(&[]), Neutral);
    }

    #[test]
    fn dialogue_text_contains_all_fragments_in_order() {
        let templates = TemplateSet::builtin();
        let mut thirsty = reading(DreamType::Dry);
        thirsty.since_water_days = 10;
        thirsty.likes_bright_light = true;
        thirsty.light_level = 10.0;
        let result = compose_dialogue(&templates, &thirsty, DEFAULT_TIMEZONE, 6).unwrap();

        let c = &result.components;
        let expected = format!(
            "{}{}{} {}",
            c.main.text,
            c.need_water.as_ref().unwrap().text,
            c.want_light.as_ref().unwrap().text,
            c.kaomoji.text
        );
        assert_eq!(result.text, expected);
        assert_eq!(c.mood_tags.len(), 4);
    }
}
