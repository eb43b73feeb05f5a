//! Achievement catalog and unlock rules.
//!
//! The catalog is static; the checker is a pure function over a snapshot of
//! a user's dream history, so the storage layer only needs to persist the
//! ids it returns.

use std::collections::HashSet;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DreamType;

/// Stable identifiers for the seven launch achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementId {
    DreamBegins,
    SilentReader,
    StayedUpLate,
    GlitchGardener,
    AvatarMaster,
    PixelCollector,
    MistDreamer,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::DreamBegins => "DREAM_BEGINS",
            AchievementId::SilentReader => "SILENT_READER",
            AchievementId::StayedUpLate => "STAYED_UP_LATE",
            AchievementId::GlitchGardener => "GLITCH_GARDENER",
            AchievementId::AvatarMaster => "AVATAR_MASTER",
            AchievementId::PixelCollector => "PIXEL_COLLECTOR",
            AchievementId::MistDreamer => "MIST_DREAMER",
        }
    }
}

/// Static catalog entry: display data plus the points it awards.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub icon: &'static str,
    /// Whether unlocking triggers the pixel animation in the frontend.
    pub animate: bool,
}

pub const ACHIEVEMENTS: [Achievement; 7] = [
    Achievement {
        id: AchievementId::DreamBegins,
        name: "Dream Begins",
        description: "Generated your first dream record.",
        points: 15,
        icon: "💭",
        animate: true,
    },
    Achievement {
        id: AchievementId::SilentReader,
        name: "Silent Reader",
        description: "You left 3 or more dreams unread.",
        points: 15,
        icon: "📪",
        animate: true,
    },
    Achievement {
        id: AchievementId::StayedUpLate,
        name: "Stayed Up Late",
        description: "Generated a dream between 1-4 a.m.",
        points: 15,
        icon: "🕯️",
        animate: true,
    },
    Achievement {
        id: AchievementId::GlitchGardener,
        name: "Glitch Gardener",
        description: "Logged a dream with corrupted moisture data.",
        points: 15,
        icon: "🌀",
        animate: true,
    },
    Achievement {
        id: AchievementId::AvatarMaster,
        name: "Avatar Master",
        description: "Uploaded 5 avatars.",
        points: 20,
        icon: "🖼️",
        animate: false,
    },
    Achievement {
        id: AchievementId::PixelCollector,
        name: "Pixel Collector",
        description: "Unlocked 3 animated achievements.",
        points: 25,
        icon: "📬",
        animate: false,
    },
    Achievement {
        id: AchievementId::MistDreamer,
        name: "Mist Dreamer",
        description: "Experienced your first misty dream.",
        points: 15,
        icon: "🌫️",
        animate: false,
    },
];

/// Catalog lookup; ids always resolve since both sides are static.
pub fn achievement(id: AchievementId) -> &'static Achievement {
    ACHIEVEMENTS
        .iter()
        .find(|a| a.id == id)
        .unwrap_or(&ACHIEVEMENTS[0])
}

/// Validity flag the ingestion layer attaches to a dream's sensor data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    #[default]
    Valid,
    /// Moisture data was corrupted and repaired during ingestion.
    InvalidFixed,
}

/// One logged dream, reduced to the fields the unlock rules inspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamRecord {
    pub timestamp: DateTime<Utc>,
    pub dream_type: DreamType,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub sensor_status: SensorStatus,
}

/// Everything the unlock rules need about one user, fetched by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    #[serde(default)]
    pub dreams: Vec<DreamRecord>,
    #[serde(default)]
    pub avatar_count: u32,
}

/// Progress toward the next lottery draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub points: u32,
    pub progress_percent: u32,
    pub can_draw: bool,
}

/// Progress bar state for a points total against the draw cost.
pub fn progress(points: u32, ticket_cost: u32) -> AchievementProgress {
    if ticket_cost == 0 {
        return AchievementProgress {
            points,
            progress_percent: 100,
            can_draw: true,
        };
    }
    AchievementProgress {
        points,
        progress_percent: (points * 100 / ticket_cost).min(100),
        can_draw: points >= ticket_cost,
    }
}

const LATE_NIGHT_START: (u32, u32) = (1, 0);
const LATE_NIGHT_END: (u32, u32) = (4, 0);

fn unlock(
    id: AchievementId,
    have: &mut HashSet<AchievementId>,
    newly: &mut Vec<AchievementId>,
) {
    if have.insert(id) {
        newly.push(id);
    }
}

/// Evaluates all unlock rules against a snapshot and returns the newly
/// unlocked achievements in rule order. Already-unlocked ids are skipped.
/// Pixel Collector counts achievements unlocked earlier in the same pass.
pub fn evaluate_achievements(
    snapshot: &ActivitySnapshot,
    already_unlocked: &[AchievementId],
) -> Vec<&'static Achievement> {
    let mut have: HashSet<AchievementId> = already_unlocked.iter().copied().collect();
    let mut newly: Vec<AchievementId> = Vec::new();

    if !snapshot.dreams.is_empty() {
        unlock(AchievementId::DreamBegins, &mut have, &mut newly);
    }

    let unread = snapshot.dreams.iter().filter(|d| !d.read).count();
    if unread >= 3 {
        unlock(AchievementId::SilentReader, &mut have, &mut newly);
    }

    let start = NaiveTime::from_hms_opt(LATE_NIGHT_START.0, LATE_NIGHT_START.1, 0);
    let end = NaiveTime::from_hms_opt(LATE_NIGHT_END.0, LATE_NIGHT_END.1, 0);
    if let (Some(start), Some(end)) = (start, end) {
        if snapshot.dreams.iter().any(|d| {
            let t = d.timestamp.time();
            t >= start && t <= end
        }) {
            unlock(AchievementId::StayedUpLate, &mut have, &mut newly);
        }
    }

    if snapshot
        .dreams
        .iter()
        .any(|d| d.sensor_status == SensorStatus::InvalidFixed)
    {
        unlock(AchievementId::GlitchGardener, &mut have, &mut newly);
    }

    if snapshot
        .dreams
        .iter()
        .any(|d| d.dream_type == DreamType::Misty)
    {
        unlock(AchievementId::MistDreamer, &mut have, &mut newly);
    }

    if snapshot.avatar_count >= 5 {
        unlock(AchievementId::AvatarMaster, &mut have, &mut newly);
    }

    let animated = have.iter().filter(|id| achievement(**id).animate).count();
    if animated >= 3 {
        unlock(AchievementId::PixelCollector, &mut have, &mut newly);
    }

    newly.into_iter().map(achievement).collect()
}
