//! Configuration primitives for the Grow AI core.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/GrowCore/config.toml on Windows
//!   $XDG_DATA_HOME/GrowCore/config.toml on Linux
//!   ~/Library/Application Support/GrowCore/config.toml on macOS
//!
//! The config tracks the dialogue rollover settings and lottery cost. A
//! resolved, read-only `GrowContext` replaces the module-level globals the
//! mobile backend used: templates and timezone are loaded once at startup
//! and shared by reference afterwards.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GrowConfig {
    /// Dialogue generation settings (timezone, rollover, template source).
    #[serde(default)]
    pub dialogue: DialogueSettings,
    /// Lottery knobs (ticket cost).
    #[serde(default)]
    pub lottery: LotterySettings,
}

/// Dialogue-related preferences tied to the local install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueSettings {
    /// IANA timezone name used for the daily period boundary.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Local hour at which the dialogue period rolls over.
    #[serde(default = "default_rollover_hour")]
    pub rollover_hour: u32,
    /// Optional JSON template file; the built-in table is used when absent.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            rollover_hour: default_rollover_hour(),
            template_path: None,
        }
    }
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

const fn default_rollover_hour() -> u32 {
    6
}

/// Lottery preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotterySettings {
    /// Achievement points one draw costs.
    #[serde(default = "default_ticket_cost")]
    pub ticket_cost: u32,
}

impl Default for LotterySettings {
    fn default() -> Self {
        Self {
            ticket_cost: default_ticket_cost(),
        }
    }
}

const fn default_ticket_cost() -> u32 {
    100
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{bail, Context, Result};
use chrono_tz::Tz;
use directories::BaseDirs;
use rand::Rng;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::dialogue::{compose_dialogue, TemplateSet};
use crate::lottery::{run_draw, DrawOutcome};
use crate::models::{DialogueResult, SensorReading};

/// Returns the root directory where GrowCore stores data.
///
/// Order of precedence:
/// 1. `GROWCORE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("GROWCORE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("GrowCore"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(workspace_root()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<GrowConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: GrowConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(GrowConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &GrowConfig) -> Result<()> {
    let path = config_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

/// Resolved, read-only runtime context: the template table, timezone, and
/// tuning values every request handler reads. Safe to share by reference
/// across concurrent callers since nothing here mutates after startup.
#[derive(Debug, Clone)]
pub struct GrowContext {
    pub templates: TemplateSet,
    pub timezone: Tz,
    pub rollover_hour: u32,
    pub ticket_cost: u32,
}

impl GrowContext {
    /// Resolves a config into a ready-to-use context. Unknown timezones,
    /// out-of-range rollover hours, and bad template files are fatal here.
    pub fn from_config(config: &GrowConfig) -> Result<Self> {
        let timezone: Tz = config
            .dialogue
            .timezone
            .parse()
            .map_err(|err| anyhow::anyhow!("Unknown timezone '{}': {err}", config.dialogue.timezone))?;
        if config.dialogue.rollover_hour >= 24 {
            bail!(
                "Rollover hour must be 0-23, got {}",
                config.dialogue.rollover_hour
            );
        }
        let templates = match &config.dialogue.template_path {
            Some(path) => TemplateSet::from_path(path)?,
            None => TemplateSet::builtin(),
        };
        Ok(Self {
            templates,
            timezone,
            rollover_hour: config.dialogue.rollover_hour,
            ticket_cost: config.lottery.ticket_cost,
        })
    }

    /// Context from the on-disk config (or defaults when none exists).
    pub fn load() -> Result<Self> {
        let config = load_or_default()?;
        Self::from_config(&config)
    }

    /// Daily dream dialogue for one sensor reading.
    pub fn dialogue(&self, reading: &SensorReading) -> Result<DialogueResult> {
        compose_dialogue(&self.templates, reading, self.timezone, self.rollover_hour)
    }

    /// One lottery draw against this install's ticket cost.
    pub fn lottery_draw<R: Rng + ?Sized>(&self, points: u32, rng: &mut R) -> Result<DrawOutcome> {
        run_draw(points, self.ticket_cost, rng)
    }

    /// Lottery progress for a points total.
    pub fn lottery_progress(&self, points: u32) -> crate::achievements::AchievementProgress {
        crate::achievements::progress(points, self.ticket_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_london_context() {
        let ctx = GrowContext::from_config(&GrowConfig::default()).unwrap();
        assert_eq!(ctx.timezone, chrono_tz::Europe::London);
        assert_eq!(ctx.rollover_hour, 6);
        assert_eq!(ctx.ticket_cost, 100);
    }

    #[test]
    fn unknown_timezone_is_fatal() {
        let mut config = GrowConfig::default();
        config.dialogue.timezone = "Atlantis/Lost".to_string();
        let err = GrowContext::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Atlantis/Lost"));
    }

    #[test]
    fn out_of_range_rollover_hour_is_fatal() {
        let mut config = GrowConfig::default();
        config.dialogue.rollover_hour = 24;
        assert!(GrowContext::from_config(&config).is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = GrowConfig::default();
        config.lottery.ticket_cost = 150;
        let doc = toml::to_string_pretty(&config).unwrap();
        let parsed: GrowConfig = toml::from_str(&doc).unwrap();
        assert_eq!(parsed.lottery.ticket_cost, 150);
        assert_eq!(parsed.dialogue.timezone, "Europe/London");
    }
}
