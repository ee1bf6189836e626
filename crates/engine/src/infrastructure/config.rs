//! Application configuration

use std::env;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use cpsheet_domain::{DamageTrackConfig, TierBandConfig};

/// Path to a JSON `DamageTrackConfig`
pub const DAMAGE_CONFIG_VAR: &str = "CPSHEET_DAMAGE_CONFIG";
/// Overrides the track capacity
pub const MAX_DAMAGE_VAR: &str = "CPSHEET_MAX_DAMAGE";
/// Overrides the bands, as a `tier:ratio` list
pub const WOUND_TIERS_VAR: &str = "CPSHEET_WOUND_TIERS";
/// Broadcast buffer for damage notifications
pub const NOTIFICATION_CAPACITY_VAR: &str = "CPSHEET_NOTIFICATION_CAPACITY";

const DEFAULT_NOTIFICATION_CAPACITY: usize = 64;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Capacity and wound bands, already validated
    pub damage_track: DamageTrackConfig,
    /// How many notifications a slow renderer may fall behind by
    pub notification_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            damage_track: DamageTrackConfig::default(),
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    ///
    /// Precedence: built-in standard track, then the JSON file named by
    /// `CPSHEET_DAMAGE_CONFIG`, then the individual overrides. The final
    /// bands are validated here so a bad configuration stops startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut damage_track = match lookup(DAMAGE_CONFIG_VAR) {
            Some(path) => read_damage_config(Path::new(&path))?,
            None => DamageTrackConfig::default(),
        };

        if let Some(max_damage) = lookup(MAX_DAMAGE_VAR) {
            let max_damage = max_damage
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{MAX_DAMAGE_VAR} must be a non-negative integer"))?;
            damage_track = damage_track.with_max_damage(max_damage);
        }

        if let Some(tiers) = lookup(WOUND_TIERS_VAR) {
            let bands = TierBandConfig::parse_list(&tiers)
                .with_context(|| format!("{WOUND_TIERS_VAR} is not a valid tier:ratio list"))?;
            damage_track = damage_track.with_bands(bands);
        }

        damage_track
            .thresholds()
            .context("damage track configuration is invalid")?;

        let notification_capacity = match lookup(NOTIFICATION_CAPACITY_VAR) {
            Some(capacity) => capacity
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{NOTIFICATION_CAPACITY_VAR} must be a positive integer"))?,
            None => DEFAULT_NOTIFICATION_CAPACITY,
        };
        ensure!(
            notification_capacity > 0,
            "{NOTIFICATION_CAPACITY_VAR} must be a positive integer"
        );

        Ok(Self {
            damage_track,
            notification_capacity,
        })
    }
}

fn read_damage_config(path: &Path) -> Result<DamageTrackConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading damage config {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing damage config {}", path.display()))
}
