//! DamageTrackConfig - Serializable capacity and band ratios for a track

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{WoundThresholds, WoundTier, STANDARD_MAX_DAMAGE};
use crate::error::DomainError;

/// A wound tier and the share of the damage range it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBandConfig {
    pub tier: WoundTier,
    pub ratio: f64,
}

impl TierBandConfig {
    pub fn new(tier: WoundTier, ratio: f64) -> Self {
        Self { tier, ratio }
    }

    /// Parse a comma-separated `tier:ratio` list, e.g. `light:0.5,mortal0:0.5`.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, DomainError> {
        s.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for TierBandConfig {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tier, ratio) = s
            .split_once(':')
            .ok_or_else(|| DomainError::parse(format!("Expected tier:ratio, got {}", s)))?;
        let ratio = ratio
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::parse(format!("Invalid ratio in {}: {}", s, e)))?;
        Ok(Self::new(tier.parse()?, ratio))
    }
}

/// Construction-time settings for a damage track.
///
/// Validation happens in [`DamageTrackConfig::thresholds`]; a config read
/// from disk is just data until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageTrackConfig {
    pub max_damage: u32,
    pub bands: Vec<TierBandConfig>,
}

impl Default for DamageTrackConfig {
    fn default() -> Self {
        Self::equal_bands(STANDARD_MAX_DAMAGE, WoundTier::standard())
    }
}

impl DamageTrackConfig {
    pub fn new(max_damage: u32, bands: Vec<TierBandConfig>) -> Self {
        Self { max_damage, bands }
    }

    /// Split `max_damage` evenly across `tiers`.
    pub fn equal_bands(max_damage: u32, tiers: impl IntoIterator<Item = WoundTier>) -> Self {
        let tiers: Vec<_> = tiers.into_iter().collect();
        let ratio = 1.0 / tiers.len().max(1) as f64;
        Self {
            max_damage,
            bands: tiers
                .into_iter()
                .map(|tier| TierBandConfig::new(tier, ratio))
                .collect(),
        }
    }

    pub fn with_max_damage(mut self, max_damage: u32) -> Self {
        self.max_damage = max_damage;
        self
    }

    pub fn with_bands(mut self, bands: Vec<TierBandConfig>) -> Self {
        self.bands = bands;
        self
    }

    /// Validate and resolve the bands into integer thresholds.
    pub fn thresholds(&self) -> Result<WoundThresholds, DomainError> {
        WoundThresholds::from_ratios(self.max_damage, &self.bands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_track() {
        let config = DamageTrackConfig::default();
        assert_eq!(config.max_damage, 40);
        assert_eq!(config.bands.len(), 10);
        assert_eq!(config.thresholds().unwrap(), WoundThresholds::standard());
    }

    #[test]
    fn equal_bands_with_no_tiers_fails_validation() {
        let config = DamageTrackConfig::equal_bands(40, Vec::new());
        assert!(matches!(
            config.thresholds(),
            Err(DomainError::InvalidTierConfiguration(_))
        ));
    }

    #[test]
    fn parses_band_list() {
        let bands = TierBandConfig::parse_list("light:0.5, mortal0:0.5").unwrap();
        assert_eq!(
            bands,
            vec![
                TierBandConfig::new(WoundTier::Light, 0.5),
                TierBandConfig::new(WoundTier::Mortal(0), 0.5),
            ]
        );
    }

    #[test]
    fn rejects_malformed_band_entries() {
        assert!(matches!(
            "light".parse::<TierBandConfig>(),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            "light:half".parse::<TierBandConfig>(),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            "scratched:0.5".parse::<TierBandConfig>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "maxDamage": 20,
            "bands": [
                { "tier": "light", "ratio": 0.5 },
                { "tier": "critical", "ratio": 0.5 }
            ]
        }"#;
        let config: DamageTrackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_damage, 20);
        let thresholds = config.thresholds().unwrap();
        assert_eq!(thresholds.tier_for(9), WoundTier::Light);
        assert_eq!(thresholds.tier_for(10), WoundTier::Critical);
    }
}
