//! WoundThresholds - Partition of a damage range into wound tiers
//!
//! Thresholds are validated once, when they are built. After that,
//! [`WoundThresholds::tier_for`] is a total, pure lookup.

use super::{TierBandConfig, WoundTier, MAX_MORTAL_LEVEL};
use crate::error::DomainError;

/// Damage capacity of a standard track.
pub const STANDARD_MAX_DAMAGE: u32 = 40;

/// Allowed drift when checking that band ratios sum to 1.0.
const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Contiguous, non-empty wound bands covering `[0, max_damage]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WoundThresholds {
    max_damage: u32,
    /// `(tier, lower bound)` pairs; first lower bound is 0, all strictly increasing
    bands: Vec<(WoundTier, u32)>,
}

/// One band of a track as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoundBand {
    pub tier: WoundTier,
    /// Lowest damage count that falls in this band
    pub lower: u32,
    /// Highest damage count that falls in this band (inclusive)
    pub upper: u32,
}

impl WoundBand {
    /// Number of damage counts that fall in the band.
    pub fn cell_count(&self) -> u32 {
        self.upper - self.lower + 1
    }

    pub fn contains(&self, count: u32) -> bool {
        (self.lower..=self.upper).contains(&count)
    }
}

impl WoundThresholds {
    /// Standard 40-point track: ten bands of four, Light through Mortal 6.
    pub fn standard() -> Self {
        let bands = WoundTier::standard()
            .into_iter()
            .zip((0..STANDARD_MAX_DAMAGE).step_by(4))
            .collect();
        Self {
            max_damage: STANDARD_MAX_DAMAGE,
            bands,
        }
    }

    /// Build thresholds by applying band ratios to `max_damage`.
    ///
    /// Each band's lower bound is `round(max_damage * sum of preceding ratios)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTierConfiguration` if:
    /// - `max_damage` is zero or no bands are given
    /// - a ratio is not a positive finite number
    /// - the ratios do not sum to 1.0
    /// - tiers are not strictly increasing in severity
    /// - rounding leaves a band with no damage cells
    pub fn from_ratios(max_damage: u32, bands: &[TierBandConfig]) -> Result<Self, DomainError> {
        ensure_capacity(max_damage)?;
        if bands.is_empty() {
            return Err(DomainError::invalid_tiers("At least one wound band is required"));
        }

        if let Some(band) = bands.iter().find(|b| !b.ratio.is_finite() || b.ratio <= 0.0) {
            return Err(DomainError::invalid_tiers(format!(
                "Band {} has a non-positive ratio {}",
                band.tier, band.ratio
            )));
        }

        let total: f64 = bands.iter().map(|b| b.ratio).sum();
        if (total - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(DomainError::invalid_tiers(format!(
                "Band ratios must sum to 1.0, got {}",
                total
            )));
        }

        let mut cumulative = 0.0;
        let mut lower_bounds = Vec::with_capacity(bands.len());
        for band in bands {
            let lower = (f64::from(max_damage) * cumulative).round() as u32;
            lower_bounds.push((band.tier, lower));
            cumulative += band.ratio;
        }

        Self::from_lower_bounds(max_damage, lower_bounds)
    }

    /// Build thresholds from explicit `(tier, lower bound)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTierConfiguration` unless the first
    /// lower bound is 0, lower bounds and tiers are strictly increasing, and
    /// the last lower bound is at most `max_damage`.
    pub fn from_lower_bounds(
        max_damage: u32,
        bands: Vec<(WoundTier, u32)>,
    ) -> Result<Self, DomainError> {
        ensure_capacity(max_damage)?;

        match bands.first() {
            None => {
                return Err(DomainError::invalid_tiers("At least one wound band is required"))
            }
            Some((tier, lower)) if *lower != 0 => {
                return Err(DomainError::invalid_tiers(format!(
                    "First band {} must start at 0, starts at {}",
                    tier, lower
                )))
            }
            Some(_) => {}
        }

        if let Some((tier, _)) = bands.iter().find(|(tier, _)| !tier.in_range()) {
            return Err(DomainError::invalid_tiers(format!(
                "Tier {} is past Mortal {}",
                tier, MAX_MORTAL_LEVEL
            )));
        }

        for pair in bands.windows(2) {
            let ((prev_tier, prev_lower), (tier, lower)) = (pair[0], pair[1]);
            if tier <= prev_tier {
                return Err(DomainError::invalid_tiers(format!(
                    "Tier {} must be more severe than {}",
                    tier, prev_tier
                )));
            }
            if lower <= prev_lower {
                return Err(DomainError::invalid_tiers(format!(
                    "Band {} starting at {} leaves {} empty",
                    tier, lower, prev_tier
                )));
            }
        }

        if let Some((tier, lower)) = bands.last() {
            if *lower > max_damage {
                return Err(DomainError::invalid_tiers(format!(
                    "Band {} starts at {}, past max damage {}",
                    tier, lower, max_damage
                )));
            }
        }

        Ok(Self { max_damage, bands })
    }

    pub fn max_damage(&self) -> u32 {
        self.max_damage
    }

    /// Tier for a damage count.
    ///
    /// The last band is open upward, so any count at or past its lower bound
    /// maps to it.
    pub fn tier_for(&self, count: u32) -> WoundTier {
        let index = self.bands.partition_point(|(_, lower)| *lower <= count);
        // First lower bound is 0, so index >= 1 for every count
        self.bands[index.saturating_sub(1)].0
    }

    /// Bands in ascending order with their inclusive count ranges.
    pub fn bands(&self) -> impl Iterator<Item = WoundBand> + '_ {
        self.bands.iter().enumerate().map(move |(i, (tier, lower))| {
            let upper = self
                .bands
                .get(i + 1)
                .map(|(_, next)| next - 1)
                .unwrap_or(self.max_damage);
            WoundBand {
                tier: *tier,
                lower: *lower,
                upper,
            }
        })
    }
}

fn ensure_capacity(max_damage: u32) -> Result<(), DomainError> {
    if max_damage == 0 {
        return Err(DomainError::invalid_tiers("Max damage must be positive"));
    }
    Ok(())
}
