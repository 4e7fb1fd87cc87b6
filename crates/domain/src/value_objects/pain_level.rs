//! Pain level value object
//!
//! Always within `0..=10`. Out-of-range input is clamped, never rejected, so
//! rendering code can index bars and bands without further checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pain on a 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "i64")]
pub struct PainLevel(u8);

impl PainLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Clamp an integer into range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Round then clamp; non-finite input becomes the midpoint of the scale
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self(5);
        }
        Self::clamped(value.round() as i64)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Severity band used for coloring the pain meter
    pub fn band(&self) -> PainBand {
        match self.0 {
            l if l > 7 => PainBand::Severe,
            l if l > 4 => PainBand::Moderate,
            _ => PainBand::Mild,
        }
    }

    /// Plain-language description of how this level feels
    pub fn description(&self) -> &'static str {
        match self.0 {
            0 => "No pain. Perfectly comfortable.",
            1..=3 => "Mild discomfort. Noticeable but easy to ignore.",
            4..=6 => "Moderate pain. Distracting ache, throbbing.",
            7..=8 => "Severe pain. Intense, sharp, difficult to focus.",
            _ => "Agonizing. Unbearable, immediate emergency.",
        }
    }

    /// Width of the pain meter fill; a sliver always shows
    pub fn meter_percent(&self) -> u8 {
        (self.0 * 10).max(5)
    }
}

impl Default for PainLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl From<i64> for PainLevel {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<PainLevel> for u8 {
    fn from(level: PainLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Coarse severity bands of the pain meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainBand {
    Mild,
    Moderate,
    Severe,
}
