//! Structured (non-text) filters.
//!
//! Each predicate is toggled independently and keeps its configured value
//! while disabled, so switching a filter back on restores the last setting.
//! All enabled predicates must pass.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TexlensError;
use crate::record::TextureRecord;

/// Default upper bound of the resolution range.
pub const DEFAULT_MAX_RESOLUTION: u32 = 8192;

/// A filter value together with its on/off switch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggle<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T> Toggle<T> {
    pub fn on(value: T) -> Self {
        Toggle {
            enabled: true,
            value,
        }
    }

    pub fn off(value: T) -> Self {
        Toggle {
            enabled: false,
            value,
        }
    }

    /// The value when enabled.
    pub fn active(&self) -> Option<&T> {
        self.enabled.then_some(&self.value)
    }
}

/// Inclusive resolution bounds on `max(width, height)`.
///
/// Bounds are normalized on construction: `min >= 0` and `max >= min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRange", into = "RawRange")]
pub struct ResolutionRange {
    min: u32,
    max: u32,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    #[serde(default)]
    min: i64,
    #[serde(default = "default_max")]
    max: i64,
}

fn default_max() -> i64 {
    DEFAULT_MAX_RESOLUTION as i64
}

impl From<RawRange> for ResolutionRange {
    fn from(raw: RawRange) -> Self {
        ResolutionRange::new(raw.min, raw.max)
    }
}

impl From<ResolutionRange> for RawRange {
    fn from(range: ResolutionRange) -> Self {
        RawRange {
            min: range.min as i64,
            max: range.max as i64,
        }
    }
}

impl ResolutionRange {
    /// Creates a range, clamping `min` to zero and `max` to at least `min`.
    pub fn new(min: i64, max: i64) -> Self {
        let min = clamp_u32(min);
        let max = clamp_u32(max).max(min);
        ResolutionRange { min, max }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, measure: u32) -> bool {
        self.min <= measure && measure <= self.max
    }
}

impl Default for ResolutionRange {
    fn default() -> Self {
        ResolutionRange {
            min: 0,
            max: DEFAULT_MAX_RESOLUTION,
        }
    }
}

fn clamp_u32(n: i64) -> u32 {
    n.clamp(0, u32::MAX as i64) as u32
}

/// Colour-space classes selectable in the structured filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpaceClass {
    /// No restriction.
    #[default]
    All,
    /// Gamma textures that are not normal maps.
    Srgb,
    /// Linear textures that are not normal maps.
    Linear,
    /// Normal maps, whatever their colour space.
    NormalMaps,
}

impl ColorSpaceClass {
    pub fn matches(self, record: &TextureRecord) -> bool {
        let info = &record.import;
        match self {
            ColorSpaceClass::All => true,
            ColorSpaceClass::Srgb => !info.is_linear && !info.is_normal_map,
            ColorSpaceClass::Linear => info.is_linear && !info.is_normal_map,
            ColorSpaceClass::NormalMaps => info.is_normal_map,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSpaceClass::All => "all",
            ColorSpaceClass::Srgb => "srgb",
            ColorSpaceClass::Linear => "linear",
            ColorSpaceClass::NormalMaps => "normal_maps",
        }
    }
}

impl FromStr for ColorSpaceClass {
    type Err = TexlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(ColorSpaceClass::All),
            "srgb" => Ok(ColorSpaceClass::Srgb),
            "linear" => Ok(ColorSpaceClass::Linear),
            "normal_maps" | "normal" | "normals" => Ok(ColorSpaceClass::NormalMaps),
            _ => Err(TexlensError::UnknownColorSpace(s.to_string())),
        }
    }
}

impl std::fmt::Display for ColorSpaceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independently toggled structured predicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredFilterConfig {
    pub resolution: Toggle<ResolutionRange>,
    /// `true` keeps crunched textures, `false` keeps the others.
    pub crunched: Toggle<bool>,
    pub color_space: Toggle<ColorSpaceClass>,
    /// Case-insensitive substring of the pixel format. Blank disables it.
    pub format: Toggle<String>,
}

impl StructuredFilterConfig {
    /// Returns `true` if no predicate would reject anything.
    pub fn is_inactive(&self) -> bool {
        !self.resolution.enabled
            && !self.crunched.enabled
            && !matches!(self.color_space.active(), Some(c) if *c != ColorSpaceClass::All)
            && self.format_needle().is_none()
    }

    /// Checks every enabled predicate against one record.
    pub fn matches(&self, record: &TextureRecord) -> bool {
        if let Some(range) = self.resolution.active() {
            if !range.contains(record.size_measure()) {
                return false;
            }
        }

        if let Some(&want_crunched) = self.crunched.active() {
            if record.import.is_crunched != want_crunched {
                return false;
            }
        }

        if let Some(class) = self.color_space.active() {
            if !class.matches(record) {
                return false;
            }
        }

        if let Some(needle) = self.format_needle() {
            if !record.format.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    fn format_needle(&self) -> Option<String> {
        self.format
            .active()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_lowercase())
    }
}

/// Applies the structured filters, preserving order.
pub fn filter_structured<'a, I>(
    records: I,
    config: &StructuredFilterConfig,
) -> Vec<&'a TextureRecord>
where
    I: IntoIterator<Item = &'a TextureRecord>,
{
    records.into_iter().filter(|r| config.matches(r)).collect()
}
