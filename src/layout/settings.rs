//! Layout settings and spacing thresholds.
//!
//! Settings travel as a mergeable map so that a parent stage can configure
//! a column in several passes. The six spacing thresholds carry no defaults
//! at this layer: extracting [`SpacingParams`] from an incomplete map is an
//! error, never a silent fallback.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Recognized layout setting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// Gap above which two blocks are treated as separate flows
    LineSeparateThreshold,
    /// Width ratio below which a line is considered intentionally broken
    LineBreakWidthRatio,
    /// Trailing free-space ratio above which a line gets a hard break
    LineBreakFreeSpaceRatio,
    /// Maximum left-edge spread for a block to count as left-aligned
    LeftAlignedThreshold,
    /// Maximum right-edge spread for a block to count as right-aligned
    RightAlignedThreshold,
    /// Maximum center spread for a block to count as center-aligned
    CenterAlignedThreshold,
}

impl SettingKey {
    /// The six spacing thresholds required before rendering.
    pub const SPACING: [SettingKey; 6] = [
        SettingKey::LineSeparateThreshold,
        SettingKey::LineBreakWidthRatio,
        SettingKey::LineBreakFreeSpaceRatio,
        SettingKey::LeftAlignedThreshold,
        SettingKey::RightAlignedThreshold,
        SettingKey::CenterAlignedThreshold,
    ];

    /// Stable string name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::LineSeparateThreshold => "line_separate_threshold",
            SettingKey::LineBreakWidthRatio => "line_break_width_ratio",
            SettingKey::LineBreakFreeSpaceRatio => "line_break_free_space_ratio",
            SettingKey::LeftAlignedThreshold => "left_aligned_threshold",
            SettingKey::RightAlignedThreshold => "right_aligned_threshold",
            SettingKey::CenterAlignedThreshold => "center_aligned_threshold",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mergeable map of layout settings.
///
/// Each column owns its own copy; configuration is merged in, never shared
/// by reference across columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    values: HashMap<SettingKey, f32>,
}

impl Settings {
    /// Create an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings prefilled with the thresholds the original conversion tool
    /// ships with. Callers that tune layout supply their own values instead.
    pub fn recommended() -> Self {
        Self::new()
            .line_separate_threshold(5.0)
            .line_break_width_ratio(0.5)
            .line_break_free_space_ratio(0.1)
            .left_aligned_threshold(1.0)
            .right_aligned_threshold(1.0)
            .center_aligned_threshold(2.0)
    }

    /// Set a value for a key.
    pub fn set(&mut self, key: SettingKey, value: f32) {
        self.values.insert(key, value);
    }

    /// Get the value for a key, if configured.
    pub fn get(&self, key: SettingKey) -> Option<f32> {
        self.values.get(&key).copied()
    }

    /// Merge another settings map into this one; values from `other` win.
    pub fn merge(&mut self, other: &Settings) {
        for (key, value) in &other.values {
            self.values.insert(*key, *value);
        }
    }

    /// Set a value and return self.
    pub fn with(mut self, key: SettingKey, value: f32) -> Self {
        self.set(key, value);
        self
    }

    /// Set the flow-separation gap threshold.
    pub fn line_separate_threshold(self, value: f32) -> Self {
        self.with(SettingKey::LineSeparateThreshold, value)
    }

    /// Set the intentional-break width ratio.
    pub fn line_break_width_ratio(self, value: f32) -> Self {
        self.with(SettingKey::LineBreakWidthRatio, value)
    }

    /// Set the hard-break free-space ratio.
    pub fn line_break_free_space_ratio(self, value: f32) -> Self {
        self.with(SettingKey::LineBreakFreeSpaceRatio, value)
    }

    /// Set the left-alignment spread threshold.
    pub fn left_aligned_threshold(self, value: f32) -> Self {
        self.with(SettingKey::LeftAlignedThreshold, value)
    }

    /// Set the right-alignment spread threshold.
    pub fn right_aligned_threshold(self, value: f32) -> Self {
        self.with(SettingKey::RightAlignedThreshold, value)
    }

    /// Set the center-alignment spread threshold.
    pub fn center_aligned_threshold(self, value: f32) -> Self {
        self.with(SettingKey::CenterAlignedThreshold, value)
    }

    /// Number of configured keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no keys are configured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extract the six spacing thresholds.
    ///
    /// Fails with [`Error::MissingSetting`] naming the first absent key;
    /// no defaults are applied.
    pub fn spacing_params(&self) -> Result<SpacingParams> {
        let require = |key: SettingKey| self.get(key).ok_or(Error::MissingSetting(key));
        Ok(SpacingParams {
            line_separate_threshold: require(SettingKey::LineSeparateThreshold)?,
            line_break_width_ratio: require(SettingKey::LineBreakWidthRatio)?,
            line_break_free_space_ratio: require(SettingKey::LineBreakFreeSpaceRatio)?,
            left_aligned_threshold: require(SettingKey::LeftAlignedThreshold)?,
            right_aligned_threshold: require(SettingKey::RightAlignedThreshold)?,
            center_aligned_threshold: require(SettingKey::CenterAlignedThreshold)?,
        })
    }
}

/// The six spacing thresholds, extracted and validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingParams {
    /// Gap above which two blocks are treated as separate flows
    pub line_separate_threshold: f32,
    /// Width ratio below which a line is considered intentionally broken
    pub line_break_width_ratio: f32,
    /// Trailing free-space ratio above which a line gets a hard break
    pub line_break_free_space_ratio: f32,
    /// Maximum left-edge spread for left alignment
    pub left_aligned_threshold: f32,
    /// Maximum right-edge spread for right alignment
    pub right_aligned_threshold: f32,
    /// Maximum center spread for center alignment
    pub center_aligned_threshold: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_get() {
        let settings = Settings::new()
            .line_separate_threshold(5.0)
            .center_aligned_threshold(2.0);
        assert_eq!(settings.get(SettingKey::LineSeparateThreshold), Some(5.0));
        assert_eq!(settings.get(SettingKey::CenterAlignedThreshold), Some(2.0));
        assert_eq!(settings.get(SettingKey::LeftAlignedThreshold), None);
        assert_eq!(settings.len(), 2);
    }

    #[test]
    fn test_merge_later_values_win() {
        let mut settings = Settings::new().line_separate_threshold(5.0);
        let update = Settings::new()
            .line_separate_threshold(8.0)
            .left_aligned_threshold(1.0);
        settings.merge(&update);

        assert_eq!(settings.get(SettingKey::LineSeparateThreshold), Some(8.0));
        assert_eq!(settings.get(SettingKey::LeftAlignedThreshold), Some(1.0));
    }

    #[test]
    fn test_spacing_params_complete() {
        let params = Settings::recommended().spacing_params().unwrap();
        assert_eq!(params.line_separate_threshold, 5.0);
        assert_eq!(params.line_break_width_ratio, 0.5);
        assert_eq!(params.center_aligned_threshold, 2.0);
    }

    #[test]
    fn test_spacing_params_missing_key() {
        let settings = Settings::new().line_separate_threshold(5.0);
        let err = settings.spacing_params().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSetting(SettingKey::LineBreakWidthRatio)
        ));
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let settings = Settings::recommended();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
