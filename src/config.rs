// src/config.rs

use std::ops::RangeInclusive;

use strum_macros::{Display, EnumIter};

use crate::constants::{PANEL_HEIGHT, VALUE_MAX, VALUE_MIN};

/// How the panel folds a new announcement set into its editable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum MergePolicy {
    /// Every announcement change replaces all values with the announced
    /// defaults. Slider edits are lost whenever a site mounts or unmounts.
    Replace,
    /// New labels are added with their default, edited values are kept and
    /// labels are never retracted.
    #[default]
    Preserve,
}

/// Runtime settings for a [`TweakPanel`](crate::ui::panel::TweakPanel).
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub panel_height: f32,
    pub value_range: RangeInclusive<f32>,
    pub merge_policy: MergePolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_height: PANEL_HEIGHT,
            value_range: VALUE_MIN..=VALUE_MAX,
            merge_policy: MergePolicy::default(),
        }
    }
}

impl PanelConfig {
    pub fn with_panel_height(mut self, height: f32) -> Self {
        self.panel_height = height;
        self
    }

    /// Panics if `range` is empty or not finite.
    pub fn with_value_range(mut self, range: RangeInclusive<f32>) -> Self {
        assert!(
            range.start().is_finite() && range.end().is_finite() && range.start() <= range.end(),
            "invalid value range {:?}",
            range
        );
        self.value_range = range;
        self
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }
}
