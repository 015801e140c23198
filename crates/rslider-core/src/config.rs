//! Slider configuration values.
//!
//! A [`SliderConfig`] is replaced wholesale on every reconfiguration; partial
//! updates arrive as [`SliderOptions`] and are merged then validated before
//! they take effect.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("maxValue ({max}) must be greater than minValue ({min})")]
    EmptyRange { min: f64, max: f64 },
    #[error("stepSize must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("handlerCount must be at least 1")]
    NoHandlers,
    #[error("handlerCount must be at most {max}, got {count}")]
    TooManyHandlers { count: usize, max: usize },
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("handlerRadius must not be negative, got {0}")]
    NegativeRadius(f64),
}

/// Which set of defaults fills unspecified range fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    /// `-20..60` in steps of 10.
    #[default]
    Classic,
    /// `0..10` in steps of 1.
    Unit,
}

/// Numeric domain of the slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeConfig {
    pub min_value: f64,
    pub max_value: f64,
    pub step_size: f64,
    pub handler_count: usize,
    pub allow_reversed_values: bool,
}

impl RangeConfig {
    pub fn for_profile(profile: Profile) -> Self {
        let (min_value, max_value, step_size) = match profile {
            Profile::Classic => (CLASSIC_MIN_VALUE, CLASSIC_MAX_VALUE, CLASSIC_STEP_SIZE),
            Profile::Unit => (UNIT_MIN_VALUE, UNIT_MAX_VALUE, UNIT_STEP_SIZE),
        };
        Self {
            min_value,
            max_value,
            step_size,
            handler_count: DEFAULT_HANDLER_COUNT,
            allow_reversed_values: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_value.is_finite() {
            return Err(ConfigError::NonFinite("minValue"));
        }
        if !self.max_value.is_finite() {
            return Err(ConfigError::NonFinite("maxValue"));
        }
        if !self.step_size.is_finite() {
            return Err(ConfigError::NonFinite("stepSize"));
        }
        if self.max_value <= self.min_value {
            return Err(ConfigError::EmptyRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.step_size <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step_size));
        }
        if self.handler_count < 1 {
            return Err(ConfigError::NoHandlers);
        }
        if self.handler_count > MAX_HANDLER_COUNT {
            return Err(ConfigError::TooManyHandlers {
                count: self.handler_count,
                max: MAX_HANDLER_COUNT,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_value - self.min_value
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

/// Presentation flags. The engine never reads these; it only stores and
/// normalizes them for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub is_horizontal: bool,
    pub handler_radius: f64,
    pub show_progress: bool,
    pub show_scale: bool,
    pub show_tooltip: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            is_horizontal: true,
            handler_radius: DEFAULT_HANDLER_RADIUS,
            show_progress: false,
            show_scale: true,
            show_tooltip: true,
        }
    }
}

/// Effective configuration as returned by `config()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(flatten)]
    pub range: RangeConfig,
    #[serde(flatten)]
    pub view: ViewOptions,
}

impl SliderConfig {
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            range: RangeConfig::for_profile(profile),
            view: ViewOptions::default(),
        }
    }

    /// Overlay `options` onto a copy of `self` without validating.
    #[must_use]
    pub fn merged(&self, options: &SliderOptions) -> Self {
        let mut out = *self;
        let r = &mut out.range;
        if let Some(v) = options.min_value {
            r.min_value = v;
        }
        if let Some(v) = options.max_value {
            r.max_value = v;
        }
        if let Some(v) = options.step_size {
            r.step_size = v;
        }
        if let Some(v) = options.handler_count {
            r.handler_count = v;
        }
        if let Some(v) = options.allow_reversed_values {
            r.allow_reversed_values = v;
        }
        let v = &mut out.view;
        if let Some(x) = options.is_horizontal {
            v.is_horizontal = x;
        }
        if let Some(x) = options.handler_radius {
            v.handler_radius = x;
        }
        if let Some(x) = options.show_progress {
            v.show_progress = x;
        }
        if let Some(x) = options.show_scale {
            v.show_scale = x;
        }
        if let Some(x) = options.show_tooltip {
            v.show_tooltip = x;
        }
        out
    }

    /// Validate and return the normalized form.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        self.range.validate()?;
        if !self.view.handler_radius.is_finite() {
            return Err(ConfigError::NonFinite("handlerRadius"));
        }
        if self.view.handler_radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.view.handler_radius));
        }
        if self.range.handler_count > MAX_PROGRESS_HANDLERS {
            self.view.show_progress = false;
        }
        Ok(self)
    }
}

/// Partial configuration; absent fields keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reversed_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_horizontal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_tooltip: Option<bool>,
}
