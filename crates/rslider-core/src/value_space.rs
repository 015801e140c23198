//! Conversions between axis coordinates (0–100 percent) and domain values.

use crate::config::RangeConfig;
use crate::constants::{AXIS_MAX_PERCENT, AXIS_MIN_PERCENT, GRID_EPSILON};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueSpace {
    min_value: f64,
    max_value: f64,
    step_size: f64,
    step_size_percent: f64,
}

impl ValueSpace {
    /// `config` must already be validated.
    pub fn new(config: &RangeConfig) -> Self {
        let range = config.range();
        Self {
            min_value: config.min_value,
            max_value: config.max_value,
            step_size: config.step_size,
            step_size_percent: (config.step_size / range).abs() * 100.0,
        }
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn step_size_percent(&self) -> f64 {
        self.step_size_percent
    }

    #[inline]
    #[must_use]
    pub fn value_to_coordinate(&self, value: f64) -> f64 {
        (value - self.min_value) / (self.max_value - self.min_value) * 100.0
    }

    #[inline]
    #[must_use]
    pub fn coordinate_to_value(&self, percent: f64) -> f64 {
        self.min_value + (self.max_value - self.min_value) * percent / 100.0
    }

    /// Snap a coordinate to the nearest grid line, halves rounding up.
    ///
    /// The grid is `0, s, 2s, ...` in percent plus the axis end at 100, which
    /// stands in for the truncated top step when `s` does not divide 100.
    #[must_use]
    pub fn quantize(&self, percent: f64) -> f64 {
        let sp = self.step_size_percent;
        let shifted = percent + sp / 2.0;
        let snapped = (shifted / sp + GRID_EPSILON).floor() * sp;

        let top_truncated = snapped + sp > AXIS_MAX_PERCENT + GRID_EPSILON * sp;
        if top_truncated && AXIS_MAX_PERCENT - percent <= percent - snapped {
            return AXIS_MAX_PERCENT;
        }
        snapped
    }

    /// Domain value of a grid coordinate.
    ///
    /// Computed from the step count rather than by scaling, so grid values are
    /// exact multiples of the step. Off-grid inputs fall to the grid line
    /// below them; anything at or past the axis end is `max_value`.
    #[must_use]
    pub fn grid_value(&self, percent: f64) -> f64 {
        if percent >= AXIS_MAX_PERCENT - GRID_EPSILON {
            return self.max_value;
        }
        if percent <= AXIS_MIN_PERCENT {
            return self.min_value;
        }
        let steps = (percent / self.step_size_percent + GRID_EPSILON).floor();
        (self.min_value + steps * self.step_size).min(self.max_value)
    }

    /// Clamp a domain value into `[min_value, max_value]`.
    #[inline]
    #[must_use]
    pub fn clamp_value(&self, value: f64) -> f64 {
        value.clamp(self.min_value, self.max_value)
    }
}
