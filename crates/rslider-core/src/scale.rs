//! Tick positions for the axis scale.

use crate::config::RangeConfig;
use crate::constants::{DEFAULT_MAX_SCALE_MARKS, GRID_EPSILON};
use crate::value_space::ValueSpace;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMark {
    pub value: f64,
    pub coordinate_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePlan {
    pub tick_step: f64,
    pub marks: Vec<ScaleMark>,
}

#[derive(Clone, Copy, Debug)]
pub struct ScaleTickPlanner {
    max_marks: usize,
}

impl Default for ScaleTickPlanner {
    fn default() -> Self {
        Self {
            max_marks: DEFAULT_MAX_SCALE_MARKS,
        }
    }
}

impl ScaleTickPlanner {
    /// `max_marks` is the largest number of intervals; zero is treated as one.
    pub fn new(max_marks: usize) -> Self {
        Self {
            max_marks: max_marks.max(1),
        }
    }

    #[must_use]
    pub fn max_marks(&self) -> usize {
        self.max_marks
    }

    /// Tick step that keeps the interval count at or below `max_marks`.
    #[must_use]
    pub fn tick_step(&self, config: &RangeConfig) -> f64 {
        let natural = natural_intervals(config);
        let limit = self.max_marks as f64;
        if natural > limit {
            config.step_size * (natural / limit).ceil()
        } else {
            config.step_size
        }
    }

    /// Marks from `min_value` to `max_value` inclusive. The last mark is
    /// exactly `max_value` even when that is off the tick grid.
    #[must_use]
    pub fn plan(&self, config: &RangeConfig) -> ScalePlan {
        let space = ValueSpace::new(config);
        let tick_step = self.tick_step(config);
        let mark = |value: f64| ScaleMark {
            value,
            coordinate_percent: space.value_to_coordinate(value),
        };

        let mut marks = Vec::new();
        let mut k = 0_usize;
        loop {
            let value = config.min_value + k as f64 * tick_step;
            if value >= config.max_value - GRID_EPSILON * tick_step {
                break;
            }
            marks.push(mark(value));
            k += 1;
        }
        marks.push(mark(config.max_value));

        ScalePlan { tick_step, marks }
    }
}

/// Number of step intervals in the range, counting a truncated top step.
fn natural_intervals(config: &RangeConfig) -> f64 {
    (config.range() / config.step_size - GRID_EPSILON).ceil()
}
