//! Ordered handle values and the constrained update that moves them.

use crate::config::RangeConfig;
use crate::constants::{AXIS_MAX_PERCENT, AXIS_MIN_PERCENT};
use crate::notifier::{ChangeNotifier, ListenerId};
use crate::value_space::ValueSpace;
use smallvec::{smallvec, SmallVec};

/// Handle values in index order. Most sliders have one or two handles.
pub type Values = SmallVec<[f64; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cascade {
    Both,
    Up,
    Down,
}

/// Sole owner and mutator of the handle values.
#[derive(Debug)]
pub struct HandleSet {
    config: RangeConfig,
    space: ValueSpace,
    values: Values,
    notifier: ChangeNotifier,
}

impl HandleSet {
    /// `config` must already be validated.
    pub fn new(config: RangeConfig) -> Self {
        Self {
            space: ValueSpace::new(&config),
            values: Self::initial_values(&config),
            config,
            notifier: ChangeNotifier::new(),
        }
    }

    /// `min, min + step, min + 2*step, ...`, one per handle.
    ///
    /// Entries past `max_value` are clamped to it and nothing is re-balanced,
    /// so an over-long configuration starts with several handles at the max.
    pub fn initial_values(config: &RangeConfig) -> Values {
        (0..config.handler_count)
            .map(|i| {
                let v = config.min_value + i as f64 * config.step_size;
                if v > config.max_value {
                    config.max_value
                } else {
                    v
                }
            })
            .collect()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn space(&self) -> &ValueSpace {
        &self.space
    }

    #[must_use]
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[f64]) + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        &mut self.notifier
    }

    /// Coordinate range handle `index` may occupy without crossing the
    /// handles on either side of it.
    fn index_bounds(&self, index: usize) -> (f64, f64) {
        if self.config.allow_reversed_values {
            return (AXIS_MIN_PERCENT, AXIS_MAX_PERCENT);
        }
        let sp = self.space.step_size_percent();
        let above = self.values.len() - index - 1;
        (sp * index as f64, AXIS_MAX_PERCENT - sp * above as f64)
    }

    /// Quantize `percent` and clamp it to the bounds of `index`.
    fn normalize(&self, index: usize, percent: f64) -> f64 {
        let q = self.space.quantize(percent);
        let (lo, hi) = self.index_bounds(index);
        let c = if q > hi {
            hi
        } else if q < lo {
            lo
        } else {
            q
        };
        c.clamp(AXIS_MIN_PERCENT, AXIS_MAX_PERCENT)
    }

    /// Move handle `index` toward `raw_percent` and push neighbors out of the
    /// way, then publish the result once.
    ///
    /// Non-finite coordinates and unknown indices leave the set untouched and
    /// publish nothing.
    pub fn request_update(&mut self, index: usize, raw_percent: f64) -> &[f64] {
        if index >= self.values.len() {
            log::warn!("[handles] update for unknown handle {}", index);
            return &self.values;
        }
        if !raw_percent.is_finite() {
            log::warn!("[handles] ignoring non-finite coordinate for handle {}", index);
            return &self.values;
        }
        self.apply(index, raw_percent);
        self.notifier.publish(&self.values);
        &self.values
    }

    fn apply(&mut self, index: usize, raw_percent: f64) {
        let sp = self.space.step_size_percent();
        let last = self.values.len() - 1;
        let mut pending: SmallVec<[(usize, f64, Cascade); 4]> = smallvec![(
            index,
            raw_percent.clamp(AXIS_MIN_PERCENT, AXIS_MAX_PERCENT),
            Cascade::Both
        )];

        // Each entry moves strictly away from `index`, so at most one entry
        // per handle is ever queued.
        while let Some((i, raw, dir)) = pending.pop() {
            let value = self.space.grid_value(self.normalize(i, raw));
            self.values[i] = value;
            if self.config.allow_reversed_values {
                continue;
            }
            let coord = self.space.value_to_coordinate(value);
            if dir != Cascade::Down && i < last && self.values[i + 1] <= value {
                log::debug!("[cascade] push handle {} above {}", i + 1, value);
                pending.push((i + 1, coord + sp, Cascade::Up));
            }
            if dir != Cascade::Up && i > 0 && self.values[i - 1] >= value {
                log::debug!("[cascade] push handle {} below {}", i - 1, value);
                pending.push((i - 1, coord - sp, Cascade::Down));
            }
        }
    }

    /// Set handle `index` from an absolute value.
    ///
    /// Returns the value actually held afterwards, or `None` for an unknown
    /// index. A non-finite `value` is rejected and the current value returned.
    pub fn direct_set(&mut self, index: usize, value: f64) -> Option<f64> {
        let current = self.value(index)?;
        if !value.is_finite() {
            log::warn!("[handles] rejected value {} for handle {}", value, index);
            return Some(current);
        }
        let coord = self.space.value_to_coordinate(self.space.clamp_value(value));
        self.request_update(index, coord);
        self.value(index)
    }

    /// Apply `direct_set` semantics to each supplied index in order and
    /// publish once. Entries past the handle count and non-finite entries
    /// are skipped.
    pub fn set_values(&mut self, values: &[f64]) -> &[f64] {
        let mut applied = false;
        for (i, v) in values.iter().copied().enumerate().take(self.values.len()) {
            if !v.is_finite() {
                log::warn!("[handles] rejected value {} for handle {}", v, i);
                continue;
            }
            let coord = self.space.value_to_coordinate(self.space.clamp_value(v));
            self.apply(i, coord);
            applied = true;
        }
        if applied {
            self.notifier.publish(&self.values);
        }
        &self.values
    }

    /// Switch to a new (validated) configuration.
    ///
    /// A different handle count discards the current values; otherwise each
    /// value is re-snapped to the new grid and one ordering pass is applied.
    pub fn reconfigure(&mut self, config: RangeConfig) {
        let count_changed = config.handler_count != self.config.handler_count;
        self.config = config;
        self.space = ValueSpace::new(&config);

        if count_changed {
            self.values = Self::initial_values(&config);
            log::debug!("[handles] regenerated {} handles", self.values.len());
        } else {
            for i in 0..self.values.len() {
                let v = self.space.clamp_value(self.values[i]);
                let coord = self.normalize(i, self.space.value_to_coordinate(v));
                self.values[i] = self.space.grid_value(coord);
            }
            if !config.allow_reversed_values {
                let sp = self.space.step_size_percent();
                for i in 1..self.values.len() {
                    if self.values[i] <= self.values[i - 1] {
                        let coord = self.space.value_to_coordinate(self.values[i - 1]) + sp;
                        self.values[i] = self.space.grid_value(self.normalize(i, coord));
                    }
                }
            }
            log::debug!("[handles] re-quantized {:?}", self.values.as_slice());
        }
        self.notifier.publish(&self.values);
    }
}
