//! The slider facade front-ends talk to.
//!
//! `RangeSlider` ties the configuration, the handle set (with its change
//! notifier), the drag state machine and the cached scale plan together, and
//! is the only type the web and native front-ends hold on to.

use crate::config::{ConfigError, Profile, SliderConfig, SliderOptions};
use crate::handles::HandleSet;
use crate::interaction::{nearest_index, DragSession, InteractionController, PointerTarget};
use crate::notifier::ListenerId;
use crate::progress::progress_span;
use crate::scale::{ScalePlan, ScaleTickPlanner};

#[derive(Debug)]
pub struct RangeSlider {
    config: SliderConfig,
    handles: HandleSet,
    controller: InteractionController,
    planner: ScaleTickPlanner,
    scale: ScalePlan,
}

impl RangeSlider {
    pub fn new(options: &SliderOptions) -> Self {
        Self::with_profile(options, Profile::default())
    }

    /// Build from `options` over the given defaults. Invalid options do not
    /// fail construction; the profile defaults are used instead.
    pub fn with_profile(options: &SliderOptions, profile: Profile) -> Self {
        let defaults = SliderConfig::for_profile(profile);
        let config = match defaults.merged(options).normalized() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[config] {}; falling back to {:?} defaults", e, profile);
                defaults
            }
        };
        let planner = ScaleTickPlanner::default();
        Self {
            handles: HandleSet::new(config.range),
            controller: InteractionController::new(),
            scale: planner.plan(&config.range),
            planner,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    /// Merge `options` into the current configuration.
    ///
    /// On error nothing changes. A change to any range field reconfigures the
    /// handles (publishing once) and rebuilds the scale plan.
    pub fn set_config(&mut self, options: &SliderOptions) -> Result<SliderConfig, ConfigError> {
        let next = self
            .config
            .merged(options)
            .normalized()
            .map_err(|e| {
                log::warn!("[config] rejected: {}", e);
                e
            })?;

        let range_changed = next.range != self.config.range;
        self.config = next;
        if range_changed {
            log::debug!("[config] range now {:?}", next.range);
            self.handles.reconfigure(next.range);
            self.controller.cancel_if_stale(self.handles.len());
            self.scale = self.planner.plan(&next.range);
        }
        Ok(next)
    }

    #[must_use]
    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.handles.value(index)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.handles.values()
    }

    pub fn set_value(&mut self, index: usize, value: f64) -> Option<f64> {
        self.handles.direct_set(index, value)
    }

    /// Set a value typed by the user. Unparseable text leaves the handle as
    /// it is and returns its current value.
    pub fn set_value_text(&mut self, index: usize, text: &str) -> Option<f64> {
        match parse_value_text(text) {
            Some(v) => self.handles.direct_set(index, v),
            None => {
                log::warn!("[input] rejected {:?} for handle {}", text, index);
                self.handles.value(index)
            }
        }
    }

    pub fn set_values(&mut self, values: &[f64]) -> &[f64] {
        self.handles.set_values(values)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[f64]) + 'static) -> ListenerId {
        self.handles.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.handles.unsubscribe(id)
    }

    /// Release every listener, e.g. when the host tears the control down.
    pub fn clear_listeners(&mut self) {
        self.handles.notifier_mut().clear();
    }

    pub fn press(&mut self, target: PointerTarget) -> Option<usize> {
        self.controller.press(target, &mut self.handles)
    }

    pub fn pointer_move(&mut self, coord: f64) -> bool {
        self.controller.pointer_move(coord, &mut self.handles)
    }

    pub fn release(&mut self) -> Option<usize> {
        self.controller.release()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.controller.session()
    }

    #[must_use]
    pub fn scale_plan(&self) -> &ScalePlan {
        &self.scale
    }

    /// Move the handle nearest to scale mark `mark` onto that mark's value.
    pub fn select_scale_mark(&mut self, mark: usize) -> Option<f64> {
        let value = self.scale.marks.get(mark)?.value;
        let index = nearest_index(self.handles.values(), value)?;
        self.handles.direct_set(index, value)
    }

    #[must_use]
    pub fn progress_span(&self) -> Option<(f64, f64)> {
        progress_span(self.handles.values(), self.handles.space())
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(&SliderOptions::default())
    }
}

/// Parse `[-]digits[.digits]`, surrounding whitespace allowed.
#[must_use]
pub fn parse_value_text(text: &str) -> Option<f64> {
    let t = text.trim();
    let unsigned = t.strip_prefix('-').unwrap_or(t);
    let (int, frac) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || !frac.map_or(true, digits) {
        return None;
    }
    t.parse().ok()
}
