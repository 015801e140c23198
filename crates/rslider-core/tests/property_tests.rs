//! Property tests for the handle-set invariants.
//!
//! Uses proptest to verify, over random ranges and gesture sequences:
//! 1. Ordering: values stay strictly increasing
//! 2. Bounds: every value stays inside `[min_value, max_value]`
//! 3. Grid: every value is `min + k * step` or exactly `max_value`
//! 4. Idempotence: repeating an update changes nothing
//! 5. Round trip: coordinate -> value -> coordinate returns the input

use proptest::prelude::*;
use rslider_core::{HandleSet, RangeConfig, ValueSpace};

// ── Strategies ───────────────────────────────────────────────────────

/// A valid range with enough grid positions for every handle. About a
/// third of the ranges end half a step past the last full step.
fn arb_config() -> impl Strategy<Value = RangeConfig> {
    (
        -50i32..50,
        prop::sample::select(vec![0.5, 1.0, 2.0, 2.5, 5.0, 10.0]),
        1usize..5,
        0usize..30,
        prop::bool::weighted(0.33),
    )
        .prop_map(|(min, step, handlers, extra, truncated)| {
            let min = f64::from(min);
            let steps = (handlers + extra) as f64;
            let top = if truncated { step / 2.0 } else { 0.0 };
            RangeConfig {
                min_value: min,
                max_value: min + steps * step - top,
                step_size: step,
                handler_count: handlers,
                allow_reversed_values: false,
            }
        })
}

fn arb_ops() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0usize..8, -20.0..120.0_f64), 1..40)
}

// ── Helpers ──────────────────────────────────────────────────────────

fn on_grid(cfg: &RangeConfig, v: f64) -> bool {
    if v == cfg.max_value {
        return true;
    }
    let k = (v - cfg.min_value) / cfg.step_size;
    (k - k.round()).abs() < 1e-6
}

fn check_invariants(cfg: &RangeConfig, values: &[f64]) -> Result<(), TestCaseError> {
    prop_assert_eq!(values.len(), cfg.handler_count);
    for w in values.windows(2) {
        prop_assert!(w[0] < w[1], "not strictly increasing: {:?}", values);
    }
    for &v in values {
        prop_assert!(
            v >= cfg.min_value && v <= cfg.max_value,
            "{} outside [{}, {}]",
            v,
            cfg.min_value,
            cfg.max_value
        );
        prop_assert!(on_grid(cfg, v), "{} is off the grid of {:?}", v, cfg);
    }
    Ok(())
}

// ── 1-3. Ordering, bounds and grid ───────────────────────────────────

proptest! {
    #[test]
    fn initial_values_hold_invariants(cfg in arb_config()) {
        let set = HandleSet::new(cfg);
        check_invariants(&cfg, set.values())?;
    }

    /// Every pointer update leaves the set ordered, in range and on the grid.
    #[test]
    fn updates_preserve_invariants(cfg in arb_config(), ops in arb_ops()) {
        let mut set = HandleSet::new(cfg);
        for (i, coord) in ops {
            let index = i % cfg.handler_count;
            set.request_update(index, coord);
            check_invariants(&cfg, set.values())?;
        }
    }

    /// Absolute values go through the same constraints as coordinates.
    #[test]
    fn direct_sets_preserve_invariants(
        cfg in arb_config(),
        ops in prop::collection::vec((0usize..8, -100.0..100.0_f64), 1..30),
    ) {
        let mut set = HandleSet::new(cfg);
        for (i, value) in ops {
            let index = i % cfg.handler_count;
            let accepted = set.direct_set(index, value);
            prop_assert_eq!(accepted, set.value(index));
            check_invariants(&cfg, set.values())?;
        }
    }
}

// ── 4. Idempotence and exact grid values ─────────────────────────────

proptest! {
    #[test]
    fn repeated_update_is_a_fixed_point(
        cfg in arb_config(),
        ops in arb_ops(),
        last in (0usize..8, -20.0..120.0_f64),
    ) {
        let mut set = HandleSet::new(cfg);
        for (i, coord) in ops {
            set.request_update(i % cfg.handler_count, coord);
        }
        let index = last.0 % cfg.handler_count;
        let first = set.request_update(index, last.1).to_vec();
        let second = set.request_update(index, last.1).to_vec();
        prop_assert_eq!(first, second);
    }

    /// A lone handle set to a grid value holds exactly that value.
    #[test]
    fn grid_values_are_accepted_exactly(cfg in arb_config(), k in 0usize..40) {
        let cfg = RangeConfig { handler_count: 1, ..cfg };
        let full_steps = ((cfg.max_value - cfg.min_value) / cfg.step_size + 1e-9).floor() as usize;
        let k = k.min(full_steps);
        let target = cfg.min_value + k as f64 * cfg.step_size;

        let mut set = HandleSet::new(cfg);
        prop_assert_eq!(set.direct_set(0, target), Some(target));
        prop_assert_eq!(set.direct_set(0, cfg.max_value), Some(cfg.max_value));
    }
}

// ── 5. Coordinate round trip ─────────────────────────────────────────

/// Valid bounds off the step grid. The span is kept within a few orders of
/// magnitude of `min` so the 1e-9 tolerance is above f64 rounding.
fn arb_bounds() -> impl Strategy<Value = RangeConfig> {
    (-1.0e3..1.0e3_f64, 1.0..1.0e6_f64).prop_map(|(min, span)| RangeConfig {
        min_value: min,
        max_value: min + span,
        step_size: span / 10.0,
        handler_count: 1,
        allow_reversed_values: false,
    })
}

proptest! {
    #[test]
    fn coordinate_round_trip(cfg in prop_oneof![arb_config(), arb_bounds()], p in 0.0..=100.0_f64) {
        let space = ValueSpace::new(&cfg);
        let back = space.value_to_coordinate(space.coordinate_to_value(p));
        prop_assert!((back - p).abs() < 1e-9, "{} came back as {} for {:?}", p, back, cfg);
    }
}
