// Integration tests for the RangeSlider facade: configuration accessors,
// value setters and the pointer entry points.

use rslider_core::constants::MAX_HANDLER_COUNT;
use rslider_core::{
    parse_value_text, ConfigError, PointerTarget, Profile, RangeSlider, SliderConfig,
    SliderOptions,
};
use std::cell::Cell;
use std::rc::Rc;

fn unit(options: SliderOptions) -> RangeSlider {
    RangeSlider::with_profile(&options, Profile::Unit)
}

fn publish_counter(slider: &mut RangeSlider) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    slider.subscribe(move |_| c.set(c.get() + 1));
    count
}

#[test]
fn classic_defaults() {
    let slider = RangeSlider::default();
    let cfg = slider.config();
    assert_eq!(cfg.range.min_value, -20.0);
    assert_eq!(cfg.range.max_value, 60.0);
    assert_eq!(cfg.range.step_size, 10.0);
    assert_eq!(cfg.range.handler_count, 1);
    assert!(cfg.view.is_horizontal);
    assert!(cfg.view.show_tooltip);
    assert!(!cfg.view.show_progress);
    assert_eq!(slider.values(), &[-20.0]);
}

#[test]
fn unit_profile_defaults() {
    let slider = unit(SliderOptions::default());
    assert_eq!(slider.config().range.min_value, 0.0);
    assert_eq!(slider.config().range.max_value, 10.0);
    assert_eq!(slider.config().range.step_size, 1.0);
}

#[test]
fn invalid_construction_options_fall_back_to_defaults() {
    let slider = RangeSlider::new(&SliderOptions {
        min_value: Some(10.0),
        max_value: Some(5.0),
        handler_count: Some(2),
        ..Default::default()
    });
    assert_eq!(slider.config(), SliderConfig::for_profile(Profile::Classic));
    assert_eq!(slider.values(), &[-20.0]);
}

#[test]
fn rejected_config_keeps_last_valid_one() {
    let mut slider = unit(SliderOptions::default());
    let before = slider.config();

    let err = slider.set_config(&SliderOptions {
        step_size: Some(0.0),
        ..Default::default()
    });
    assert_eq!(err, Err(ConfigError::NonPositiveStep(0.0)));

    let err = slider.set_config(&SliderOptions {
        max_value: Some(-1.0),
        ..Default::default()
    });
    assert_eq!(err, Err(ConfigError::EmptyRange { min: 0.0, max: -1.0 }));

    let err = slider.set_config(&SliderOptions {
        handler_count: Some(0),
        ..Default::default()
    });
    assert_eq!(err, Err(ConfigError::NoHandlers));

    assert_eq!(slider.config(), before);
}

#[test]
fn absurd_handler_count_is_rejected() {
    let mut slider = unit(SliderOptions::default());
    let err = slider.set_config(&SliderOptions {
        handler_count: Some(100_000_000),
        ..Default::default()
    });
    assert_eq!(
        err,
        Err(ConfigError::TooManyHandlers {
            count: 100_000_000,
            max: MAX_HANDLER_COUNT
        })
    );
    assert_eq!(slider.values(), &[0.0]);

    let cfg = slider
        .set_config(&SliderOptions {
            handler_count: Some(MAX_HANDLER_COUNT),
            max_value: Some(2000.0),
            ..Default::default()
        })
        .expect("count at the cap is valid");
    assert_eq!(cfg.range.handler_count, MAX_HANDLER_COUNT);
    assert_eq!(slider.values().len(), MAX_HANDLER_COUNT);
}

#[test]
fn handler_count_change_regenerates_and_publishes() {
    let mut slider = unit(SliderOptions::default());
    slider.set_value(0, 7.0);
    let publishes = publish_counter(&mut slider);

    let cfg = slider
        .set_config(&SliderOptions {
            handler_count: Some(3),
            ..Default::default()
        })
        .expect("valid config");
    assert_eq!(cfg.range.handler_count, 3);
    assert_eq!(slider.values(), &[0.0, 1.0, 2.0]);
    assert_eq!(publishes.get(), 1);
}

#[test]
fn view_only_change_does_not_touch_values() {
    let mut slider = unit(SliderOptions::default());
    slider.set_value(0, 4.0);
    let publishes = publish_counter(&mut slider);

    let cfg = slider
        .set_config(&SliderOptions {
            is_horizontal: Some(false),
            show_scale: Some(false),
            ..Default::default()
        })
        .expect("valid config");
    assert!(!cfg.view.is_horizontal);
    assert!(!cfg.view.show_scale);
    assert_eq!(slider.values(), &[4.0]);
    assert_eq!(publishes.get(), 0);
}

#[test]
fn progress_is_forced_off_beyond_two_handles() {
    let mut slider = unit(SliderOptions {
        show_progress: Some(true),
        ..Default::default()
    });
    assert!(slider.config().view.show_progress);

    let cfg = slider
        .set_config(&SliderOptions {
            handler_count: Some(3),
            show_progress: Some(true),
            ..Default::default()
        })
        .expect("valid config");
    assert!(!cfg.view.show_progress);
    assert_eq!(slider.progress_span(), None);
}

#[test]
fn progress_span_follows_handles() {
    let mut slider = unit(SliderOptions::default());
    slider.set_value(0, 5.0);
    assert_eq!(slider.progress_span(), Some((0.0, 50.0)));

    slider
        .set_config(&SliderOptions {
            handler_count: Some(2),
            ..Default::default()
        })
        .expect("valid config");
    slider.set_values(&[2.0, 7.0]);
    assert_eq!(slider.progress_span(), Some((20.0, 70.0)));
}

#[test]
fn typed_values_are_validated() {
    let mut slider = unit(SliderOptions::default());
    assert_eq!(slider.set_value_text(0, "3"), Some(3.0));
    assert_eq!(slider.set_value_text(0, "abc"), Some(3.0));
    assert_eq!(slider.set_value_text(0, "NaN"), Some(3.0));
    assert_eq!(slider.set_value_text(0, " 8 "), Some(8.0));
    assert_eq!(slider.set_value_text(0, "-1"), Some(0.0));
    assert_eq!(slider.set_value_text(0, "2.5"), Some(3.0));
    assert_eq!(slider.set_value_text(4, "2"), None);
}

#[test]
fn parse_value_text_accepts_plain_decimals_only() {
    assert_eq!(parse_value_text("42"), Some(42.0));
    assert_eq!(parse_value_text("-7"), Some(-7.0));
    assert_eq!(parse_value_text("0.25"), Some(0.25));
    assert_eq!(parse_value_text(""), None);
    assert_eq!(parse_value_text("-"), None);
    assert_eq!(parse_value_text("1e3"), None);
    assert_eq!(parse_value_text("1."), None);
    assert_eq!(parse_value_text(".5"), None);
    assert_eq!(parse_value_text("inf"), None);
    assert_eq!(parse_value_text("+3"), None);
}

#[test]
fn scale_mark_click_moves_nearest_handle() {
    let mut slider = unit(SliderOptions {
        handler_count: Some(2),
        ..Default::default()
    });
    slider.set_values(&[2.0, 8.0]);

    assert_eq!(slider.scale_plan().marks.len(), 11);
    assert_eq!(slider.select_scale_mark(9), Some(9.0));
    assert_eq!(slider.values(), &[2.0, 9.0]);
    assert_eq!(slider.select_scale_mark(99), None);
}

#[test]
fn scale_plan_tracks_configuration() {
    let mut slider = unit(SliderOptions::default());
    slider
        .set_config(&SliderOptions {
            max_value: Some(100.0),
            ..Default::default()
        })
        .expect("valid config");
    assert_eq!(slider.scale_plan().tick_step, 10.0);
    assert_eq!(slider.scale_plan().marks.len(), 11);
}

#[test]
fn drag_gesture_through_the_facade() {
    let mut slider = unit(SliderOptions {
        handler_count: Some(2),
        ..Default::default()
    });
    let publishes = publish_counter(&mut slider);

    assert_eq!(slider.press(PointerTarget::Track(85.0)), Some(1));
    assert_eq!(slider.values(), &[0.0, 9.0]);
    assert!(slider.pointer_move(42.0));
    assert_eq!(slider.values(), &[0.0, 4.0]);
    assert_eq!(slider.release(), Some(1));
    assert!(!slider.pointer_move(10.0));
    assert_eq!(publishes.get(), 2);
}

#[test]
fn shrinking_handle_count_ends_a_stale_drag() {
    let mut slider = unit(SliderOptions {
        handler_count: Some(2),
        ..Default::default()
    });
    slider.press(PointerTarget::Handle(1));
    assert!(slider.drag_session().is_some());

    slider
        .set_config(&SliderOptions {
            handler_count: Some(1),
            ..Default::default()
        })
        .expect("valid config");
    assert_eq!(slider.drag_session(), None);
}

#[test]
fn unsubscribed_listeners_stop_hearing_updates() {
    let mut slider = unit(SliderOptions::default());
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let id = slider.subscribe(move |_| c.set(c.get() + 1));

    slider.set_value(0, 1.0);
    assert!(slider.unsubscribe(id));
    slider.set_value(0, 2.0);
    assert_eq!(count.get(), 1);

    let again = publish_counter(&mut slider);
    slider.clear_listeners();
    slider.set_value(0, 3.0);
    assert_eq!(again.get(), 0);
}

#[test]
fn config_serializes_as_flat_camel_case() {
    let slider = unit(SliderOptions::default());
    let json = serde_json::to_value(slider.config()).expect("serializable");
    assert_eq!(json["minValue"], 0.0);
    assert_eq!(json["maxValue"], 10.0);
    assert_eq!(json["handlerCount"], 1);
    assert_eq!(json["isHorizontal"], true);
    assert_eq!(json["showScale"], true);
}

#[test]
fn partial_options_parse_from_json() {
    let options: SliderOptions =
        serde_json::from_str(r#"{"maxValue": 20, "handlerCount": 2, "showTooltip": false}"#)
            .expect("valid json");
    assert_eq!(options.max_value, Some(20.0));
    assert_eq!(options.handler_count, Some(2));
    assert_eq!(options.show_tooltip, Some(false));
    assert_eq!(options.min_value, None);

    let mut slider = unit(SliderOptions::default());
    let cfg = slider.set_config(&options).expect("valid config");
    assert_eq!(cfg.range.max_value, 20.0);
    assert_eq!(slider.values(), &[0.0, 1.0]);
}
