//! Replays a gesture script against a slider and logs every published value
//! vector.
//!
//! Usage: `rslider-native [--unit] [SCRIPT]`. Reads stdin when no script path
//! is given. `RUST_LOG=debug` shows the cascade.

mod script;

use std::io::Read;

use anyhow::Context;
use rslider_core::{Profile, RangeSlider, SliderOptions};

use crate::script::{parse_script, Command};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut profile = Profile::Classic;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--unit" => profile = Profile::Unit,
            "--classic" => profile = Profile::Classic,
            _ if path.is_none() => path = Some(arg),
            _ => anyhow::bail!("unexpected argument `{}`", arg),
        }
    }

    let source = match &path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("reading script from stdin")?;
            s
        }
    };
    let commands = parse_script(&source)?;

    let mut slider = RangeSlider::with_profile(&SliderOptions::default(), profile);
    slider.subscribe(|values| log::info!("[values] {:?}", values));
    log::info!("[config] {:?}", slider.config());

    for (line, command) in commands {
        run(&mut slider, line, command);
    }
    log::info!("[done] final values {:?}", slider.values());
    Ok(())
}

fn run(slider: &mut RangeSlider, line: usize, command: Command) {
    match command {
        Command::Press(target) => {
            if slider.press(target).is_none() {
                log::info!("[press] line {}: {:?} grabbed nothing", line, target);
            }
        }
        Command::Move(coord) => {
            if !slider.pointer_move(coord) {
                log::info!("[move] line {}: no active drag", line);
            }
        }
        Command::Release => {
            slider.release();
        }
        Command::Set(index, text) => {
            if slider.set_value_text(index, &text).is_none() {
                log::warn!("[set] line {}: no handle {}", line, index);
            }
        }
        Command::Values(values) => {
            slider.set_values(&values);
        }
        Command::Config(options) => {
            if let Ok(cfg) = slider.set_config(&options) {
                log::info!("[config] {:?}", cfg);
            }
        }
        Command::Mark(mark) => {
            if slider.select_scale_mark(mark).is_none() {
                log::warn!("[mark] line {}: no scale mark {}", line, mark);
            }
        }
        Command::Scale => {
            let plan = slider.scale_plan();
            let marks: Vec<f64> = plan.marks.iter().map(|m| m.value).collect();
            log::info!("[scale] step {} marks {:?}", plan.tick_step, marks);
        }
        Command::Progress => match slider.progress_span() {
            Some((from, to)) => log::info!("[progress] {:.2}% .. {:.2}%", from, to),
            None => log::info!("[progress] not shown for {} handles", slider.values().len()),
        },
    }
}
