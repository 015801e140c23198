//! Line-oriented gesture scripts.
//!
//! ```text
//! # comments and blank lines are ignored
//! config handlerCount=2 showProgress=true
//! press track 60
//! move 75.5
//! release
//! set 0 3
//! values 2 5
//! mark 4
//! scale
//! progress
//! ```

use rslider_core::{PointerTarget, SliderOptions};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Press(PointerTarget),
    Move(f64),
    Release,
    /// Typed value for one handle, validated like a text input.
    Set(usize, String),
    Values(Vec<f64>),
    Config(SliderOptions),
    Mark(usize),
    Scale,
    Progress,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{word}`")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: `{command}` expects {expected}")]
    Usage {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: `{text}` is not a valid {kind}")]
    BadNumber {
        line: usize,
        text: String,
        kind: &'static str,
    },
    #[error("line {line}: unknown config key `{key}`")]
    UnknownKey { line: usize, key: String },
}

/// Parse a whole script. `line` numbers in errors are 1-based.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut out = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        out.push((line, parse_line(line, text)?));
    }
    Ok(out)
}

pub fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let mut words = text.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ScriptError::UnknownCommand {
            line,
            word: String::new(),
        });
    };
    let rest: Vec<&str> = words.collect();
    let usage = |command, expected| ScriptError::Usage {
        line,
        command,
        expected,
    };

    match head {
        "press" => match rest.as_slice() {
            ["handle", i] => Ok(Command::Press(PointerTarget::Handle(index(line, i)?))),
            ["track", c] => Ok(Command::Press(PointerTarget::Track(number(line, c)?))),
            ["outside"] => Ok(Command::Press(PointerTarget::Outside)),
            _ => Err(usage("press", "`handle <i>`, `track <percent>` or `outside`")),
        },
        "move" => match rest.as_slice() {
            [c] => Ok(Command::Move(number(line, c)?)),
            _ => Err(usage("move", "one coordinate")),
        },
        "release" if rest.is_empty() => Ok(Command::Release),
        "set" => match rest.as_slice() {
            [i, v] => Ok(Command::Set(index(line, i)?, (*v).to_string())),
            _ => Err(usage("set", "`<index> <value>`")),
        },
        "values" if !rest.is_empty() => rest
            .iter()
            .map(|w| number(line, w))
            .collect::<Result<_, _>>()
            .map(Command::Values),
        "config" if !rest.is_empty() => {
            let mut options = SliderOptions::default();
            for pair in rest {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| usage("config", "`key=value` pairs"))?;
                apply_option(line, &mut options, key, value)?;
            }
            Ok(Command::Config(options))
        }
        "mark" => match rest.as_slice() {
            [i] => Ok(Command::Mark(index(line, i)?)),
            _ => Err(usage("mark", "one mark index")),
        },
        "scale" if rest.is_empty() => Ok(Command::Scale),
        "progress" if rest.is_empty() => Ok(Command::Progress),
        "release" => Err(usage("release", "no arguments")),
        "scale" => Err(usage("scale", "no arguments")),
        "progress" => Err(usage("progress", "no arguments")),
        "values" => Err(usage("values", "at least one value")),
        "config" => Err(usage("config", "at least one `key=value` pair")),
        other => Err(ScriptError::UnknownCommand {
            line,
            word: other.to_string(),
        }),
    }
}

fn apply_option(
    line: usize,
    options: &mut SliderOptions,
    key: &str,
    value: &str,
) -> Result<(), ScriptError> {
    match key {
        "minValue" => options.min_value = Some(number(line, value)?),
        "maxValue" => options.max_value = Some(number(line, value)?),
        "stepSize" => options.step_size = Some(number(line, value)?),
        "handlerCount" => options.handler_count = Some(index(line, value)?),
        "allowReversedValues" => options.allow_reversed_values = Some(flag(line, value)?),
        "isHorizontal" => options.is_horizontal = Some(flag(line, value)?),
        "handlerRadius" => options.handler_radius = Some(number(line, value)?),
        "showProgress" => options.show_progress = Some(flag(line, value)?),
        "showScale" => options.show_scale = Some(flag(line, value)?),
        "showTooltip" => options.show_tooltip = Some(flag(line, value)?),
        _ => {
            return Err(ScriptError::UnknownKey {
                line,
                key: key.to_string(),
            })
        }
    }
    Ok(())
}

fn number(line: usize, text: &str) -> Result<f64, ScriptError> {
    text.parse().map_err(|_| ScriptError::BadNumber {
        line,
        text: text.to_string(),
        kind: "number",
    })
}

fn index(line: usize, text: &str) -> Result<usize, ScriptError> {
    text.parse().map_err(|_| ScriptError::BadNumber {
        line,
        text: text.to_string(),
        kind: "index",
    })
}

fn flag(line: usize, text: &str) -> Result<bool, ScriptError> {
    text.parse().map_err(|_| ScriptError::BadNumber {
        line,
        text: text.to_string(),
        kind: "boolean",
    })
}
