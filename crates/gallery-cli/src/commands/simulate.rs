//! Headless replay of gesture scripts
//!
//! Script format, one event per line:
//!
//! ```text
//! # comment
//! down 100
//! move 135
//! up
//! cancel
//! resize 640
//! goto 3
//! ```

use std::io::Read;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use gallery_core::{AppConfig, GalleryEngine, PointerEvent, RenderState, ResizeEvent};

use super::LayoutArgs;

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Pointer(PointerEvent),
    Resize(ResizeEvent),
    GoTo(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub text: String,
    pub step: Step,
}

#[derive(Serialize)]
struct Record<'a> {
    line: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<RenderState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let step = parse_step(text).with_context(|| format!("line {}: {}", idx + 1, text))?;
        lines.push(ScriptLine {
            line: idx + 1,
            text: text.to_string(),
            step,
        });
    }

    Ok(lines)
}

fn parse_step(text: &str) -> Result<Step> {
    let mut parts = text.split_whitespace();
    let command = parts.next().ok_or_else(|| anyhow!("empty step"))?;
    let arg = parts.next();
    if let Some(extra) = parts.next() {
        bail!("unexpected argument '{}'", extra);
    }

    let number = |name: &str| -> Result<f64> {
        let value = arg.ok_or_else(|| anyhow!("'{}' needs a value", name))?;
        value
            .parse::<f64>()
            .with_context(|| format!("'{}' is not a number", value))
    };
    // Release events do not need a position; the engine ignores it.
    let optional = |name: &str| -> Result<f64> {
        if arg.is_some() {
            number(name)
        } else {
            Ok(0.0)
        }
    };

    let step = match command.to_ascii_lowercase().as_str() {
        "down" => Step::Pointer(PointerEvent::down(number("down")?)),
        "move" => Step::Pointer(PointerEvent::moved(number("move")?)),
        "up" => Step::Pointer(PointerEvent::up(optional("up")?)),
        "cancel" => Step::Pointer(PointerEvent::cancel(optional("cancel")?)),
        "resize" => Step::Resize(ResizeEvent {
            new_viewport_width: number("resize")?,
        }),
        "goto" => {
            let value = arg.ok_or_else(|| anyhow!("'goto' needs a slide index"))?;
            Step::GoTo(
                value
                    .parse::<usize>()
                    .with_context(|| format!("'{}' is not a slide index", value))?,
            )
        }
        other => bail!("unknown command '{}'", other),
    };

    Ok(step)
}

/// Apply one step; rejected steps leave the engine untouched
pub fn apply(engine: &mut GalleryEngine, step: &Step) -> gallery_core::Result<RenderState> {
    match step {
        Step::Pointer(event) => engine.handle(*event),
        Step::Resize(event) => engine.handle_resize(*event),
        Step::GoTo(slide) => Ok(engine.go_to(*slide)),
    }
}

pub fn run(config: &AppConfig, script: &str, layout: &LayoutArgs, json: bool) -> Result<()> {
    let source = if script == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(script).with_context(|| format!("reading {}", script))?
    };
    let steps = parse_script(&source)?;

    let mut engine = GalleryEngine::new(layout.gallery_config(config), layout.width)?;
    print_record(
        &Record {
            line: 0,
            input: "init",
            state: Some(engine.render_state()),
            error: None,
        },
        json,
    )?;

    for step in &steps {
        let record = match apply(&mut engine, &step.step) {
            Ok(state) => Record {
                line: step.line,
                input: &step.text,
                state: Some(state),
                error: None,
            },
            Err(e) => Record {
                line: step.line,
                input: &step.text,
                state: None,
                error: Some(e.to_string()),
            },
        };
        print_record(&record, json)?;
    }

    Ok(())
}

fn print_record(record: &Record<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(record)?);
        return Ok(());
    }

    match (&record.state, &record.error) {
        (Some(state), _) => println!(
            "{:>4}  {:<14} offset={:>9.1}px slide={:<3} transition={:<5} dragging={}",
            record.line,
            record.input,
            state.offset_px,
            state.current_slide,
            state.transition_enabled,
            state.dragging
        ),
        (None, Some(error)) => println!(
            "{:>4}  {:<14} rejected: {}",
            record.line, record.input, error
        ),
        (None, None) => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{GalleryConfig, PointerKind};

    #[test]
    fn test_parse_script() {
        let script = "\
# drag left past the threshold, then release
down 100
move 60

up
resize 400
goto 1
cancel 12.5
";
        let lines = parse_script(script).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].line, 2);
        assert_eq!(lines[0].step, Step::Pointer(PointerEvent::down(100.0)));
        assert_eq!(lines[2].step, Step::Pointer(PointerEvent::up(0.0)));
        assert_eq!(
            lines[3].step,
            Step::Resize(ResizeEvent {
                new_viewport_width: 400.0
            })
        );
        assert_eq!(lines[4].step, Step::GoTo(1));
        match lines[5].step {
            Step::Pointer(event) => {
                assert_eq!(event.kind, PointerKind::Cancel);
                assert_eq!(event.pointer_x, 12.5);
            }
            ref other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = parse_script("down 1\nfling 3\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));

        assert!(parse_script("move").is_err());
        assert!(parse_script("down abc").is_err());
        assert!(parse_script("goto -1").is_err());
        assert!(parse_script("down 1 2").is_err());
    }

    #[test]
    fn test_replay_drag_and_release() {
        let mut engine =
            GalleryEngine::new(GalleryConfig::new(5).with_initial_slide(2), 300.0).unwrap();
        let mut last = engine.render_state();
        for line in parse_script("down 100\nmove 60\nup\n").unwrap() {
            last = apply(&mut engine, &line.step).unwrap();
        }
        assert_eq!(last.current_slide, 3);
        assert!((last.offset_px + 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_replay_reports_rejections() {
        let mut engine = GalleryEngine::new(GalleryConfig::new(3), 300.0).unwrap();
        let steps = parse_script("down 10\ndown 20\nresize 0\n").unwrap();
        assert!(apply(&mut engine, &steps[0].step).is_ok());
        assert!(apply(&mut engine, &steps[1].step).is_err());
        assert!(apply(&mut engine, &steps[2].step).is_err());
        assert!(engine.is_dragging());
    }
}
