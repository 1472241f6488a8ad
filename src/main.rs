//! Pongy headless runner
//!
//! Runs the simulation without a window: both paddles are computer
//! controlled, draw calls go to the log, and a JSON summary is printed at the
//! end.
//!
//! Usage: `pongy [config.json] [--seed N] [--seconds S] [--demo]`

use std::process::ExitCode;

use glam::Vec2;
use serde::Serialize;

use pongy::consts::SIM_DT;
use pongy::sim::{GameEvent, Key, KeyEvent, MatchState, Side};
use pongy::{Color, Config, Controller, GameLoop, Renderer};

/// Renderer that only traces its calls
#[derive(Default)]
struct LogRenderer {
    frames: u64,
    rects: u64,
    lines: u64,
}

impl Renderer for LogRenderer {
    fn clear_frame(&mut self) {
        self.frames += 1;
        log::trace!("frame {}", self.frames);
    }

    fn draw_rectangle(&mut self, center: Vec2, half_extents: Vec2, _color: Color) {
        self.rects += 1;
        log::trace!("rect {center} ±{half_extents}");
    }

    fn draw_line_segment(&mut self, p0: Vec2, p1: Vec2, width: f32, _color: Color) {
        self.lines += 1;
        log::trace!("line {p0} -> {p1} ({width}px)");
    }
}

struct Args {
    config: Option<String>,
    seed: u64,
    seconds: f32,
    demo: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config: None,
        seed: 0x5eed,
        seconds: 60.0,
        demo: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|e| format!("bad seed {value}: {e}"))?;
            }
            "--seconds" => {
                let value = iter.next().ok_or("--seconds needs a value")?;
                args.seconds = value
                    .parse()
                    .map_err(|e| format!("bad duration {value}: {e}"))?;
            }
            "--demo" => args.demo = true,
            other if other.starts_with("--") => return Err(format!("unknown flag {other}")),
            path => args.config = Some(path.to_string()),
        }
    }
    Ok(args)
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    match_state: MatchState,
    left: u8,
    right: u8,
    frames: u64,
    rects: u64,
    lines: u64,
    events: Vec<GameEvent>,
    final_state: serde_json::Value,
}

fn run(args: Args) -> pongy::Result<Summary> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    log::info!("{} (headless) starting...", config.caption);

    let mut game = GameLoop::new(config, args.seed)?
        .with_controller(Side::Left, Controller::Computer)
        .with_controller(Side::Right, Controller::Computer);
    if !args.demo {
        game.push_key(KeyEvent::Down(Key::Start));
    }

    let mut renderer = LogRenderer::default();
    let mut events = Vec::new();
    let frames = (args.seconds / SIM_DT).ceil() as u64;
    for _ in 0..frames {
        for event in game.frame(SIM_DT, &mut renderer)? {
            // Bounces are too frequent to be worth keeping
            if !matches!(
                event,
                GameEvent::WallBounce { .. } | GameEvent::PaddleClamped { .. }
            ) {
                events.push(event);
            }
        }
        if game.should_quit() {
            break;
        }
    }

    let state = game.state();
    Ok(Summary {
        seed: args.seed,
        ticks: state.time_ticks,
        match_state: state.match_state,
        left: state.score(Side::Left).value,
        right: state.score(Side::Right).value,
        frames: renderer.frames,
        rects: renderer.rects,
        lines: renderer.lines,
        events,
        final_state: serde_json::to_value(state.snapshot())?,
    })
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: pongy [config.json] [--seed N] [--seconds S] [--demo]");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to encode summary: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
