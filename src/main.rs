//! Ping Pong headless driver
//!
//! Stands in for a render host: reports a fixed canvas size every tick,
//! feeds a scripted sweeping pointer, tessellates each frame and prints the
//! final debug snapshot as JSON.
//!
//! Usage: `pingpong [config.json] [ticks]`

use pingpong::renderer;
use pingpong::sim::{GameEvent, GameState, tick};
use pingpong::{GameConfig, Scene};

const CANVAS_WIDTH: f32 = 400.0;
const CANVAS_HEIGHT: f32 = 800.0;
const DEFAULT_TICKS: u64 = 600;
const PROGRESS_EVERY: u64 = 120;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    let ticks = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };

    log::info!("Ping Pong (headless) running {ticks} ticks on {CANVAS_WIDTH}x{CANVAS_HEIGHT}");

    let mut state = GameState::new(&config);
    let mut vertex_count = 0;

    for frame in 0..ticks {
        // Pointer events arrive between frames; the latest one wins
        if frame > 0 {
            state.report_pointer_x(pointer_x(frame, state.board_size().width));
        }

        let events = tick(&mut state, CANVAS_WIDTH, CANVAS_HEIGHT)?;
        for event in &events {
            if let GameEvent::PaddleHit { side } = event {
                log::debug!("Frame {frame}: {side:?} paddle hit");
            }
        }

        let scene = Scene::build(&state, config.debug);
        vertex_count = renderer::tessellate(&scene).len();

        if (frame + 1) % PROGRESS_EVERY == 0 {
            log::info!(
                "Frame {}: score {}, ball speed {:.1}",
                frame + 1,
                state.score(),
                state.ball().speed()
            );
        }
    }

    log::info!("Last frame tessellated to {vertex_count} vertices");

    let snapshot = state.snapshot();
    if config.debug {
        eprintln!("{}", snapshot.overlay_text());
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Scripted pointer sweeping back and forth around the board's center
fn pointer_x(frame: u64, board_width: f32) -> f32 {
    let t = frame as f32 * 0.02;
    board_width * (0.5 + 0.15 * t.sin())
}
