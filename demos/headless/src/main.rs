//! Scripted headless run of the simulation core.
//!
//! Decodes a built-in level, drives the world for twenty simulated seconds
//! with a canned intent track, and logs the events a real host would turn
//! into sound and UI. Run with `RUST_LOG=info` (or `debug`) to watch it;
//! pass a tuning JSON path as the first argument to override defaults.

use std::env;
use std::error::Error;
use std::fs;

use lootrun_core::{
    build_view_buffer, FixedTimestep, Intents, LevelBitmap, Tuning, ViewBuffer, World, WorldEvent,
};

/// Authoring ascii for the demo level; same palette as the PNG pipeline.
const LEVEL_ROWS: &[&str] = &[
    "......................................",
    "....o...o...o.....*........o..o..o....",
    "S.....................................",
    "########.#####.####..#################",
];

fn paint_level() -> LevelBitmap {
    let height = LEVEL_ROWS.len() as u32;
    let width = LEVEL_ROWS[0].len() as u32;
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for row in LEVEL_ROWS {
        for ch in row.chars() {
            let rgba: [u8; 4] = match ch {
                '#' => [255, 255, 255, 255],
                'S' => [0, 255, 0, 255],
                'o' => [255, 255, 0, 255],
                '*' => [255, 0, 255, 255],
                _ => [0, 0, 0, 255],
            };
            data.extend_from_slice(&rgba);
        }
    }
    LevelBitmap::from_raw(width, height, data)
}

/// Canned input: always running right, with a hop every second and a half.
fn intents_for(step: u32) -> Intents {
    let mut intents = Intents::right();
    intents.jump_held = step % 90 < 25;
    intents
}

fn report(event: WorldEvent) {
    match event {
        WorldEvent::LevelLoaded => log::info!("level ready"),
        WorldEvent::CoinCollected { score } => log::info!("coin! +{score}"),
        WorldEvent::PowerupCollected { score } => log::info!("powerup! +{score}, flight armed"),
        WorldEvent::PowerupExpired => log::info!("flight wore off"),
        WorldEvent::LifeLost { lives_left } => log::info!("splash. lives left: {lives_left}"),
        WorldEvent::GameOver => log::info!("game over"),
        WorldEvent::ReturnToMenu => log::info!("back to menu"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let tuning = match env::args().nth(1) {
        Some(path) => Tuning::from_json(&fs::read_to_string(&path)?)?,
        None => Tuning::default(),
    };

    let mut world = World::new(paint_level(), tuning);
    let mut view = ViewBuffer::new();
    let mut timestep = FixedTimestep::new(1.0 / 60.0);

    // Frames arrive at 30 Hz; each carries two fixed simulation steps.
    let frame_dt = 1.0 / 30.0;
    let mut step: u32 = 0;
    for _frame in 0..600 {
        for _ in 0..timestep.advance(frame_dt) {
            world.update(timestep.step(), &intents_for(step));
            step += 1;
        }
        for event in world.drain_events() {
            report(event);
        }
        build_view_buffer(world.level(), &mut view);
    }

    let camera = world.camera().position();
    log::info!(
        "run complete after {step} steps: score {}, lives {}, camera at ({:.2}, {:.2}), {} sprites in the last frame",
        world.score(),
        world.lives(),
        camera.x,
        camera.y,
        view.instance_count()
    );
    Ok(())
}
