//! Minimal Survivors headless runner
//!
//! Drives the game core from a recorded input trace (a JSON array of frame
//! inputs) or a built-in demo script, and logs what a host would draw and
//! play. Useful for replaying sessions without a window.

use std::env;
use std::fs;

use minimal_survivors::audio::{AudioSink, SoundEffect};
use minimal_survivors::render::{DrawCommand, RenderSink};
use minimal_survivors::settings::{JsonFileStore, MemoryStore, SettingsStore};
use minimal_survivors::sim::Rect;
use minimal_survivors::{FrameInput, Game, GameConfig, PlatformRequest, Result};

/// Counts draw commands per frame instead of rasterizing them
#[derive(Default)]
struct CountingRenderer {
    commands: usize,
}

impl RenderSink for CountingRenderer {
    fn draw(&mut self, _command: &DrawCommand) {
        self.commands += 1;
    }
}

/// Logs each effect instead of playing it
#[derive(Default)]
struct LoggingAudio {
    played: usize,
}

impl AudioSink for LoggingAudio {
    fn play(&mut self, effect: SoundEffect, gain: f32) {
        log::debug!("play sounds/{}.wav at gain {gain}", effect.key());
        self.played += 1;
    }
}

/// Start a run, hold fire while circling the arena, then stop
fn demo_trace() -> Vec<FrameInput> {
    let mut trace = vec![FrameInput {
        confirm_pressed: true,
        ..Default::default()
    }];
    for frame in 0..1200 {
        let leg = (frame / 90) % 4;
        trace.push(FrameInput {
            up: leg == 0,
            right: leg == 1,
            down: leg == 2,
            left: leg == 3,
            fire_held: true,
            fire_pressed: frame % 10 == 0,
            ..Default::default()
        });
    }
    trace
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Minimal Survivors (headless) starting...");

    let mut args = env::args().skip(1);
    let trace = match args.next() {
        Some(path) => {
            log::info!("Replaying input trace {path}");
            serde_json::from_str::<Vec<FrameInput>>(&fs::read_to_string(&path)?)?
        }
        None => demo_trace(),
    };
    let store: Box<dyn SettingsStore> = match args.next() {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::default()),
    };

    let arena = Rect::arena();
    let mut game = Game::new(GameConfig::default(), store);
    let mut renderer = CountingRenderer::default();
    let mut audio = LoggingAudio::default();

    'frames: for input in &trace {
        let frame = game.frame(input, &arena);
        frame.dispatch(&mut renderer, &mut audio);
        for request in &frame.requests {
            match request {
                PlatformRequest::Quit => break 'frames,
                PlatformRequest::SetFullscreen(on) => log::info!("Fullscreen: {on}"),
            }
        }
    }

    match game.world() {
        Some(world) => log::info!(
            "Stopped in {:?} after {} frames: level {}, health {}, {} enemies destroyed",
            game.scene(),
            game.tick_count(),
            world.player.level(),
            world.player.health,
            world.enemies_destroyed
        ),
        None => log::info!(
            "Stopped in {:?} after {} frames without playing",
            game.scene(),
            game.tick_count()
        ),
    }
    log::info!(
        "{} draw commands, {} sounds",
        renderer.commands,
        audio.played
    );
    Ok(())
}
