//! Minimal Survivors - a top-down arena shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (entities, movement, spawning, collisions)
//! - `scene`: Scene state machine and the per-frame entry point
//! - `menu`: Cursor-based menu navigation shared by every non-gameplay scene
//! - `render` / `audio`: Declarative draw and sound intents for the host
//! - `settings`: Player preferences and their storage seam

pub mod audio;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod text;

pub use error::{Error, Result};
pub use input::FrameInput;
pub use scene::{Frame, Game, GameConfig, PlatformRequest, Scene, Transition};
pub use settings::Settings;

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Simulation rate; every timer in the game counts these ticks
    pub const FPS: u64 = 60;

    /// Arena dimensions (origin bottom-left)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_START_HEALTH: i32 = 6;
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Ticks between shots while fire is held
    pub const BULLET_COOLDOWN_TICKS: u32 = 10;
    /// Fragments closer than this snap toward the player
    pub const EXP_CHIP_MAGNETIC_DIST: f32 = 120.0;
    /// Experience needed per player level
    pub const EXP_PER_LEVEL: u32 = 10;
    /// How long the player flashes after taking a hit
    pub const HURT_FLASH_TICKS: u32 = 12;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 12.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 32.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    /// One enemy per second of gameplay
    pub const ENEMY_SPAWN_INTERVAL_TICKS: u64 = FPS;
    /// Spawn points sit this far in from the arena edges
    pub const SPAWN_EDGE_INSET: f32 = 10.0;

    /// Familiar orbit
    pub const FAMILIAR_SIZE: f32 = 24.0;
    pub const FAMILIAR_ORBIT_RADIUS: f32 = 100.0;
    /// Elapsed ticks are divided by this to get the orbit phase (radians)
    pub const FAMILIAR_PHASE_DIVISOR: f32 = 18.0;

    /// Exp fragment defaults
    pub const EXP_CHIP_SIZE: f32 = 12.0;
    pub const EXP_CHIP_SPEED: f32 = 6.0;
    pub const EXP_CHIP_AMOUNT: u32 = 1;
    pub const EXP_CHIP_MAX_BURST: i32 = 2;
    pub const EXP_CHIP_JITTER: i32 = 5;
    pub const EXP_CHIP_STAGGER: f32 = 4.0;

    /// Frames between repeated cursor moves while a direction is held
    pub const MENU_REPEAT_DELAY_TICKS: i32 = 10;

    /// Gain applied to every sound effect
    pub const SFX_GAIN: f32 = 0.6;
}

/// Convert degrees to radians, rounded to 4 decimal places so results stay
/// reproducible across platforms
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    (deg * std::f32::consts::PI / 180.0 * 10_000.0).round() / 10_000.0
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / std::f32::consts::PI
}

/// Velocity for a heading in degrees (0 = facing right, counter-clockwise)
#[inline]
pub fn vel_from_angle(angle: f32, speed: f32) -> Vec2 {
    let rad = deg_to_rad(angle);
    Vec2::new(speed * rad.cos(), speed * rad.sin())
}

/// Bearing in degrees [0, 360) from `from` toward `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    rad_to_deg(delta.y.atan2(delta.x)).rem_euclid(360.0)
}

/// Sum an angle and a difference, wrapped to [0, 360)
///
/// Part of the public angle toolkit for hosts and scripted content; the
/// built-in rules only need `angle_to` and `vel_from_angle`.
#[inline]
pub fn add_to_angle(angle: f32, diff: f32) -> f32 {
    (angle + diff).rem_euclid(360.0)
}

/// Diametrically opposed angle, e.g. for knockback away from a hit
#[inline]
pub fn opposite_angle(angle: f32) -> f32 {
    add_to_angle(angle, 180.0)
}

/// Random integer in `[min, max]`, inclusive on both ends
pub fn random(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// True `percent`% of the time
///
/// Library API for drop tables and other chance rolls on the world RNG; the
/// built-in spawner uses `random` only. Percentages outside `[0, 100]` are a
/// caller bug and are rejected.
pub fn percent_chance(rng: &mut impl Rng, percent: f32) -> Result<bool> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(Error::PercentOutOfRange(percent));
    }
    if percent == 0.0 {
        return Ok(false);
    }
    if percent == 100.0 {
        return Ok(true);
    }
    Ok(rng.random::<f32>() < percent / 100.0)
}
