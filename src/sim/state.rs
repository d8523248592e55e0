//! Entity model and gameplay world
//!
//! Everything a gameplay session owns lives in `World`; discarding the world
//! is how a reset transition starts a fresh run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::render::Color;

/// Facing direction of the player and its bullets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Heading in degrees
    pub fn angle(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::Up => 90.0,
            Direction::Left => 180.0,
            Direction::Down => 270.0,
        }
    }

    /// Unit step along the direction
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Down => Vec2::NEG_Y,
        }
    }
}

/// Anything the collision engine can pair up
pub trait Collidable {
    fn rect(&self) -> Rect;

    /// Dead entities are skipped by every later pair in a collision pass
    fn is_alive(&self) -> bool {
        true
    }
}

/// Temporary color override, counted down once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub color: Color,
    pub ticks_remaining: u32,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    pub direction: Direction,
    /// Sprite rotation, degrees
    pub angle: f32,
    pub speed: f32,
    pub alive: bool,
}

impl Bullet {
    pub fn new(center: Vec2, direction: Direction) -> Self {
        Self {
            rect: Rect::from_center(center, BULLET_SIZE, BULLET_SIZE),
            direction,
            angle: direction.angle(),
            speed: BULLET_SPEED,
            alive: true,
        }
    }
}

impl Collidable for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Companion orbiting the player; lives and dies with it
#[derive(Debug, Clone)]
pub struct Familiar {
    pub rect: Rect,
    /// Faces the player, degrees
    pub angle: f32,
}

impl Familiar {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, FAMILIAR_SIZE, FAMILIAR_SIZE),
            angle: 0.0,
        }
    }
}

impl Collidable for Familiar {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub health: i32,
    /// Pixels per tick
    pub speed: f32,
    pub exp: u32,
    /// Last movement direction; frozen while firing
    pub direction: Direction,
    /// Ticks since the last shot
    pub bullet_delay: u32,
    /// In fire order
    pub bullets: Vec<Bullet>,
    /// Created on the first player update
    pub familiar: Option<Familiar>,
    pub exp_chip_magnetic_dist: f32,
    pub flash: Option<Flash>,
}

impl Player {
    /// Fresh player centered in the arena
    pub fn new(arena: &Rect) -> Self {
        Self {
            rect: Rect::from_center(arena.center(), PLAYER_SIZE, PLAYER_SIZE),
            health: PLAYER_START_HEALTH,
            speed: PLAYER_SPEED,
            exp: 0,
            direction: Direction::Up,
            bullet_delay: 0,
            bullets: Vec::new(),
            familiar: None,
            exp_chip_magnetic_dist: EXP_CHIP_MAGNETIC_DIST,
            flash: None,
        }
    }

    pub fn level(&self) -> u32 {
        1 + self.exp / EXP_PER_LEVEL
    }

    /// Override the sprite color for `ticks` ticks
    pub fn start_flash(&mut self, color: Color, ticks: u32) {
        self.flash = Some(Flash {
            color,
            ticks_remaining: ticks,
        });
    }

    pub fn tick_flash(&mut self) {
        if let Some(flash) = &mut self.flash {
            flash.ticks_remaining = flash.ticks_remaining.saturating_sub(1);
            if flash.ticks_remaining == 0 {
                self.flash = None;
            }
        }
    }
}

impl Collidable for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    /// Bearing toward the player, degrees
    pub angle: f32,
    pub speed: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            angle: 0.0,
            speed: ENEMY_SPEED,
            alive: true,
        }
    }
}

impl Collidable for Enemy {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Experience pickup dropped by enemies
#[derive(Debug, Clone)]
pub struct ExpFragment {
    pub rect: Rect,
    pub speed: f32,
    pub angle: f32,
    pub exp_amount: u32,
    pub alive: bool,
}

impl ExpFragment {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            rect: Rect::new(x, y, EXP_CHIP_SIZE, EXP_CHIP_SIZE),
            speed: EXP_CHIP_SPEED,
            angle,
            exp_amount: EXP_CHIP_AMOUNT,
            alive: true,
        }
    }
}

impl Collidable for ExpFragment {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Something that happened during a gameplay tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player fired a bullet
    Fired,
    /// An enemy was killed by a bullet or the familiar
    EnemyDestroyed { at: Vec2 },
    /// An enemy ran into the player
    PlayerHurt { health: i32 },
    /// The player picked up experience
    ExpCollected { amount: u32 },
}

/// Complete gameplay state for one run
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub fragments: Vec<ExpFragment>,
    pub enemies_destroyed: u32,
    /// Gameplay ticks simulated so far (paused frames don't count)
    pub ticks: u64,
    pub rng: Pcg32,
}

impl World {
    pub fn new(seed: u64, arena: &Rect) -> Self {
        Self {
            player: Player::new(arena),
            enemies: Vec::new(),
            fragments: Vec::new(),
            enemies_destroyed: 0,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}
