//! Enemy waves and exp fragment bursts

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::{Enemy, ExpFragment};
use crate::consts::*;
use crate::random;

/// True on the gameplay ticks that spawn an enemy
pub fn should_spawn_enemy(ticks: u64) -> bool {
    ticks % ENEMY_SPAWN_INTERVAL_TICKS == 0
}

/// New enemy at one of the four points inset from the arena corners
pub fn spawn_enemy(rng: &mut impl Rng, arena: &Rect) -> Enemy {
    let xs = [
        arena.left() + SPAWN_EDGE_INSET,
        arena.right() - SPAWN_EDGE_INSET,
    ];
    let ys = [
        arena.top() - SPAWN_EDGE_INSET,
        arena.bottom() + SPAWN_EDGE_INSET,
    ];
    let x = xs[random(rng, 0, 1) as usize];
    let y = ys[random(rng, 0, 1) as usize];
    log::debug!("spawning enemy at ({x}, {y})");
    Enemy::new(x, y)
}

/// Zero to two fragments scattered around `origin` in random directions
pub fn spawn_fragments(rng: &mut impl Rng, origin: Vec2) -> Vec<ExpFragment> {
    let count = random(rng, 0, EXP_CHIP_MAX_BURST);
    (0..count)
        .map(|i| {
            let stagger = i as f32 * EXP_CHIP_STAGGER;
            let x = origin.x + random(rng, -EXP_CHIP_JITTER, EXP_CHIP_JITTER) as f32 + stagger;
            let y = origin.y + random(rng, -EXP_CHIP_JITTER, EXP_CHIP_JITTER) as f32 + stagger;
            let angle = random(rng, 0, 359) as f32;
            ExpFragment::new(x, y, angle)
        })
        .collect()
}
