//! Per-entity update rules
//!
//! Player steering and firing, bullet travel, familiar orbit, enemy pursuit
//! and fragment magnetism. Each function advances one entity kind by one tick.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Bullet, Direction, Enemy, ExpFragment, Familiar, Player};
use crate::consts::*;
use crate::input::FrameInput;
use crate::{angle_to, vel_from_angle};

/// Move the player, fire if the cooldown allows, advance bullets and the
/// familiar. Returns true when a bullet was fired this tick.
pub fn update_player(player: &mut Player, input: &FrameInput, arena: &Rect, ticks: u64) -> bool {
    let firing = input.firing();
    player.bullet_delay = player.bullet_delay.saturating_add(1);

    // Vertical before horizontal; facing only follows movement while not firing
    let steps = [
        (input.up, Direction::Up),
        (input.down, Direction::Down),
        (input.left, Direction::Left),
        (input.right, Direction::Right),
    ];
    for (pressed, direction) in steps {
        if !pressed {
            continue;
        }
        let step = direction.unit() * player.speed;
        player.rect.x += step.x;
        player.rect.y += step.y;
        if !firing {
            player.direction = direction;
        }
    }
    player.rect = player.rect.clamped_within(arena);

    let mut fired = false;
    if firing && player.bullet_delay >= BULLET_COOLDOWN_TICKS {
        player
            .bullets
            .push(Bullet::new(player.rect.center(), player.direction));
        player.bullet_delay = 0;
        fired = true;
    }

    update_bullets(&mut player.bullets, arena);
    player.bullets.retain(|b| b.alive);

    update_familiar(player, ticks);
    player.tick_flash();

    fired
}

/// Advance bullets along their fixed direction; bullets fully outside the
/// arena are marked dead
pub fn update_bullets(bullets: &mut [Bullet], arena: &Rect) {
    for bullet in bullets.iter_mut().filter(|b| b.alive) {
        let step = bullet.direction.unit() * bullet.speed;
        bullet.rect.x += step.x;
        bullet.rect.y += step.y;
        if bullet.rect.is_outside(arena) {
            bullet.alive = false;
        }
    }
}

/// Place the familiar on its orbit around the player, creating it on first use
pub fn update_familiar(player: &mut Player, ticks: u64) {
    let center = player.rect.center();
    let familiar = player
        .familiar
        .get_or_insert_with(|| Familiar::new(center));

    let phase = ticks as f32 / FAMILIAR_PHASE_DIVISOR;
    let pos = center + Vec2::new(phase.sin(), phase.cos()) * FAMILIAR_ORBIT_RADIUS;
    familiar.rect = Rect::from_center(pos, familiar.rect.w, familiar.rect.h);
    familiar.angle = angle_to(pos, center);
}

/// Turn toward the player's current position and step forward
pub fn update_enemy(enemy: &mut Enemy, target: Vec2) {
    enemy.angle = angle_to(enemy.rect.position(), target);
    let vel = vel_from_angle(enemy.angle, enemy.speed);
    enemy.rect.x += vel.x;
    enemy.rect.y += vel.y;
}

/// Scatter, settle, and home in on the player once within magnetic range
pub fn update_fragment(fragment: &mut ExpFragment, player: &Player) {
    let target = player.rect.position();
    let pos = fragment.rect.position();
    if pos.distance(target) <= player.exp_chip_magnetic_dist {
        fragment.angle = angle_to(pos, target);
        fragment.speed = player.speed + 1.0;
    }

    if fragment.speed >= 1.0 {
        let vel = vel_from_angle(fragment.angle, fragment.speed);
        fragment.rect.x += vel.x;
        fragment.rect.y += vel.y;
        fragment.speed -= 1.0;
    }
}
