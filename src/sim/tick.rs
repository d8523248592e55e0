//! Fixed timestep gameplay tick
//!
//! Advances a `World` by one frame in a fixed order: spawn, player, enemies,
//! fragments, collisions, purge. Pausing and the game-over check belong to
//! the gameplay scene around this call.

use glam::Vec2;

use super::collision::collide;
use super::movement::{update_enemy, update_fragment, update_player};
use super::rect::Rect;
use super::spawner::{should_spawn_enemy, spawn_enemy, spawn_fragments};
use super::state::{GameEvent, World};
use crate::consts::HURT_FLASH_TICKS;
use crate::input::FrameInput;
use crate::render::RED;

/// Advance the world by one tick and report what happened
pub fn tick(world: &mut World, input: &FrameInput, arena: &Rect) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.ticks += 1;

    if should_spawn_enemy(world.ticks) {
        let enemy = spawn_enemy(&mut world.rng, arena);
        world.enemies.push(enemy);
    }

    if update_player(&mut world.player, input, arena, world.ticks) {
        events.push(GameEvent::Fired);
    }

    let target = world.player.rect.position();
    for enemy in &mut world.enemies {
        update_enemy(enemy, target);
    }

    for fragment in &mut world.fragments {
        update_fragment(fragment, &world.player);
    }

    resolve_collisions(world, &mut events);

    // Purge before the next tick's spawn so no death resolves twice
    world.enemies.retain(|e| e.alive);
    world.fragments.retain(|f| f.alive);

    events
}

/// Bullets x enemies, enemies x player, enemies x familiar, fragments x player
fn resolve_collisions(world: &mut World, events: &mut Vec<GameEvent>) {
    let World {
        player,
        enemies,
        fragments,
        enemies_destroyed,
        rng,
        ..
    } = world;
    let mut deaths: Vec<Vec2> = Vec::new();

    collide(&mut player.bullets, enemies, |bullet, enemy| {
        bullet.alive = false;
        enemy.alive = false;
        *enemies_destroyed += 1;
        let at = enemy.rect.center();
        deaths.push(at);
        events.push(GameEvent::EnemyDestroyed { at });
    });

    collide(enemies, std::slice::from_mut(player), |enemy, player| {
        enemy.alive = false;
        player.health -= 1;
        player.start_flash(RED, HURT_FLASH_TICKS);
        deaths.push(enemy.rect.center());
        events.push(GameEvent::PlayerHurt {
            health: player.health,
        });
    });

    if let Some(familiar) = player.familiar.as_mut() {
        collide(enemies, std::slice::from_mut(familiar), |enemy, _| {
            enemy.alive = false;
            *enemies_destroyed += 1;
            let at = enemy.rect.center();
            deaths.push(at);
            events.push(GameEvent::EnemyDestroyed { at });
        });
    }

    collide(fragments, std::slice::from_mut(player), |fragment, player| {
        fragment.alive = false;
        player.exp += fragment.exp_amount;
        events.push(GameEvent::ExpCollected {
            amount: fragment.exp_amount,
        });
    });

    for at in deaths {
        let burst = spawn_fragments(rng, at);
        log::debug!("enemy died at {at}, dropping {} fragments", burst.len());
        fragments.extend(burst);
    }
}
