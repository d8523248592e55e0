//! Sound effect intents
//!
//! The core only names the effect; an `AudioSink` on the host side loads and
//! plays it. Effects are dropped before reaching the sink when sfx is off.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired a bullet
    Shoot,
    /// Enemy destroyed by a bullet or the familiar
    EnemyDestroyed,
    /// Enemy ran into the player
    PlayerHurt,
    /// Exp fragment collected
    Pickup,
    /// Menu cursor moved
    MenuMove,
    /// Menu option confirmed
    MenuSelect,
}

impl SoundEffect {
    /// Asset key; the host maps it to `sounds/<key>.wav`
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::EnemyDestroyed => "enemy_death",
            SoundEffect::PlayerHurt => "hurt",
            SoundEffect::Pickup => "exp_pickup",
            SoundEffect::MenuMove => "menu_move",
            SoundEffect::MenuSelect => "menu",
        }
    }

    /// Effect that accompanies a gameplay event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Fired => SoundEffect::Shoot,
            GameEvent::EnemyDestroyed { .. } => SoundEffect::EnemyDestroyed,
            GameEvent::PlayerHurt { .. } => SoundEffect::PlayerHurt,
            GameEvent::ExpCollected { .. } => SoundEffect::Pickup,
        }
    }
}

/// Queue `effect` unless sound effects are switched off
pub fn play_sfx(settings: &Settings, queue: &mut Vec<SoundEffect>, effect: SoundEffect) {
    if settings.sfx {
        queue.push(effect);
    }
}

/// Plays effects requested by the core
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, gain: f32);
}
